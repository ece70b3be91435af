//! Interactive coin-line game against the minimax AI.
//!
//! Usage:
//!   cargo run --release --bin coin_line -- [OPTIONS]
//!
//! Moves are typed as `L1`, `L2`, `R1`, or `R2`: take one or two coins from
//! the left or right end. Type `q` to quit.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use search_games::games::coin_line::{CoinAction, CoinLine, CoinState, Turn, DEFAULT_MAX_COIN};
use search_games::minimax::MinimaxSolver;

#[derive(Parser, Debug)]
#[command(about = "Play the coin-line game against a minimax AI")]
struct Args {
    /// Number of random coins
    #[arg(long, short = 'n', default_value_t = 10)]
    coins: usize,

    /// Largest random coin value
    #[arg(long, default_value_t = DEFAULT_MAX_COIN)]
    max_value: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit coin values, e.g. 3,9,1,2 (overrides --coins)
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<u32>>,

    /// Who moves first
    #[arg(long, value_enum, default_value = "player")]
    first: First,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum First {
    Player,
    Ai,
}

impl From<First> for Turn {
    fn from(first: First) -> Self {
        match first {
            First::Player => Turn::Player,
            First::Ai => Turn::Ai,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let game = match args.values {
        Some(values) => CoinLine::new(values).context("invalid --values")?,
        None => {
            let mut rng = match args.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            CoinLine::random(args.coins, args.max_value, &mut rng).context("invalid coin settings")?
        }
    };

    println!("=================================================");
    println!("  Coin Line");
    println!("=================================================");
    println!();
    println!("Coins: {:?} (total {})", game.coins(), game.total());
    println!("Take 1 or 2 coins from either end: L1, L2, R1, R2 (q to quit)");
    println!();

    let mut state = game.initial_state(args.first.into());
    let mut solver = MinimaxSolver::new(game.clone());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.terminal(&state) {
        println!("{}", state);
        state = match state.turn() {
            Turn::Player => match read_move(&game, &state, &mut lines)? {
                Some(next) => next,
                None => {
                    println!("Bye!");
                    return Ok(());
                }
            },
            Turn::Ai => {
                let (value, action) = solver.best_move(&state)?;
                let Some(action) = action else {
                    bail!("minimax returned no move for {}", state);
                };
                println!("AI plays {} (expected margin {:+})", action, value);
                game.succ(&state, &action)?
            }
        };
    }

    let stats = solver.stats();
    println!();
    println!("{}", state);
    match game.winner(&state)? {
        Some(Turn::Player) => println!("You win!"),
        Some(Turn::Ai) => println!("AI wins!"),
        None => println!("It's a tie!"),
    }
    println!(
        "Positions searched: {} | table hit rate: {:.1}%",
        stats.nodes,
        stats.table.hit_rate() * 100.0
    );

    Ok(())
}

/// Prompt until the player enters a legal move. `None` on quit or end of input.
fn read_move<B: BufRead>(
    game: &CoinLine,
    state: &CoinState,
    lines: &mut io::Lines<B>,
) -> Result<Option<CoinState>> {
    loop {
        print!("Your move: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read move")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let action: CoinAction = match input.parse() {
            Ok(action) => action,
            Err(err) => {
                println!("  {}", err);
                continue;
            }
        };
        match game.succ(state, &action) {
            Ok(next) => return Ok(Some(next)),
            Err(err) => println!("  {}", err),
        }
    }
}
