//! Uninformed search strategies.
//!
//! This module implements four interchangeable strategies over any
//! [`SearchProblem`]:
//! - **Backtracking**: recursive depth-first traversal that keeps the cheapest goal path
//! - **Iterative backtracking**: the same traversal driven by an explicit stack
//! - **BFS**: level-by-level search returning the first (shallowest) goal
//! - **DFS**: deepest-first search returning the first goal it meets
//!
//! All of them share one pruning rule: a state that entered the explored set
//! anywhere in the search is never expanded again. For the backtracking
//! strategies this means a cheaper path reaching an already explored state
//! later on is ignored, so their `best_cost` is the cheapest among the paths
//! actually traversed, not necessarily the global optimum.

use std::collections::VecDeque;
use std::hash::Hash;
use std::{panic, thread};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::config::SearchConfig;
use crate::search::problem::SearchProblem;
use crate::search::result::SearchResult;

/// Common interface of the search strategies.
pub trait Solver {
    /// State type of the problem being solved.
    type State;

    /// Key naming this strategy in reports.
    fn name(&self) -> &'static str;

    /// Run the search from the problem's start state.
    ///
    /// Each call starts from a clean explored set, so running the same solver
    /// twice yields identical results.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the problem rejects
    /// an action it offered itself.
    fn solve(&mut self) -> Result<SearchResult<Self::State>>;
}

/// Whether a traversal ran to completion or hit a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exhausted,
}

/// Cheapest goal path seen so far.
#[derive(Debug, Clone)]
struct BestPath<S> {
    cost: u64,
    path: Vec<S>,
}

fn keep_cheaper<S: Clone>(best: &mut Option<BestPath<S>>, cost: u64, path: &[S]) {
    if best.as_ref().map_or(true, |b| cost < b.cost) {
        *best = Some(BestPath {
            cost,
            path: path.to_vec(),
        });
    }
}

/// Stack reserved for each level of recursive backtracking.
const STACK_BYTES_PER_LEVEL: usize = 8 * 1024;

/// Stack reserved on top of the per-level share.
const BASE_STACK_BYTES: usize = 1024 * 1024;

/// Stack size of the thread that runs a recursion at most `max_depth` deep.
fn recursion_stack_size(max_depth: usize) -> usize {
    max_depth
        .saturating_add(1)
        .saturating_mul(STACK_BYTES_PER_LEVEL)
        .saturating_add(BASE_STACK_BYTES)
}

/// Recursive depth-first backtracking with explored-set pruning.
///
/// Explores every branch and keeps the cheapest goal path found. Recursion
/// depth is bounded by [`SearchConfig::max_depth`]; going deeper aborts the
/// search with an exhausted result. The recursion runs on its own thread
/// whose stack is sized for `max_depth` levels, so the caller's stack size
/// does not matter.
pub struct BacktrackingSearch<'a, P: SearchProblem> {
    problem: &'a P,
    config: SearchConfig,
    explored: FxHashSet<P::State>,
    best: Option<BestPath<P::State>>,
    max_depth: usize,
    branched: usize,
    generated: usize,
}

impl<'a, P: SearchProblem> BacktrackingSearch<'a, P> {
    /// Create a solver with the default configuration.
    pub fn new(problem: &'a P) -> Self {
        Self::with_config(problem, SearchConfig::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(problem: &'a P, config: SearchConfig) -> Self {
        Self {
            problem,
            config,
            explored: FxHashSet::default(),
            best: None,
            max_depth: 0,
            branched: 0,
            generated: 0,
        }
    }

    fn reset(&mut self) {
        self.explored.clear();
        self.best = None;
        self.max_depth = 0;
        self.branched = 0;
        self.generated = 0;
    }

    /// `path` ends with `state` and starts with the start state.
    fn recurse(&mut self, state: &P::State, path: &mut Vec<P::State>, cost: u64) -> Result<Flow> {
        let depth = path.len() - 1;
        self.max_depth = self.max_depth.max(depth);

        if self.problem.is_end(state) {
            keep_cheaper(&mut self.best, cost, path);
            return Ok(Flow::Continue);
        }

        let actions = self.problem.actions(state);
        self.branched += 1;
        self.generated += actions.len();

        for action in actions {
            let next = self.problem.succ(state, &action)?;
            if !self.explored.insert(next.clone()) {
                continue;
            }
            if depth + 1 > self.config.max_depth
                || self.config.expansions_exceeded(self.explored.len())
            {
                return Ok(Flow::Exhausted);
            }

            let step = self.problem.cost(state, &action);
            path.push(next.clone());
            let flow = self.recurse(&next, path, cost + step)?;
            path.pop();

            if flow == Flow::Exhausted {
                return Ok(flow);
            }
        }

        Ok(Flow::Continue)
    }
}

impl<'a, P: SearchProblem> Solver for BacktrackingSearch<'a, P> {
    type State = P::State;

    fn name(&self) -> &'static str {
        Algorithm::Backtracking.key()
    }

    fn solve(&mut self) -> Result<SearchResult<P::State>> {
        self.config.validate()?;
        self.reset();

        let start = self.problem.start_state();
        self.explored.insert(start.clone());

        let root = start.clone();
        let this = &mut *self;
        let flow = thread::scope(|scope| -> Result<Flow> {
            let handle = thread::Builder::new()
                .name("backtracking".to_string())
                .stack_size(recursion_stack_size(this.config.max_depth))
                .spawn_scoped(scope, move || {
                    let mut path = vec![root.clone()];
                    this.recurse(&root, &mut path, 0)
                })
                .map_err(|source| Error::Io {
                    operation: "spawn backtracking thread".to_string(),
                    source,
                })?;
            match handle.join() {
                Ok(flow) => flow,
                Err(payload) => panic::resume_unwind(payload),
            }
        })?;

        let result = finish(flow, self.best.take(), start, self.explored.len(), self.max_depth);
        Ok(result.with_branching(self.branched, self.generated))
    }
}

/// Stack entry of the iterative strategies.
#[derive(Debug, Clone)]
struct Frame<S> {
    state: S,
    depth: usize,
    cost: u64,
}

/// Depth-first backtracking driven by an explicit stack.
///
/// Produces exactly the result of [`BacktrackingSearch`]: children are pushed
/// in reverse action order so the first action is popped first, and a state is
/// only claimed in the explored set when it is popped, which is when the
/// recursive version would descend into it.
pub struct IterativeBacktrackingSearch<'a, P: SearchProblem> {
    problem: &'a P,
    config: SearchConfig,
    explored: FxHashSet<P::State>,
    best: Option<BestPath<P::State>>,
    max_depth: usize,
    branched: usize,
    generated: usize,
}

impl<'a, P: SearchProblem> IterativeBacktrackingSearch<'a, P> {
    /// Create a solver with the default configuration.
    pub fn new(problem: &'a P) -> Self {
        Self::with_config(problem, SearchConfig::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(problem: &'a P, config: SearchConfig) -> Self {
        Self {
            problem,
            config,
            explored: FxHashSet::default(),
            best: None,
            max_depth: 0,
            branched: 0,
            generated: 0,
        }
    }

    fn reset(&mut self) {
        self.explored.clear();
        self.best = None;
        self.max_depth = 0;
        self.branched = 0;
        self.generated = 0;
    }

    fn traverse(&mut self, start: &P::State) -> Result<Flow> {
        let mut stack = vec![Frame {
            state: start.clone(),
            depth: 0,
            cost: 0,
        }];
        // Current root-to-node path; entries deeper than a popped frame belong
        // to subtrees that are already finished.
        let mut path: Vec<P::State> = Vec::new();

        while let Some(frame) = stack.pop() {
            if !self.explored.insert(frame.state.clone()) {
                continue;
            }
            if self.config.expansions_exceeded(self.explored.len()) {
                return Ok(Flow::Exhausted);
            }

            path.truncate(frame.depth);
            path.push(frame.state.clone());
            self.max_depth = self.max_depth.max(frame.depth);

            if self.problem.is_end(&frame.state) {
                keep_cheaper(&mut self.best, frame.cost, &path);
                continue;
            }

            let actions = self.problem.actions(&frame.state);
            self.branched += 1;
            self.generated += actions.len();

            for action in actions.iter().rev() {
                let next = self.problem.succ(&frame.state, action)?;
                if self.explored.contains(&next) {
                    continue;
                }
                let step = self.problem.cost(&frame.state, action);
                stack.push(Frame {
                    state: next,
                    depth: frame.depth + 1,
                    cost: frame.cost + step,
                });
            }
        }

        Ok(Flow::Continue)
    }
}

impl<'a, P: SearchProblem> Solver for IterativeBacktrackingSearch<'a, P> {
    type State = P::State;

    fn name(&self) -> &'static str {
        Algorithm::BacktrackingIterative.key()
    }

    fn solve(&mut self) -> Result<SearchResult<P::State>> {
        self.config.validate()?;
        self.reset();

        let start = self.problem.start_state();
        let flow = self.traverse(&start)?;

        let result = finish(flow, self.best.take(), start, self.explored.len(), self.max_depth);
        Ok(result.with_branching(self.branched, self.generated))
    }
}

fn finish<S: Clone>(
    flow: Flow,
    best: Option<BestPath<S>>,
    start: S,
    expanded: usize,
    max_depth: usize,
) -> SearchResult<S> {
    match (flow, best) {
        (Flow::Exhausted, _) => SearchResult::exhausted(start, expanded, max_depth),
        (Flow::Continue, Some(best)) => SearchResult::solved(best.cost, best.path, expanded, max_depth),
        (Flow::Continue, None) => SearchResult::unsolved(start, expanded, max_depth),
    }
}

/// Walk parent links back from `goal` to `start`.
fn trace_path<S: Clone + Eq + Hash>(parents: &FxHashMap<S, S>, start: &S, goal: S) -> Vec<S> {
    let mut path = vec![goal];
    while let Some(last) = path.last() {
        if last == start {
            break;
        }
        match parents.get(last) {
            Some(parent) => path.push(parent.clone()),
            None => break,
        }
    }
    path.reverse();
    path
}

/// Breadth-first search with explored-set pruning.
///
/// States are claimed when generated and goals are recognised at generation
/// time, so the search returns as soon as the first goal appears. With unit
/// costs the reported cost is the minimum number of actions.
pub struct BreadthFirstSearch<'a, P: SearchProblem> {
    problem: &'a P,
    config: SearchConfig,
    explored: FxHashSet<P::State>,
    parents: FxHashMap<P::State, P::State>,
}

impl<'a, P: SearchProblem> BreadthFirstSearch<'a, P> {
    /// Create a solver with the default configuration.
    pub fn new(problem: &'a P) -> Self {
        Self::with_config(problem, SearchConfig::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(problem: &'a P, config: SearchConfig) -> Self {
        Self {
            problem,
            config,
            explored: FxHashSet::default(),
            parents: FxHashMap::default(),
        }
    }
}

impl<'a, P: SearchProblem> Solver for BreadthFirstSearch<'a, P> {
    type State = P::State;

    fn name(&self) -> &'static str {
        Algorithm::Bfs.key()
    }

    fn solve(&mut self) -> Result<SearchResult<P::State>> {
        self.config.validate()?;
        self.explored.clear();
        self.parents.clear();

        let start = self.problem.start_state();
        self.explored.insert(start.clone());
        if self.problem.is_end(&start) {
            return Ok(SearchResult::solved(0, vec![start], self.explored.len(), 0));
        }

        let mut frontier = VecDeque::new();
        frontier.push_back(Frame {
            state: start.clone(),
            depth: 0,
            cost: 0,
        });
        let mut max_depth = 0;
        let (mut branched, mut generated) = (0, 0);

        while let Some(frame) = frontier.pop_front() {
            max_depth = max_depth.max(frame.depth);

            let actions = self.problem.actions(&frame.state);
            branched += 1;
            generated += actions.len();

            for action in actions {
                let next = self.problem.succ(&frame.state, &action)?;
                if !self.explored.insert(next.clone()) {
                    continue;
                }
                if self.config.expansions_exceeded(self.explored.len()) {
                    return Ok(SearchResult::exhausted(start, self.explored.len(), max_depth)
                        .with_branching(branched, generated));
                }
                self.parents.insert(next.clone(), frame.state.clone());

                let cost = frame.cost + self.problem.cost(&frame.state, &action);
                if self.problem.is_end(&next) {
                    let path = trace_path(&self.parents, &start, next);
                    return Ok(SearchResult::solved(
                        cost,
                        path,
                        self.explored.len(),
                        frame.depth + 1,
                    )
                    .with_branching(branched, generated));
                }

                frontier.push_back(Frame {
                    state: next,
                    depth: frame.depth + 1,
                    cost,
                });
            }
        }

        Ok(SearchResult::unsolved(start, self.explored.len(), max_depth)
            .with_branching(branched, generated))
    }
}

/// Depth-first search returning the first solution found.
///
/// Children are claimed when generated and pushed in reverse action order;
/// goals are recognised when popped. The returned path is valid but neither
/// its cost nor its length is guaranteed to be minimal.
pub struct DepthFirstSearch<'a, P: SearchProblem> {
    problem: &'a P,
    config: SearchConfig,
    explored: FxHashSet<P::State>,
    parents: FxHashMap<P::State, P::State>,
}

impl<'a, P: SearchProblem> DepthFirstSearch<'a, P> {
    /// Create a solver with the default configuration.
    pub fn new(problem: &'a P) -> Self {
        Self::with_config(problem, SearchConfig::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(problem: &'a P, config: SearchConfig) -> Self {
        Self {
            problem,
            config,
            explored: FxHashSet::default(),
            parents: FxHashMap::default(),
        }
    }
}

impl<'a, P: SearchProblem> Solver for DepthFirstSearch<'a, P> {
    type State = P::State;

    fn name(&self) -> &'static str {
        Algorithm::Dfs.key()
    }

    fn solve(&mut self) -> Result<SearchResult<P::State>> {
        self.config.validate()?;
        self.explored.clear();
        self.parents.clear();

        let start = self.problem.start_state();
        self.explored.insert(start.clone());
        let mut stack = vec![Frame {
            state: start.clone(),
            depth: 0,
            cost: 0,
        }];
        let mut max_depth = 0;
        let (mut branched, mut generated) = (0, 0);

        while let Some(frame) = stack.pop() {
            max_depth = max_depth.max(frame.depth);

            if self.problem.is_end(&frame.state) {
                let path = trace_path(&self.parents, &start, frame.state);
                return Ok(SearchResult::solved(
                    frame.cost,
                    path,
                    self.explored.len(),
                    max_depth,
                )
                .with_branching(branched, generated));
            }

            let actions = self.problem.actions(&frame.state);
            branched += 1;
            generated += actions.len();

            for action in actions.iter().rev() {
                let next = self.problem.succ(&frame.state, action)?;
                if !self.explored.insert(next.clone()) {
                    continue;
                }
                if self.config.expansions_exceeded(self.explored.len()) {
                    return Ok(SearchResult::exhausted(start, self.explored.len(), max_depth)
                        .with_branching(branched, generated));
                }
                self.parents.insert(next.clone(), frame.state.clone());
                stack.push(Frame {
                    state: next,
                    depth: frame.depth + 1,
                    cost: frame.cost + self.problem.cost(&frame.state, action),
                });
            }
        }

        Ok(SearchResult::unsolved(start, self.explored.len(), max_depth))
    }
}

/// The available search strategies.
///
/// Serialized names match the per-algorithm keys of the results file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// [`BacktrackingSearch`]
    #[serde(rename = "backtracking")]
    Backtracking,
    /// [`IterativeBacktrackingSearch`]
    #[serde(rename = "backtrackingIter")]
    BacktrackingIterative,
    /// [`BreadthFirstSearch`]
    #[serde(rename = "bfs")]
    Bfs,
    /// [`DepthFirstSearch`]
    #[serde(rename = "dfs")]
    Dfs,
}

impl Algorithm {
    /// Every strategy, in report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Backtracking,
        Algorithm::BacktrackingIterative,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Stable key used in reports and result files.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Backtracking => "backtracking",
            Algorithm::BacktrackingIterative => "backtrackingIter",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Build the matching solver and run it on `problem`.
    pub fn run<P: SearchProblem>(
        &self,
        problem: &P,
        config: &SearchConfig,
    ) -> Result<SearchResult<P::State>> {
        let config = config.clone();
        match self {
            Algorithm::Backtracking => BacktrackingSearch::with_config(problem, config).solve(),
            Algorithm::BacktrackingIterative => {
                IterativeBacktrackingSearch::with_config(problem, config).solve()
            }
            Algorithm::Bfs => BreadthFirstSearch::with_config(problem, config).solve(),
            Algorithm::Dfs => DepthFirstSearch::with_config(problem, config).solve(),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::jugs::{JugState, NJugsProblem};
    use crate::search::config::DEFAULT_MAX_DEPTH;
    use crate::search::problem::{SearchAction, SearchState};

    fn jugs(capacities: &[i64], goal: &[i64]) -> NJugsProblem {
        NJugsProblem::new(capacities, goal).unwrap()
    }

    fn state(amounts: &[u32]) -> JugState {
        JugState::new(amounts.to_vec())
    }

    /// Every consecutive pair must be joined by a legal action.
    fn assert_valid_path(problem: &NJugsProblem, path: &[JugState]) {
        assert_eq!(path[0], problem.start_state());
        for pair in path.windows(2) {
            let connected = problem
                .actions(&pair[0])
                .iter()
                .any(|a| problem.succ(&pair[0], a).unwrap() == pair[1]);
            assert!(connected, "no action leads from {:?} to {:?}", pair[0], pair[1]);
        }
    }

    /// Shortest action counts to every reachable state, by repeated relaxation
    /// over the full edge list.
    fn brute_force_distances(problem: &NJugsProblem) -> FxHashMap<JugState, u64> {
        let start = problem.start_state();
        let mut reachable = vec![start.clone()];
        let mut seen: FxHashSet<JugState> = [start.clone()].into_iter().collect();
        let mut i = 0;
        while i < reachable.len() {
            let s = reachable[i].clone();
            for a in problem.actions(&s) {
                let n = problem.succ(&s, &a).unwrap();
                if seen.insert(n.clone()) {
                    reachable.push(n);
                }
            }
            i += 1;
        }

        let edges: Vec<(JugState, JugState)> = reachable
            .iter()
            .flat_map(|s| {
                problem
                    .actions(s)
                    .into_iter()
                    .map(move |a| (s.clone(), problem.succ(s, &a).unwrap()))
            })
            .collect();

        let mut dist: FxHashMap<JugState, u64> = FxHashMap::default();
        dist.insert(start, 0);
        loop {
            let mut changed = false;
            for (from, to) in &edges {
                if let Some(&d) = dist.get(from) {
                    if dist.get(to).map_or(true, |&cur| d + 1 < cur) {
                        dist.insert(to.clone(), d + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn test_bfs_two_jugs_four_three() {
        let problem = jugs(&[4, 3], &[2, 0]);
        let result = BreadthFirstSearch::new(&problem).solve().unwrap();

        assert!(result.found);
        assert_eq!(result.best_cost, Some(6));
        assert_eq!(result.best_path.len(), 7);
        assert_eq!(result.best_path[0], state(&[0, 0]));
        assert_eq!(result.best_path[6], state(&[2, 0]));
        assert_eq!(result.expanded, 14);
        assert_valid_path(&problem, &result.best_path);
    }

    #[test]
    fn test_bfs_three_five_reaches_four() {
        let problem = jugs(&[3, 5], &[0, 4]);
        let result = BreadthFirstSearch::new(&problem).solve().unwrap();

        assert!(result.found);
        assert_eq!(result.best_cost, Some(7));
        assert_valid_path(&problem, &result.best_path);
    }

    #[test]
    fn test_bfs_matches_brute_force_shortest_paths() {
        for capacities in [vec![2u32, 3], vec![3, 5], vec![4, 3], vec![2, 3, 4]] {
            let caps: Vec<i64> = capacities.iter().map(|&c| c as i64).collect();
            let distances = brute_force_distances(&jugs(&caps, &vec![0; caps.len()]));

            // Every goal vector within capacity, reachable or not.
            let mut goals = vec![vec![]];
            for &cap in &capacities {
                goals = goals
                    .into_iter()
                    .flat_map(|g: Vec<u32>| {
                        (0..=cap).map(move |v| {
                            let mut next = g.clone();
                            next.push(v);
                            next
                        })
                    })
                    .collect();
            }

            for goal in goals {
                let goal_i64: Vec<i64> = goal.iter().map(|&v| v as i64).collect();
                let problem = jugs(&caps, &goal_i64);
                let result = BreadthFirstSearch::new(&problem).solve().unwrap();
                let expected = distances.get(&JugState::new(goal.clone())).copied();

                assert_eq!(result.best_cost, expected, "capacities {:?} goal {:?}", capacities, goal);
                assert_eq!(result.found, expected.is_some());
                if result.found {
                    assert_eq!(result.path_len() as u64, result.best_cost.unwrap());
                }
            }
        }
    }

    #[test]
    fn test_dfs_returns_valid_but_longer_path() {
        let problem = jugs(&[4, 3], &[2, 0]);
        let dfs = DepthFirstSearch::new(&problem).solve().unwrap();
        let bfs = BreadthFirstSearch::new(&problem).solve().unwrap();

        assert!(dfs.found);
        assert_eq!(dfs.best_cost, Some(7));
        assert_eq!(dfs.expanded, 10);
        assert_eq!(dfs.path_len() as u64, dfs.best_cost.unwrap());
        assert!(dfs.best_cost >= bfs.best_cost);
        assert_valid_path(&problem, &dfs.best_path);
    }

    #[test]
    fn test_dfs_paths_valid_on_three_jugs() {
        for goal in [[0i64, 4, 4], [4, 0, 4], [1, 1, 0]] {
            let problem = jugs(&[3, 5, 8], &goal);
            let dfs = DepthFirstSearch::new(&problem).solve().unwrap();
            let bfs = BreadthFirstSearch::new(&problem).solve().unwrap();
            assert_eq!(dfs.found, bfs.found);
            if dfs.found {
                assert_valid_path(&problem, &dfs.best_path);
                assert!(dfs.best_cost >= bfs.best_cost);
            }
        }
    }

    #[test]
    fn test_backtracking_keeps_cheapest_traversed_path() {
        let problem = jugs(&[4, 3], &[2, 0]);
        let result = BacktrackingSearch::new(&problem).solve().unwrap();

        // Explored-set pruning hides the 6-step path from this strategy.
        assert!(result.found);
        assert_eq!(result.best_cost, Some(9));
        assert_eq!(result.expanded, 14);
        assert_eq!(result.path_len(), 9);
        assert_valid_path(&problem, &result.best_path);
    }

    #[test]
    fn test_iterative_backtracking_matches_recursive() {
        let cases: [(&[i64], &[i64]); 6] = [
            (&[4, 3], &[2, 0]),
            (&[3, 5], &[0, 4]),
            (&[2, 4], &[1, 0]),
            (&[3, 5, 8], &[0, 4, 4]),
            (&[8, 5, 3], &[4, 4, 0]),
            (&[1], &[1]),
        ];
        for (capacities, goal) in cases {
            let problem = jugs(capacities, goal);
            let recursive = BacktrackingSearch::new(&problem).solve().unwrap();
            let iterative = IterativeBacktrackingSearch::new(&problem).solve().unwrap();
            assert_eq!(recursive, iterative, "capacities {:?} goal {:?}", capacities, goal);
        }
    }

    #[test]
    fn test_three_jug_backtracking_explores_everything() {
        let problem = jugs(&[3, 5, 8], &[0, 4, 4]);
        let result = IterativeBacktrackingSearch::new(&problem).solve().unwrap();
        assert!(result.found);
        assert_eq!(result.best_cost, Some(99));
        assert_eq!(result.expanded, 160);
    }

    #[test]
    fn test_unreachable_goal() {
        let problem = jugs(&[2, 4], &[1, 0]);
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&problem, &SearchConfig::default()).unwrap();
            assert!(!result.found, "{} claimed a solution", algorithm);
            assert!(!result.exhausted);
            assert_eq!(result.best_cost, None);
            assert_eq!(result.best_path, vec![state(&[0, 0])]);
            assert_eq!(result.expanded, 6);
        }
    }

    #[test]
    fn test_start_is_goal() {
        let problem = jugs(&[4, 3], &[0, 0]);
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&problem, &SearchConfig::default()).unwrap();
            assert!(result.found);
            assert_eq!(result.best_cost, Some(0));
            assert_eq!(result.best_path, vec![state(&[0, 0])]);
            assert_eq!(result.expanded, 1);
        }
    }

    #[test]
    fn test_solvers_are_deterministic() {
        for algorithm in Algorithm::ALL {
            let first = jugs(&[3, 5, 8], &[0, 4, 4]);
            let second = jugs(&[3, 5, 8], &[0, 4, 4]);
            let a = algorithm.run(&first, &SearchConfig::default()).unwrap();
            let b = algorithm.run(&second, &SearchConfig::default()).unwrap();
            assert_eq!(a, b);
        }

        let problem = jugs(&[4, 3], &[2, 0]);
        let mut solver = BacktrackingSearch::new(&problem);
        let a = solver.solve().unwrap();
        let b = solver.solve().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_recursion_budget_reports_exhaustion() {
        let problem = jugs(&[4, 3], &[2, 0]);
        let config = SearchConfig::new().with_max_depth(2);
        let result = BacktrackingSearch::with_config(&problem, config).solve().unwrap();

        assert!(result.exhausted);
        assert!(!result.found);
        assert_eq!(result.best_cost, None);
        assert_eq!(result.best_path, vec![state(&[0, 0])]);
        assert!(result.expanded > 1);
        assert_eq!(result.max_depth, 2);
    }

    #[test]
    fn test_deep_recursion_stops_at_default_budget() {
        // The explored graph has paths tens of thousands of states long.
        let problem = jugs(&[97, 101, 103], &[0, 0, 200]);
        let result = BacktrackingSearch::new(&problem).solve().unwrap();

        assert!(result.exhausted);
        assert!(!result.found);
        assert_eq!(result.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(result.best_path, vec![state(&[0, 0, 0])]);
    }

    #[test]
    fn test_recursion_independent_of_caller_stack() {
        let handle = thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let problem = jugs(&[97, 101, 103], &[0, 0, 200]);
                BacktrackingSearch::new(&problem).solve().unwrap()
            })
            .unwrap();
        assert!(handle.join().unwrap().exhausted);
    }

    #[test]
    fn test_recursion_stack_size_grows_with_budget() {
        assert!(recursion_stack_size(DEFAULT_MAX_DEPTH) > recursion_stack_size(10));
        assert_eq!(recursion_stack_size(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_branching_counts_on_full_exploration() {
        // Six reachable states offering 18 actions in total, none of them a goal.
        let problem = jugs(&[2, 4], &[1, 0]);
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&problem, &SearchConfig::default()).unwrap();
            assert_eq!(result.branched, 6, "{}", algorithm);
            assert_eq!(result.generated, 18, "{}", algorithm);
            assert!((result.branching_factor() - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_expansion_budget_applies_to_every_strategy() {
        let problem = jugs(&[4, 3], &[2, 0]);
        let config = SearchConfig::new().with_max_expansions(3);
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&problem, &config).unwrap();
            assert!(result.exhausted, "{} ignored the budget", algorithm);
            assert!(!result.found);
            assert_eq!(result.expanded, 4);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = jugs(&[4, 3], &[2, 0]);
        let config = SearchConfig::new().with_max_depth(0);
        let err = BacktrackingSearch::with_config(&problem, config).solve().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    /// Offers an action its own `succ` refuses.
    struct BrokenProblem;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Node(u8);
    impl SearchState for Node {}

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Step;
    impl SearchAction for Step {}

    impl SearchProblem for BrokenProblem {
        type State = Node;
        type Action = Step;

        fn start_state(&self) -> Node {
            Node(0)
        }

        fn actions(&self, _state: &Node) -> Vec<Step> {
            vec![Step]
        }

        fn succ(&self, state: &Node, action: &Step) -> Result<Node> {
            Err(Error::invalid_action(action, state, "always rejected"))
        }

        fn is_end(&self, state: &Node) -> bool {
            state.0 == 1
        }
    }

    #[test]
    fn test_invalid_action_propagates() {
        for algorithm in Algorithm::ALL {
            let err = algorithm
                .run(&BrokenProblem, &SearchConfig::default())
                .unwrap_err();
            assert!(matches!(err, Error::InvalidAction { .. }), "{}", algorithm);
        }
    }

    #[test]
    fn test_algorithm_keys() {
        assert_eq!(Algorithm::BacktrackingIterative.key(), "backtrackingIter");
        assert_eq!(
            serde_json::to_string(&Algorithm::BacktrackingIterative).unwrap(),
            "\"backtrackingIter\""
        );
        let problem = jugs(&[4, 3], &[2, 0]);
        assert_eq!(DepthFirstSearch::new(&problem).name(), "dfs");
        assert_eq!(BreadthFirstSearch::new(&problem).name(), "bfs");
    }
}
