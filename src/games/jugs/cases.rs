//! Test-case files and result reports for the n-jugs batch runner.
//!
//! Test cases are a JSON array of `{"name", "capacities", "goal"}` records.
//! Reports carry one record per algorithm, keyed by [`Algorithm::key`].

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{JugState, NJugsProblem};
use crate::error::{Error, Result};
use crate::search::{Algorithm, SearchConfig, SearchProblem, SearchResult};

/// One puzzle instance from a test-case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Case name; `case_<n>` when the file leaves it out.
    pub name: String,
    /// Jug capacities, validated when the problem is built.
    pub capacities: Vec<i64>,
    /// Goal amounts, validated when the problem is built.
    pub goal: Vec<i64>,
}

#[derive(Deserialize)]
struct RawCase {
    #[serde(default)]
    name: Option<String>,
    capacities: Vec<i64>,
    goal: Vec<i64>,
}

impl TestCase {
    /// Build the puzzle this case describes.
    pub fn problem(&self) -> Result<NJugsProblem> {
        NJugsProblem::new(&self.capacities, &self.goal)
    }
}

/// Parse a JSON array of test cases.
pub fn parse_cases(json: &str) -> Result<Vec<TestCase>> {
    let raw: Vec<RawCase> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(idx, case)| TestCase {
            name: case.name.unwrap_or_else(|| format!("case_{}", idx + 1)),
            capacities: case.capacities,
            goal: case.goal,
        })
        .collect())
}

/// Read and parse a test-case file.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        operation: format!("read test cases from {}", path.display()),
        source,
    })?;
    parse_cases(&content)
}

/// One algorithm's result with its wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    /// The solver's result record.
    #[serde(flatten)]
    pub result: SearchResult<JugState>,
    /// Time spent in `solve`.
    pub elapsed_seconds: f64,
}

/// Results of every algorithm on one test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Case name.
    pub name: String,
    /// Capacities as given in the test case.
    pub capacities: Vec<i64>,
    /// Start state (all jugs empty).
    pub start: JugState,
    /// Goal as given in the test case.
    pub goal: Vec<i64>,
    /// Why the case could not be run, if it could not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-algorithm results.
    #[serde(flatten)]
    pub results: BTreeMap<Algorithm, AlgorithmReport>,
}

impl CaseReport {
    /// Report for a case whose problem could not be built.
    pub fn failed(case: &TestCase, error: &Error) -> Self {
        Self {
            name: case.name.clone(),
            capacities: case.capacities.clone(),
            start: JugState::empty(case.capacities.len()),
            goal: case.goal.clone(),
            error: Some(error.to_string()),
            results: BTreeMap::new(),
        }
    }

    /// Result of one algorithm, if it ran.
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmReport> {
        self.results.get(&algorithm)
    }

    /// Print the case header and one status line per algorithm.
    pub fn print(&self, show_paths: bool) {
        println!("{}", "=".repeat(70));
        println!("Case: {}", self.name);
        println!(" Capacities: {:?}", self.capacities);
        println!(" Start:      {}", self.start);
        println!(" Goal:       {:?}", self.goal);

        if let Some(error) = &self.error {
            println!("  ERROR: {}", error);
            return;
        }

        for (algorithm, report) in &self.results {
            let r = &report.result;
            let cost = r
                .best_cost
                .map(|c| c.to_string())
                .unwrap_or_else(|| "inf".to_string());
            println!(
                "  [{}] {} | cost={} | expanded={} | depth={} | branching={:.2} | time={:.6}s",
                algorithm.key().to_uppercase(),
                r.status(),
                cost,
                r.expanded,
                r.max_depth,
                r.branching_factor(),
                report.elapsed_seconds
            );

            if show_paths && r.found {
                println!("   Path length: {}", r.path_len());
                println!("   Path states:");
                for s in &r.best_path {
                    println!("     {}", s);
                }
            }
        }
    }
}

/// Run every algorithm in `algorithms` on one test case.
///
/// # Errors
/// Returns [`Error::Configuration`] if the case is malformed, and propagates
/// solver errors.
pub fn run_case(
    case: &TestCase,
    algorithms: &[Algorithm],
    config: &SearchConfig,
) -> Result<CaseReport> {
    let problem = case.problem()?;

    let mut results = BTreeMap::new();
    for &algorithm in algorithms {
        let start_time = Instant::now();
        let result = algorithm.run(&problem, config)?;
        results.insert(
            algorithm,
            AlgorithmReport {
                result,
                elapsed_seconds: start_time.elapsed().as_secs_f64(),
            },
        );
    }

    Ok(CaseReport {
        name: case.name.clone(),
        capacities: case.capacities.clone(),
        start: problem.start_state(),
        goal: case.goal.clone(),
        error: None,
        results,
    })
}

/// Write reports as pretty-printed JSON.
pub fn save_results<P: AsRef<Path>>(path: P, reports: &[CaseReport]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(reports)?;
    let mut file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    file.write_all(json.as_bytes()).map_err(|source| Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &str = r#"[
        {"name": "classic", "capacities": [4, 3], "goal": [2, 0]},
        {"capacities": [3, 5], "start": [0, 0], "goal": [0, 4]},
        {"name": "zero jug", "capacities": [4, 3, 0], "goal": [2, 0, 0]}
    ]"#;

    #[test]
    fn test_parse_cases_defaults_names() {
        let cases = parse_cases(CASES).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].name, "classic");
        assert_eq!(cases[1].name, "case_2");
        assert_eq!(cases[1].goal, vec![0, 4]);
    }

    #[test]
    fn test_parse_cases_rejects_bad_json() {
        let err = parse_cases(r#"[{"name": "x", "goal": [1]}]"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_malformed_case_surfaces_configuration_error() {
        let cases = parse_cases(CASES).unwrap();
        let err = run_case(&cases[2], &Algorithm::ALL, &SearchConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));

        let report = CaseReport::failed(&cases[2], &err);
        assert!(report.error.is_some());
        assert!(report.results.is_empty());
        assert_eq!(report.start, JugState::empty(3));
    }

    #[test]
    fn test_run_case_reports_every_algorithm() {
        let cases = parse_cases(CASES).unwrap();
        let report = run_case(&cases[0], &Algorithm::ALL, &SearchConfig::default()).unwrap();

        assert_eq!(report.start, JugState::new(vec![0, 0]));
        assert_eq!(report.results.len(), 4);
        let bfs = report.get(Algorithm::Bfs).unwrap();
        assert!(bfs.result.found);
        assert_eq!(bfs.result.best_cost, Some(6));
        assert!(report.get(Algorithm::Dfs).unwrap().result.found);
    }

    #[test]
    fn test_report_json_layout() {
        let cases = parse_cases(CASES).unwrap();
        let report = run_case(&cases[1], &[Algorithm::Bfs], &SearchConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["name"], "case_2");
        assert_eq!(json["start"], serde_json::json!([0, 0]));
        assert!(json.get("error").is_none());
        assert_eq!(json["bfs"]["found"], true);
        assert_eq!(json["bfs"]["best_cost"], 7);
        assert_eq!(json["bfs"]["best_path"][0], serde_json::json!([0, 0]));
        assert!(json["bfs"]["elapsed_seconds"].is_number());
        assert!(json["bfs"]["branched"].as_u64().unwrap() > 0);
        assert!(json["bfs"]["generated"].as_u64().unwrap() >= json["bfs"]["branched"].as_u64().unwrap());
        assert!(json.get("dfs").is_none());
    }
}
