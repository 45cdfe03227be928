//! End-to-end tests over the bundled flight data in `data/`.
//!
//! Each test exercises: load -> enumerate -> rank -> render.

use std::path::PathBuf;

use flightpath::loader::{self, LoadOptions};
use flightpath::report;
use flightpath::{GraphStore, RankMode, Ranking, RoutePlanner, SearchConfig, WeightAttribution};
use pretty_assertions::assert_eq;

fn data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn planner() -> RoutePlanner<flightpath::MemoryGraph> {
    RoutePlanner::open_file(data("flights.txt"), LoadOptions::default()).unwrap()
}

fn render(planner: &RoutePlanner<flightpath::MemoryGraph>) -> String {
    let queries = loader::load_requests_file(data("requests.txt")).unwrap();
    let reports = planner.run_batch(&queries);
    let mut out = Vec::new();
    report::write_reports(&mut out, &reports).unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================================
// 1. Loaded graph shape
// ============================================================================

#[test]
fn test_loaded_graph_is_bidirectional() {
    let planner = planner();
    let g = planner.store();

    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 8);
    assert_eq!(
        g.neighbors("Austin"),
        vec![("Dallas", 98.0, 47.0), ("Houston", 95.0, 39.0), ("Chicago", 144.0, 192.0)]
    );
    assert_eq!(g.neighbors("Chicago"), vec![("Austin", 144.0, 192.0)]);
}

// ============================================================================
// 2. Full report, node-attributed weights (default)
// ============================================================================

#[test]
fn test_report_node_weights() {
    let expected = "\
Flight 1: Dallas, Houston (Time)
Path 1: Dallas -> Houston. Time: 86.0 Cost: 193.0
Path 2: Dallas -> Austin -> Houston. Time: 133.0 Cost: 291.0

Flight 2: Chicago, Dallas (Cost)
Path 1: Chicago -> Austin -> Dallas. Time: 286.0 Cost: 340.0
Path 2: Chicago -> Austin -> Houston -> Dallas. Time: 325.0 Cost: 435.0

Flight 3: Dallas, Miami (Time)
No shortest paths found

";
    assert_eq!(render(&planner()), expected);
}

// ============================================================================
// 3. Full report, edge-attributed weights
// ============================================================================

#[test]
fn test_report_edge_weights() {
    let planner = planner()
        .with_config(SearchConfig::default().with_attribution(WeightAttribution::Edge));
    let expected = "\
Flight 1: Dallas, Houston (Time)
Path 1: Dallas -> Houston. Time: 51.0 Cost: 101.0
Path 2: Dallas -> Austin -> Houston. Time: 86.0 Cost: 193.0

Flight 2: Chicago, Dallas (Cost)
Path 1: Chicago -> Austin -> Dallas. Time: 239.0 Cost: 242.0
Path 2: Chicago -> Austin -> Houston -> Dallas. Time: 282.0 Cost: 340.0

Flight 3: Dallas, Miami (Time)
No shortest paths found

";
    assert_eq!(render(&planner), expected);
}

// ============================================================================
// 4. One-way loading
// ============================================================================

#[test]
fn test_one_way_load_has_no_return_routes() {
    let planner = RoutePlanner::open_file(data("flights.txt"), LoadOptions { bidirectional: false })
        .unwrap();

    let forward = planner.plan(&flightpath::Query::new("Dallas", "Chicago", RankMode::Time));
    assert_eq!(forward.len(), 1);

    let back = planner.plan(&flightpath::Query::new("Chicago", "Dallas", RankMode::Cost));
    assert_eq!(back, Ranking::NoPathsFound);
}

// ============================================================================
// 5. JSON rendering round-trips through serde
// ============================================================================

#[test]
fn test_json_reports_deserialize() {
    let planner = planner();
    let queries = loader::load_requests_file(data("requests.txt")).unwrap();
    let reports = planner.run_batch(&queries);

    let mut out = Vec::new();
    report::write_json(&mut out, &reports).unwrap();
    let back: Vec<flightpath::QueryReport> = serde_json::from_slice(&out).unwrap();

    assert_eq!(back, reports);
}
