//! # flightpath — Exhaustive Route Enumeration and Ranking
//!
//! Finds every simple path between two locations in a small directed,
//! weighted route graph and reports the best three by total time or total
//! cost.
//!
//! ## Design Principles
//!
//! 1. **Trait at the seam**: `GraphStore` is the contract between the search and the graph
//! 2. **Clean DTOs**: `Node`, `Edge`, `Weight`, `PathCandidate` cross all boundaries
//! 3. **Read-only queries**: a search never mutates the graph, so one graph serves any number of queries
//! 4. **Exhaustive on purpose**: every simple path is enumerated, then ranked; graphs are expected to be small
//!
//! ## Quick Start
//!
//! ```rust
//! use flightpath::{build_graph, find_paths, select_top3, RankMode, Ranking};
//!
//! let graph = build_graph([
//!     ("A", "B", 10.0, 2.0),
//!     ("B", "C", 5.0, 1.0),
//!     ("A", "C", 20.0, 5.0),
//! ]);
//!
//! let candidates = find_paths(&graph, "A", "C");
//! assert_eq!(candidates.len(), 2);
//!
//! match select_top3(candidates, RankMode::Time) {
//!     Ranking::Ranked(paths) => println!("best: {}", paths[0]),
//!     Ranking::NoPathsFound => println!("No shortest paths found"),
//! }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod search;
pub mod ranking;
pub mod loader;
pub mod report;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Node, NodeId, Edge, Weight, PathCandidate};

// ============================================================================
// Re-exports: Storage, search, ranking
// ============================================================================

pub use storage::{GraphStore, MemoryGraph, build_graph};
pub use search::{SearchConfig, WeightAttribution, find_paths, find_paths_with};
pub use ranking::{RankMode, Ranking, select_top, select_top3};
pub use loader::LoadOptions;
pub use report::QueryReport;

// ============================================================================
// Query
// ============================================================================

/// "Find paths from `origin` to `destination`, ranked by `mode`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub origin: String,
    pub destination: String,
    pub mode: RankMode,
}

impl Query {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, mode: RankMode) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode,
        }
    }
}

// ============================================================================
// Top-level planner handle
// ============================================================================

/// The primary entry point. A `RoutePlanner` wraps a graph store and a
/// search configuration, and answers queries against them.
pub struct RoutePlanner<S: GraphStore> {
    store: S,
    config: SearchConfig,
}

impl<S: GraphStore> RoutePlanner<S> {
    /// Create a planner over the given store with default settings.
    pub fn with_store(store: S) -> Self {
        Self { store, config: SearchConfig::default() }
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every simple path between the two nodes, unranked.
    pub fn find_paths(&self, origin: &str, destination: &str) -> Vec<PathCandidate> {
        find_paths_with(&self.store, origin, destination, &self.config)
    }

    /// Enumerate then rank one query.
    pub fn plan(&self, query: &Query) -> Ranking {
        let candidates = self.find_paths(&query.origin, &query.destination);
        debug!(
            origin = %query.origin,
            destination = %query.destination,
            mode = %query.mode,
            candidates = candidates.len(),
            "ranking candidates"
        );
        select_top(candidates, query.mode, self.config.top_k)
    }

    /// Answer queries one after another, numbering them from 1.
    pub fn run_batch(&self, queries: &[Query]) -> Vec<QueryReport> {
        queries
            .iter()
            .enumerate()
            .map(|(i, q)| QueryReport::new(i + 1, q.clone(), self.plan(q)))
            .collect()
    }
}

/// Planner over an in-memory graph loaded from flight data.
impl RoutePlanner<MemoryGraph> {
    pub fn open_file(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let graph = loader::load_graph_file(path, options)?;
        Ok(Self::with_store(graph))
    }

    pub fn from_text(text: &str, options: LoadOptions) -> Result<Self> {
        let graph = loader::parse_graph(text, options)?;
        Ok(Self::with_store(graph))
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Unknown endpoints and empty results are not errors: they surface as
/// [`Ranking::NoPathsFound`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("Invalid ranking mode: '{0}' (expected T, C, time or cost)")]
    InvalidRankMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
