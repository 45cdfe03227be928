//! # Text Loaders
//!
//! Parses the pipe-delimited flight-data and flight-request files.
//!
//! Both formats start with a record count followed by that many records:
//!
//! ```text
//! 3                         2
//! Dallas|Austin|98|47       Dallas|Houston|T
//! Austin|Houston|95|39      Chicago|Dallas|C
//! Dallas|Houston|101|51
//! ```
//!
//! Blank lines are skipped; lines after the declared count are ignored.
//! Any malformed record fails the whole load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ranking::RankMode;
use crate::storage::MemoryGraph;
use crate::{Error, Query, Result};

/// Options for materializing a graph from flight data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Insert every route in both directions with equal weights.
    pub bidirectional: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { bidirectional: true }
    }
}

/// One parsed flight-data record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,
    pub cost: f64,
    pub time: f64,
}

// ============================================================================
// Flight data
// ============================================================================

/// Parse flight-data text into edge records, in file order.
pub fn parse_edges(text: &str) -> Result<Vec<EdgeRecord>> {
    records(text)?
        .into_iter()
        .map(|(line, raw)| -> Result<EdgeRecord> {
            let [source, destination, cost, time] = fields::<4>(line, raw)?;
            Ok(EdgeRecord {
                source: name(line, source, "source")?,
                destination: name(line, destination, "destination")?,
                cost: weight(line, cost, "cost")?,
                time: weight(line, time, "time")?,
            })
        })
        .collect()
}

/// Parse flight-data text straight into a graph.
pub fn parse_graph(text: &str, options: LoadOptions) -> Result<MemoryGraph> {
    let edges = parse_edges(text)?;
    let mut graph = MemoryGraph::new();
    for e in &edges {
        graph.add_edge(&e.source, &e.destination, e.cost, e.time);
        if options.bidirectional {
            graph.add_edge(&e.destination, &e.source, e.cost, e.time);
        }
    }
    debug!(
        records = edges.len(),
        nodes = graph.nodes().count(),
        edges = graph.edge_count(),
        bidirectional = options.bidirectional,
        "graph loaded"
    );
    Ok(graph)
}

pub fn load_graph_file(path: impl AsRef<Path>, options: LoadOptions) -> Result<MemoryGraph> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_graph(&text, options)
}

// ============================================================================
// Requests
// ============================================================================

/// Parse request text into queries, in file order.
pub fn parse_requests(text: &str) -> Result<Vec<Query>> {
    records(text)?
        .into_iter()
        .map(|(line, raw)| -> Result<Query> {
            let [origin, destination, mode] = fields::<3>(line, raw)?;
            let mode = mode.parse::<RankMode>().map_err(|_| Error::MalformedInput {
                line,
                message: format!("ranking mode must be T or C, got '{mode}'"),
            })?;
            Ok(Query::new(
                name(line, origin, "origin")?,
                name(line, destination, "destination")?,
                mode,
            ))
        })
        .collect()
}

pub fn load_requests_file(path: impl AsRef<Path>) -> Result<Vec<Query>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_requests(&text)
}

// ============================================================================
// Shared record scanning
// ============================================================================

/// Read the count header and return the declared records with their 1-based
/// line numbers.
fn records(text: &str) -> Result<Vec<(usize, &str)>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(Error::MalformedInput { line: 1, message: "missing record count".into() });
    };
    let count: usize = header.parse().map_err(|_| Error::MalformedInput {
        line: header_line,
        message: format!("record count must be a non-negative integer, got '{header}'"),
    })?;

    let found: Vec<(usize, &str)> = lines.by_ref().take(count).collect();
    if found.len() < count {
        return Err(Error::MalformedInput {
            line: text.lines().count() + 1,
            message: format!("expected {count} records, found {}", found.len()),
        });
    }

    let ignored = lines.count();
    if ignored > 0 {
        debug!(ignored, "lines after declared record count ignored");
    }
    Ok(found)
}

fn fields<const N: usize>(line: usize, raw: &str) -> Result<[&str; N]> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
    <[&str; N]>::try_from(parts).map_err(|parts| Error::MalformedInput {
        line,
        message: format!("expected {N} '|'-separated fields, found {}", parts.len()),
    })
}

fn name(line: usize, raw: &str, what: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(Error::MalformedInput { line, message: format!("empty {what} name") });
    }
    Ok(raw.to_string())
}

fn weight(line: usize, raw: &str, what: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err(Error::MalformedInput {
            line,
            message: format!("{what} must be a finite non-negative number, got '{raw}'"),
        }),
        Err(_) => Err(Error::MalformedInput {
            line,
            message: format!("{what} is not a number: '{raw}'"),
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
