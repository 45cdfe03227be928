//! Console and JSON rendering of query results.
//!
//! ```text
//! Flight 1: Dallas, Houston (Time)
//! Path 1: Dallas -> Houston. Time: 51.0 Cost: 101.0
//! Path 2: Dallas -> Austin -> Houston. Time: 86.0 Cost: 193.0
//!
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::ranking::Ranking;
use crate::{Query, Result};

/// One answered query, numbered from 1 in batch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    pub flight: usize,
    pub query: Query,
    pub ranking: Ranking,
}

impl QueryReport {
    pub fn new(flight: usize, query: Query, ranking: Ranking) -> Self {
        Self { flight, query, ranking }
    }
}

/// Write one report block, followed by a blank line.
pub fn write_report(writer: &mut dyn Write, report: &QueryReport) -> Result<()> {
    let q = &report.query;
    writeln!(writer, "Flight {}: {}, {} ({})", report.flight, q.origin, q.destination, q.mode)?;

    match &report.ranking {
        Ranking::NoPathsFound => writeln!(writer, "No shortest paths found")?,
        Ranking::Ranked(paths) => {
            for (i, path) in paths.iter().enumerate() {
                writeln!(
                    writer,
                    "Path {}: {}. Time: {} Cost: {}",
                    i + 1,
                    path,
                    format_number(path.total_time()),
                    format_number(path.total_cost()),
                )?;
            }
        }
    }
    writeln!(writer)?;
    Ok(())
}

/// Write every report in order.
pub fn write_reports(writer: &mut dyn Write, reports: &[QueryReport]) -> Result<()> {
    for report in reports {
        write_report(writer, report)?;
    }
    Ok(())
}

/// Write all reports as one pretty-printed JSON array.
pub fn write_json(writer: &mut dyn Write, reports: &[QueryReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, reports)?;
    writeln!(writer)?;
    Ok(())
}

/// Whole numbers keep one decimal place (`51.0`), others print as-is.
fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}
