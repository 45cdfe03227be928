//! # Ranking
//!
//! Orders enumerated candidates by total time or total cost (both ascending)
//! and keeps the best few.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::PathCandidate;
use crate::Error;

/// Default number of paths reported per query.
pub const TOP_K: usize = 3;

/// Ranking criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Ascending total time.
    Time,
    /// Ascending total cost.
    Cost,
}

impl RankMode {
    /// Compare two candidates under this mode.
    pub fn compare(self, a: &PathCandidate, b: &PathCandidate) -> Ordering {
        match self {
            RankMode::Time => a.total_time().total_cmp(&b.total_time()),
            RankMode::Cost => a.total_cost().total_cmp(&b.total_cost()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankMode::Time => "Time",
            RankMode::Cost => "Cost",
        }
    }
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts `T`/`time` and `C`/`cost`, case-insensitive.
impl FromStr for RankMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "time" => Ok(RankMode::Time),
            "c" | "cost" => Ok(RankMode::Cost),
            _ => Err(Error::InvalidRankMode(s.to_string())),
        }
    }
}

/// Ranked paths, best first. Inline capacity covers the default top 3.
pub type RankedPaths = SmallVec<[PathCandidate; TOP_K]>;

/// Outcome of ranking one query's candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "paths", rename_all = "snake_case")]
pub enum Ranking {
    /// At least one path, best first.
    Ranked(RankedPaths),
    /// The candidate set was empty.
    NoPathsFound,
}

impl Ranking {
    pub fn paths(&self) -> &[PathCandidate] {
        match self {
            Ranking::Ranked(paths) => paths.as_slice(),
            Ranking::NoPathsFound => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Ranking::NoPathsFound)
    }

    pub fn len(&self) -> usize {
        self.paths().len()
    }

    pub fn best(&self) -> Option<&PathCandidate> {
        self.paths().first()
    }
}

/// Keep the `k` best candidates under `mode`.
///
/// The sort is stable: candidates with equal totals keep their enumeration
/// order. Identical routes or totals are not deduplicated. An empty input,
/// or `k == 0`, yields [`Ranking::NoPathsFound`].
pub fn select_top(mut candidates: Vec<PathCandidate>, mode: RankMode, k: usize) -> Ranking {
    if candidates.is_empty() || k == 0 {
        return Ranking::NoPathsFound;
    }
    candidates.sort_by(|a, b| mode.compare(a, b));
    candidates.truncate(k);
    Ranking::Ranked(candidates.into_iter().collect())
}

/// Keep the three best candidates under `mode`.
pub fn select_top3(candidates: Vec<PathCandidate>, mode: RankMode) -> Ranking {
    select_top(candidates, mode, TOP_K)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weight;

    fn path(route: &str, cost: f64, time: f64) -> PathCandidate {
        PathCandidate::new(
            route.split(' ').map(str::to_string).collect(),
            Weight::new(cost, time),
        )
    }

    fn names(r: &Ranking) -> Vec<String> {
        r.paths().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_by_time_ascending() {
        let r = select_top3(
            vec![path("A C", 20.0, 5.0), path("A B C", 15.0, 3.0), path("A D C", 1.0, 9.0)],
            RankMode::Time,
        );
        assert_eq!(names(&r), vec!["A -> B -> C", "A -> C", "A -> D -> C"]);
    }

    #[test]
    fn test_by_cost_ascending() {
        let r = select_top3(
            vec![path("A C", 20.0, 5.0), path("A B C", 15.0, 3.0), path("A D C", 1.0, 9.0)],
            RankMode::Cost,
        );
        assert_eq!(names(&r), vec!["A -> D -> C", "A -> B -> C", "A -> C"]);
    }

    #[test]
    fn test_truncates_to_three() {
        let candidates = (0..6).map(|i| path("A B", i as f64, 6.0 - i as f64)).collect();
        let r = select_top3(candidates, RankMode::Time);
        assert_eq!(r.len(), 3);
        let times: Vec<f64> = r.paths().iter().map(PathCandidate::total_time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fewer_than_three() {
        let r = select_top3(vec![path("A B", 1.0, 1.0)], RankMode::Cost);
        assert_eq!(r.len(), 1);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_empty_is_no_paths_found() {
        assert_eq!(select_top3(Vec::new(), RankMode::Time), Ranking::NoPathsFound);
        assert_eq!(select_top(vec![path("A B", 1.0, 1.0)], RankMode::Time, 0), Ranking::NoPathsFound);
        assert!(Ranking::NoPathsFound.best().is_none());
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        let r = select_top3(
            vec![path("A X", 1.0, 2.0), path("A Y", 9.0, 2.0), path("A Z", 5.0, 1.0)],
            RankMode::Time,
        );
        assert_eq!(names(&r), vec!["A -> Z", "A -> X", "A -> Y"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let r = select_top3(vec![path("A B", 1.0, 1.0), path("A B", 1.0, 1.0)], RankMode::Cost);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("T".parse::<RankMode>().unwrap(), RankMode::Time);
        assert_eq!("cost".parse::<RankMode>().unwrap(), RankMode::Cost);
        assert_eq!(" c ".parse::<RankMode>().unwrap(), RankMode::Cost);
        assert!(matches!("X".parse::<RankMode>(), Err(Error::InvalidRankMode(m)) if m == "X"));
    }
}
