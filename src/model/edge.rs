//! Directed weighted edge and the (cost, time) weight pair.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use super::NodeId;

/// The two independent weights carried by every route: cost and travel time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub cost: f64,
    pub time: f64,
}

impl Weight {
    pub const ZERO: Weight = Weight { cost: 0.0, time: 0.0 };

    pub fn new(cost: f64, time: f64) -> Self {
        Self { cost, time }
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight {
            cost: self.cost + rhs.cost,
            time: self.time + rhs.time,
        }
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        self.cost += rhs.cost;
        self.time += rhs.time;
    }
}

/// A directed edge stored in its source node's adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Destination node.
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: NodeId, weight: Weight) -> Self {
        Self { to, weight }
    }

    pub fn cost(&self) -> f64 {
        self.weight.cost
    }

    pub fn time(&self) -> f64 {
        self.weight.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_addition() {
        let mut w = Weight::new(10.0, 2.0) + Weight::new(5.0, 1.5);
        assert_eq!(w, Weight::new(15.0, 3.5));

        w += Weight::new(1.0, 0.5);
        assert_eq!(w, Weight::new(16.0, 4.0));
    }

    #[test]
    fn test_zero_is_default() {
        assert_eq!(Weight::default(), Weight::ZERO);
    }
}
