use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::Life;

/// Straightforward set-of-cells stepper to check `Life` against.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct BasicState {
    pub cells: HashSet<(isize, isize)>,
}

impl BasicState {
    pub fn step(&self) -> Self {
        let mut counts = HashMap::new();
        for &p1 in &self.cells {
            for p2 in neighbours(p1) {
                *counts.entry(p2).or_insert(0) += 1;
            }
        }
        let mut cells = HashSet::new();
        for (p, count) in counts {
            let alive = self.cells.contains(&p);
            if let (2 | 3, true) | (3, false) = (count, alive) {
                cells.insert(p);
            }
        }
        Self { cells }
    }
}

fn neighbours((y, x): (isize, isize)) -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dy, dx)| (y + dy, x + dx))
}

impl From<&Life> for BasicState {
    fn from(life: &Life) -> Self {
        Self {
            cells: life.cells().collect(),
        }
    }
}
