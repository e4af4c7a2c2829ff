//! Conway's Game of Life (B3/S23) on an unbounded plane.
//!
//! The board only stores the rows and columns that have held a live cell,
//! split around the origin so negative coordinates grow as cheaply as
//! positive ones.

mod eq;
pub mod error;
pub mod input;
pub mod render;
mod row;
mod rule;

#[cfg(test)]
mod reference;

use std::{
    fmt::Display,
    ops::{Range, RangeInclusive},
};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    row::{Half, Row},
    rule::Rule,
};

/// The whole tracked universe.
///
/// Row and column bounds only ever widen: they cover every cell that has been
/// alive since the board was created, not just the cells alive right now.
#[derive(Clone, Default, Debug)]
pub struct Life {
    neg_rows: Vec<Option<Row>>,
    pos_rows: Vec<Option<Row>>,
    first_column: isize,
    last_column_plus_one: isize,
    rule: Rule,
}

impl Life {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a cell. Never allocates.
    pub fn get(&self, row: isize, col: isize) -> bool {
        let (rows, i) = self.rows(row);
        rows.get(i)
            .and_then(Option::as_ref)
            .is_some_and(|r| r.get(col))
    }

    /// Writes a cell. Killing a cell in a row that was never stored is a
    /// no-op, so dead cells never force storage to grow.
    pub fn set(&mut self, row: isize, col: isize, value: bool) {
        let (rows, i) = self.rows_mut(row);
        if i >= rows.len() {
            if !value {
                return;
            }
            trace!("growing to row {row}");
            rows.resize_with(i + 1, || None);
        }
        rows[i].get_or_insert_with(Row::default).set(col, value);
        if value && !(self.first_column..self.last_column_plus_one).contains(&col) {
            trace!("growing to column {col}");
            self.first_column = self.first_column.min(col);
            self.last_column_plus_one = self.last_column_plus_one.max(col + 1);
        }
    }

    /// Kills every cell. Stored rows and the bounds are kept for reuse.
    pub fn clear(&mut self) {
        for row in self.neg_rows.iter_mut().chain(&mut self.pos_rows).flatten() {
            row.clear();
        }
    }

    pub fn first_row(&self) -> isize {
        -(self.neg_rows.len() as isize)
    }

    pub fn last_row_plus_one(&self) -> isize {
        self.pos_rows.len() as isize
    }

    pub fn first_col(&self) -> isize {
        self.first_column
    }

    pub fn last_col_plus_one(&self) -> isize {
        self.last_column_plus_one
    }

    /// The state of one cell in the next generation.
    pub fn next_cell(&self, row: isize, col: isize) -> bool {
        let neighbours = (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .filter(|&(dy, dx)| self.get(row + dy, col + dx))
            .count();
        self.rule.apply(self.get(row, col), neighbours as u32)
    }

    /// Advances the whole board one generation in place.
    ///
    /// Rows are computed top to bottom into one of two scratch rows, and each
    /// computed row is written back one iteration later, once the row below it
    /// has been computed. Writes trail reads by exactly one row, so every
    /// neighbour read still sees the previous generation.
    pub fn next(&mut self) {
        // Births can happen at most one cell outside the bounds.
        let rows = self.first_row() - 1..=self.last_row_plus_one();
        let cols = self.first_col() - 1..=self.last_col_plus_one();
        debug!("{} over rows {rows:?}, columns {cols:?}", self.rule);
        let (mut current, mut previous) = (Row::default(), Row::default());
        for i in rows.clone() {
            self.next_row(i, cols.clone(), &mut current);
            self.commit_row(i - 1, cols.clone(), &previous);
            std::mem::swap(&mut current, &mut previous);
        }
        self.commit_row(*rows.end(), cols, &previous);
    }

    /// Live cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        (self.first_row()..self.last_row_plus_one())
            .cartesian_product(self.first_col()..self.last_col_plus_one())
            .filter(|&(i, j)| self.get(i, j))
    }

    pub fn population(&self) -> usize {
        self.cells().count()
    }
}

impl Life {
    fn rows(&self, row: isize) -> (&Vec<Option<Row>>, usize) {
        match Half::of(row) {
            Half::Neg(i) => (&self.neg_rows, i),
            Half::Pos(i) => (&self.pos_rows, i),
        }
    }

    fn rows_mut(&mut self, row: isize) -> (&mut Vec<Option<Row>>, usize) {
        match Half::of(row) {
            Half::Neg(i) => (&mut self.neg_rows, i),
            Half::Pos(i) => (&mut self.pos_rows, i),
        }
    }

    fn next_row(&self, i: isize, cols: RangeInclusive<isize>, into: &mut Row) {
        for j in cols {
            into.set(j, self.next_cell(i, j));
        }
    }

    fn commit_row(&mut self, i: isize, cols: RangeInclusive<isize>, from: &Row) {
        for j in cols {
            self.set(i, j, from.get(j));
        }
    }
}

enum Span {
    Empty,
    Covers { ys: Range<isize>, xs: Range<isize> },
}

impl Life {
    /// The tight box around the cells alive right now.
    fn span(&self) -> Span {
        use Span::*;
        let xs = match self.cells().map(|(_, x)| x).minmax() {
            itertools::MinMaxResult::NoElements => return Empty,
            itertools::MinMaxResult::OneElement(x) => x..x + 1,
            itertools::MinMaxResult::MinMax(x1, x2) => x1..x2 + 1,
        };
        let ys = match self.cells().map(|(y, _)| y).minmax() {
            itertools::MinMaxResult::NoElements => return Empty,
            itertools::MinMaxResult::OneElement(y) => y..y + 1,
            itertools::MinMaxResult::MinMax(y1, y2) => y1..y2 + 1,
        };
        Covers { ys, xs }
    }
}

impl FromIterator<(isize, isize)> for Life {
    fn from_iter<T: IntoIterator<Item = (isize, isize)>>(iter: T) -> Self {
        let mut life = Life::new();
        for (row, col) in iter {
            life.set(row, col, true);
        }
        life
    }
}

impl Display for Life {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span::Covers { ys, xs } = self.span() else {
            return Ok(());
        };
        let lines = ys.map(|y| {
            xs.clone()
                .map(|x| if self.get(y, x) { 'o' } else { '.' })
                .collect::<String>()
        });
        write!(f, "{}", lines.format("\n"))
    }
}
