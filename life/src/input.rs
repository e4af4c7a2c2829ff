use std::{convert::Infallible, str::FromStr};

use log::debug;

use crate::{Life, error::FormatError};

/// The two strings recognised as cells when reading a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    pub alive: String,
    pub dead: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            alive: "o".into(),
            dead: ".".into(),
        }
    }
}

impl FromStr for Markers {
    type Err = FormatError;

    /// Parses `,ALIVE,DEAD`, where the first character is the separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = fields(s, ",ALIVE,DEAD", &[2])?;
        Ok(Self {
            alive: fields[0].into(),
            dead: fields[1].into(),
        })
    }
}

/// Splits a format description on its leading separator character and checks
/// the ALIVE and DEAD fields. `counts` lists the accepted numbers of fields.
pub(crate) fn fields<'s>(
    s: &'s str,
    layout: &'static str,
    counts: &[usize],
) -> Result<Vec<&'s str>, FormatError> {
    let layout_error = || FormatError::Layout {
        value: s.into(),
        layout,
    };
    let mut chars = s.chars();
    let sep = chars.next().ok_or_else(layout_error)?;
    let fields: Vec<&str> = chars.as_str().split(sep).collect();
    if !counts.contains(&fields.len()) {
        return Err(layout_error());
    }
    let (alive, dead) = (fields[0], fields[1]);
    if alive.is_empty() || alive.chars().count() != dead.chars().count() || alive == dead {
        return Err(FormatError::Markers(s.into()));
    }
    Ok(fields)
}

/// Cursor over the lines of a board description.
///
/// Text that is neither marker is skipped without moving the column. The first
/// alive cell becomes (0, 0) and fixes the starting column of every later line.
struct Reader<'a> {
    life: &'a mut Life,
    markers: &'a Markers,
    row: isize,
    first_col: isize,
    anchored: bool,
}

impl Reader<'_> {
    fn read_line(&mut self, line: &str) {
        let Markers { alive, dead } = &*self.markers;
        let (mut i, mut j) = (self.row, self.first_col);
        let mut rest = line;
        loop {
            let (at, len, value) = match (rest.find(alive.as_str()), rest.find(dead.as_str())) {
                (None, None) => break,
                (Some(a), Some(d)) if d < a => (d, dead.len(), false),
                (Some(a), _) => (a, alive.len(), true),
                (None, Some(d)) => (d, dead.len(), false),
            };
            if value {
                if !self.anchored {
                    self.anchored = true;
                    self.first_col = -j;
                    (i, j) = (0, 0);
                }
                self.life.set(i, j, true);
            }
            j += 1;
            rest = &rest[at + len..];
        }
        self.row = i + 1;
    }
}

impl Life {
    /// Replaces the board with the cells described by `lines`.
    pub fn read_lines<I, S>(&mut self, lines: I, markers: &Markers)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        let mut reader = Reader {
            life: &mut *self,
            markers,
            row: 0,
            first_col: 0,
            anchored: false,
        };
        let mut count = 0;
        for line in lines {
            reader.read_line(line.as_ref());
            count += 1;
        }
        debug!("read {count} lines, {} live cells", self.population());
    }
}

impl FromStr for Life {
    type Err = Infallible;

    /// Reads a board drawn with `o` for alive and `.` for dead cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut life = Life::new();
        life.read_lines(s.lines(), &Markers::default());
        Ok(life)
    }
}
