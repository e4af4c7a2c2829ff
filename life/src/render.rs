use std::{ops::Range, str::FromStr};

use itertools::Itertools;

use crate::{Life, error::FormatError, input::fields};

/// How one board line is drawn: `start + cell + (sep + cell)* + end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    pub alive: String,
    pub dead: String,
    pub sep: String,
    pub start: String,
    pub end: String,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            alive: "o".into(),
            dead: ".".into(),
            sep: " ".into(),
            start: " ".into(),
            end: "".into(),
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    /// Parses `,ALIVE,DEAD[,SEP,START,END]`. Missing fields are empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = fields(s, ",ALIVE,DEAD[,SEP,START,END]", &[2, 5])?;
        let field = |i: usize| fields.get(i).copied().unwrap_or_default().to_string();
        Ok(Self {
            alive: field(0),
            dead: field(1),
            sep: field(2),
            start: field(3),
            end: field(4),
        })
    }
}

/// The rectangle of the plane that gets printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub min_row: isize,
    pub min_col: isize,
    pub rows: usize,
    pub cols: usize,
}

impl Window {
    /// A window of the given size with (0, 0) in the middle, rounding towards
    /// the upper-left when a side is even.
    pub fn centred(rows: usize, cols: usize) -> Self {
        Self {
            min_row: -((rows as isize - 1) / 2),
            min_col: -((cols as isize - 1) / 2),
            rows,
            cols,
        }
    }

    fn row_range(&self) -> Range<isize> {
        self.min_row..self.min_row.saturating_add(self.rows as isize)
    }

    fn col_range(&self) -> Range<isize> {
        self.min_col..self.min_col.saturating_add(self.cols as isize)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::centred(23, 39)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: Format,
    pub window: Window,
    pub start_line: Option<String>,
    pub end_line: Option<String>,
}

impl Life {
    /// Draws the window, one newline-terminated line per board row, wrapped
    /// in the optional start and end lines.
    pub fn render(&self, settings: &Settings) -> String {
        let Settings {
            format,
            window,
            start_line,
            end_line,
        } = settings;
        let mut out = String::new();
        if let Some(line) = start_line {
            out.push_str(line);
            out.push('\n');
        }
        for i in window.row_range() {
            let cells = window
                .col_range()
                .map(|j| if self.get(i, j) { &format.alive } else { &format.dead })
                .join(&format.sep);
            out.push_str(&format.start);
            out.push_str(&cells);
            out.push_str(&format.end);
            out.push('\n');
        }
        if let Some(line) = end_line {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centred() {
        let w = Window::centred(23, 39);
        assert_eq!((w.min_row, w.min_col), (-11, -19));
        let w = Window::centred(4, 1);
        assert_eq!((w.min_row, w.min_col), (-1, 0));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(
            ",@,_,|,[,]".parse::<Format>(),
            Ok(Format {
                alive: "@".into(),
                dead: "_".into(),
                sep: "|".into(),
                start: "[".into(),
                end: "]".into(),
            })
        );
        let short: Format = ",[],  ".parse().unwrap();
        assert_eq!([short.sep, short.start, short.end], ["", "", ""]);
        assert!(matches!(
            ",o,.,x".parse::<Format>(),
            Err(FormatError::Layout { .. })
        ));
        assert!(matches!(
            ",o,oo, , ,".parse::<Format>(),
            Err(FormatError::Markers(_))
        ));
    }

    #[test]
    fn test_render_default() {
        let life: Life = "o".parse().unwrap();
        let settings = Settings {
            window: Window::centred(3, 3),
            ..Default::default()
        };
        assert_eq!(life.render(&settings), " . . .\n . o .\n . . .\n");
    }

    #[test]
    fn test_render_lines_and_format() {
        let life: Life = "oo".parse().unwrap();
        let settings = Settings {
            format: ",#,_,,|,|".parse().unwrap(),
            window: Window {
                min_row: 0,
                min_col: -1,
                rows: 1,
                cols: 4,
            },
            start_line: Some("begin".into()),
            end_line: Some("".into()),
        };
        assert_eq!(life.render(&settings), "begin\n|_##_|\n\n");
    }

    #[test]
    fn test_render_at_the_edge() {
        let life: Life = "o".parse().unwrap();
        let window = Window {
            min_row: isize::MAX,
            min_col: isize::MAX,
            rows: 2,
            cols: 2,
        };
        let settings = Settings {
            window,
            ..Default::default()
        };
        assert_eq!(life.render(&settings), "");
        let settings = Settings {
            window: Window {
                min_row: isize::MAX - 1,
                min_col: 0,
                ..window
            },
            ..Default::default()
        };
        assert_eq!(life.render(&settings), " . .\n");
    }

    #[test]
    fn test_render_doesnt_grow() {
        let life: Life = "o".parse().unwrap();
        let before = (life.first_row(), life.last_row_plus_one());
        life.render(&Settings::default());
        assert_eq!((life.first_row(), life.last_row_plus_one()), before);
    }
}
