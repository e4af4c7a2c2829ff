use std::ffi::OsString;

use clap::Parser;
use life::{
    input::Markers,
    render::{Format, Settings, Window},
};
use thiserror::Error;

const EXAMPLES: &str = "\
The position (0, 0) is assigned to the first ALIVE cell found, so the board
read is the same if the cells are just shifted.

Example of use with the default command-line options:

  simple-life --gen 0 --print 1 --size 23,39 --min -11,-19 \\
              --sepline \"\" --outfmt \",o,., , ,\" --infmt \",o,.\"

Other output formats to try: \",[],  \" / \",@,_,|,|,|\" / \",[_], _ \" / \",(o), . \"";

/// Simple command-line version of Conway's Game of Life (B3/S23).
///
/// Reads the cells of the board from the standard input, interpreting by
/// default the symbols o and . as ALIVE and DEAD cells, and prints the board
/// in each generation.
#[derive(Parser, Debug)]
#[command(name = "simple-life", version, after_help = EXAMPLES, args_override_self = true)]
pub struct Args {
    /// Number of generations to calculate
    #[arg(short = 'g', long = "gen", value_name = "NUM_GEN", default_value_t = 0)]
    pub generations: u32,

    /// Number of boards to print counting from the last [default: NUM_GEN+1,
    /// which prints generation 0 too]
    #[arg(short, long, value_name = "NUM_PRINT", num_args = 0..=1,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub print: Option<Option<u64>>,

    /// Size of the printed portion of the board
    #[arg(short, long, value_name = "NUM_ROWS,NUM_COLS", default_value = "23,39",
          value_parser = parse_size)]
    pub size: Size,

    /// Upper-left printed cell [default: centre the board on (0, 0)]
    #[arg(short, long, value_name = "MIN_ROW,MIN_COL", num_args = 0..=1,
          value_parser = parse_pair)]
    pub min: Option<Option<(isize, isize)>>,

    /// Line printed before each board; no LINE disables it
    #[arg(long = "startline", value_name = "LINE", num_args = 0..=1)]
    pub start_line: Option<Option<String>>,

    /// Line printed after each board; no LINE disables it
    #[arg(long = "endline", value_name = "LINE", num_args = 0..=1)]
    pub end_line: Option<Option<String>>,

    /// Line printed between two boards, empty by default; no LINE disables it
    #[arg(long = "sepline", value_name = "LINE", num_args = 0..=1)]
    pub sep_line: Option<Option<String>>,

    /// Output format, using the first character to separate the fields that
    /// are drawn as START + (ALIVE|DEAD) + [SEP + (ALIVE|DEAD)]... + END
    /// [default: ",o,., , ,"]
    #[arg(short, long = "outfmt", value_name = ",ALIVE,DEAD[,SEP,START,END]",
          allow_hyphen_values = true)]
    pub out_format: Option<Format>,

    /// Character sequences recognised as ALIVE and DEAD cells in the input
    /// [default: ",o,."]
    #[arg(short, long = "infmt", value_name = ",ALIVE,DEAD", allow_hyphen_values = true)]
    pub in_format: Option<Markers>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected two comma-separated integers, found `{0}`")]
    Pair(String),
    #[error("{name} must be at least 1, found {value}")]
    TooSmall { name: &'static str, value: isize },
}

/// `-x` or `--x` where `x` is an ASCII letter. Anything else, `-11,-19` for
/// one, is a value.
fn is_option(arg: &str) -> bool {
    let name = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'));
    name.and_then(|n| n.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Joins `-m VALUE` into `--min=VALUE` so negative coordinates reach the
/// value parser, while a bare `-m` followed by another option stays bare.
pub fn join_min_values<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut joined = Vec::new();
    while let Some(arg) = args.next() {
        let is_min = matches!(arg.to_str(), Some("-m" | "--min"));
        let value = args
            .next_if(|next| is_min && next.to_str().is_some_and(|v| !is_option(v)))
            .and_then(|next| next.into_string().ok());
        match value {
            Some(value) => joined.push(format!("--min={value}").into()),
            None => joined.push(arg),
        }
    }
    joined
}

fn parse_int(s: &str) -> Option<isize> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_pair(s: &str) -> Result<(isize, isize), ConfigError> {
    s.split_once(',')
        .and_then(|(a, b)| Some((parse_int(a)?, parse_int(b)?)))
        .ok_or_else(|| ConfigError::Pair(s.into()))
}

fn parse_size(s: &str) -> Result<Size, ConfigError> {
    let (rows, cols) = parse_pair(s)?;
    let positive = |name, value: isize| {
        usize::try_from(value)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(ConfigError::TooSmall { name, value })
    };
    Ok(Size {
        rows: positive("NUM_ROWS", rows)?,
        cols: positive("NUM_COLS", cols)?,
    })
}

/// Everything a run needs, with defaults filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub generations: u64,
    pub print: u64,
    pub settings: Settings,
    pub sep_line: Option<String>,
    pub markers: Markers,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let generations = u64::from(args.generations);
        let Size { rows, cols } = args.size;
        let window = match args.min.flatten() {
            Some((min_row, min_col)) => Window {
                min_row,
                min_col,
                rows,
                cols,
            },
            None => Window::centred(rows, cols),
        };
        Self {
            generations,
            print: args.print.flatten().unwrap_or(generations + 1),
            settings: Settings {
                format: args.out_format.unwrap_or_default(),
                window,
                start_line: args.start_line.flatten(),
                end_line: args.end_line.flatten(),
            },
            sep_line: args.sep_line.unwrap_or(Some(String::new())),
            markers: args.in_format.unwrap_or_default(),
        }
    }
}
