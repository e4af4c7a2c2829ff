use std::io::{Read, Write};

use anyhow::{Context, Result};
use life::Life;
use log::{debug, info};

use crate::config::Config;

/// Reads the initial board from `input`, then advances it `generations`
/// times, printing the last `print` boards to `output`.
///
/// Bytes that are not valid UTF-8 are read as replacement characters.
pub fn run(config: &Config, mut input: impl Read, mut output: impl Write) -> Result<()> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("failed to read the initial board")?;
    let mut life = Life::new();
    life.read_lines(String::from_utf8_lossy(&bytes).lines(), &config.markers);
    info!(
        "{} live cells, {} generations, printing {}",
        life.population(),
        config.generations,
        config.print
    );
    let mut printed = config.print > config.generations;
    if printed {
        print_board(&life, config, &mut output)?;
    }
    for g in 1..=config.generations {
        if let (true, Some(line)) = (printed, &config.sep_line) {
            writeln!(output, "{line}").context("failed to write the separator")?;
        }
        life.next();
        debug!(
            "generation {g}: rows {}..{}, columns {}..{}",
            life.first_row(),
            life.last_row_plus_one(),
            life.first_col(),
            life.last_col_plus_one()
        );
        printed = config.print > config.generations - g;
        if printed {
            print_board(&life, config, &mut output)?;
        }
    }
    output.flush().context("failed to flush the output")
}

fn print_board(life: &Life, config: &Config, output: &mut impl Write) -> Result<()> {
    output
        .write_all(life.render(&config.settings).as_bytes())
        .context("failed to write the board")
}
