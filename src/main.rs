use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;

use crate::config::{Args, Config, join_min_values};

mod config;
mod driver;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from(Args::parse_from(join_min_values(std::env::args_os())));
    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    driver::run(&config, input, output)
}
