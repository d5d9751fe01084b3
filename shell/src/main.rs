use std::{env, io, process::exit};

use anyhow::bail;
use colored::Colorize;

mod cli;
mod logging;
mod parse;

const USAGE: &str = "usage: shell [-v|--verbose] [--no-color] [-h|--help]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Config {
    verbose: bool, // Per-generation diagnostics on stderr.
    color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
        }
    }
}

/// `None` when only the usage text was asked for.
fn parse_args<I>(args: I) -> anyhow::Result<Option<Config>>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();

    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => config.verbose = true,
            "--no-color" => config.color = false,
            "-h" | "--help" => return Ok(None),
            other => bail!("Unknown argument: {other}\n{USAGE}"),
        }
    }

    Ok(Some(config))
}

fn run() -> anyhow::Result<()> {
    let Some(config) = parse_args(env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    if !config.color {
        colored::control::set_override(false);
    }

    if config.verbose {
        logging::enable_verbose_logging();
    }

    cli::run_cli(io::stdin().lock(), io::stdout().lock())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "!".bright_red().bold());
        exit(1);
    }
}
