/// ants - Earliest and latest time for all ants to fall off their rods
///
/// Reads the number of cases, then for each case the rod length, the ant
/// count and the ant positions. Prints "earliest latest" per case.
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};

use moneymatters::ants;
use moneymatters::logging;

#[derive(Parser)]
#[clap(
    name = "ants",
    about = "Earliest and latest fall-off times for ants on a rod"
)]
struct Args {
    /// Input file (stdin if omitted or "-")
    input: Option<String>,

    /// Increase log verbosity
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let text = match args.input.as_deref() {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?,
    };

    let cases = ants::parse_cases(&text).context("Failed to parse ants input")?;
    log::info!("read {} cases", cases.len());
    for (i, case) in cases.iter().enumerate() {
        let (earliest, latest) = case
            .times()
            .with_context(|| format!("Invalid case {}", i + 1))?;
        println!("{earliest} {latest}");
    }
    Ok(())
}
