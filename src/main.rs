use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Read};

use moneymatters::input::Problem;
use moneymatters::logging;
use moneymatters::verify;

/// moneymatters - Can every group of friends settle their debts among themselves?
///
/// Reads `n m`, then n amounts, then m friendship pairs, and prints POSSIBLE
/// if each friend group's amounts sum to zero, IMPOSSIBLE otherwise.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Input file (stdin if omitted or "-")
    #[clap(value_name = "INPUT")]
    input: Option<String>,

    /// Print every group that does not sum to zero to stderr
    #[clap(long = "report")]
    report: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

fn open_input(path: Option<&str>) -> Result<Box<dyn Read>> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open input {path}"))?;
            Ok(Box::new(file))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let reader = open_input(args.input.as_deref())?;
    let problem = Problem::read_from(reader).context("Failed to parse problem input")?;
    let mut forest = problem.forest().context("Failed to build friend groups")?;
    let verdict = verify::verify(&mut forest, &problem.values).context("Failed to verify groups")?;
    println!("{verdict}");

    if args.report {
        for group in verify::imbalances(&mut forest, &problem.values)? {
            eprintln!(
                "group {}: members {:?} total {}",
                group.representative, group.members, group.total
            );
        }
    }
    Ok(())
}
