// Thu Aug 27 2026 - Dan

use clap::Parser;
use colored::Colorize;
use findoffset::{Config, SearchSession};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "findoffset")]
#[command(version = "1.0.0")]
#[command(about = "Find byte-exact offsets of pattern files inside a target file", long_about = None)]
struct Args {
    /// Use the data in this file as a search pattern (repeatable)
    #[arg(short, long = "pattern", value_name = "pfile")]
    pattern: Vec<PathBuf>,

    /// File in which to search for the patterns
    #[arg(value_name = "sfile")]
    target: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    let config = Config::new()
        .with_patterns(args.pattern)
        .with_target(args.target);

    let report = match SearchSession::new(config).run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    for entry in report.iter() {
        println!("{}", entry);
    }

    if report.matched_any() {
        std::process::exit(0);
    }

    eprintln!("{} No matches found", "[!]".red());
    std::process::exit(1);
}
