//! Propositional logic interpreter - Command Line Interface
//!
//! Reads `table` and `simplify` statements from stdin, or from a file in batch mode,
//! and prints one result per line.

use clap::Parser;
use proposition::config::DEFAULT_MAX_TABLE_VARIABLES;
use proposition::{repl, Config, Session};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "proposition")]
#[command(about = "Truth tables and simplification for propositional logic", long_about = None)]
#[command(version)]
struct Args {
    /// File of statements, one per line (reads stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print tables without ANSI colours
    #[arg(long = "no-colour", alias = "no-color")]
    no_colour: bool,

    /// Reject illegal characters while lexing
    #[arg(long)]
    strict: bool,

    /// Largest number of variables a truth table may have
    #[arg(long = "max-variables", value_name = "N", default_value_t = DEFAULT_MAX_TABLE_VARIABLES)]
    max_variables: usize,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config {
        max_table_variables: args.max_variables,
        colour: !args.no_colour,
        strict: args.strict,
    };
    let session = Session::new(config);
    let stdout = io::stdout();

    let result = match &args.input {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Error reading statement file '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };
            log::debug!("running batch file {}", path.display());
            repl::run(&session, BufReader::new(file), stdout.lock(), false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            repl::run(&session, stdin.lock(), stdout.lock(), interactive)
        }
    };

    match result {
        Ok(summary) => {
            log::debug!(
                "processed {} lines, {} failed",
                summary.processed,
                summary.failed
            );
            if args.input.is_some() && !summary.is_success() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
