//! Homesense CLI
//!
//! Usage:
//!   homesense sensors.log                   # One line per sensor
//!   homesense < sensors.log                 # Read from stdin
//!   homesense sensors.log --json            # Flat JSON mapping
//!   homesense sensors.log --report          # JSON with reference + timestamp

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use homesense::types::EvaluationReport;
use homesense::{EvalError, LogEvaluator, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "homesense",
    version = VERSION,
    about = "Homesense - Grade home sensors against a reference environment",
    long_about = "Homesense evaluates a sensor log recorded while a room was held\n\
                  at a known temperature, humidity and CO concentration.\n\n\
                  Verdicts:\n  \
                  thermometer  ultra precise | very precise | precise\n  \
                  humidity     keep | discard\n  \
                  monoxide     keep | discard"
)]
struct Args {
    /// Log file to evaluate (stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Output the name → verdict mapping as JSON
    #[arg(long, conflicts_with = "report")]
    json: bool,

    /// Output a JSON report with timestamp and reference environment
    #[arg(long)]
    report: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        match e.downcast_ref::<EvalError>() {
            Some(eval) => eprintln!("{}: {:#}", eval.code(), e),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(exit_code(&e));
    }
}

/// 1 for bad input or I/O, 2 when an evaluator contract was broken
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<EvalError>() {
        Some(eval) if !eval.is_input_error() => 2,
        _ => 1,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("homesense={}", level.as_str().to_lowercase())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let text = read_log(args.file.as_ref())?;
    debug!(bytes = text.len(), "read log");

    let report = LogEvaluator::default().evaluate_report(&text)?;

    if args.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.json {
        println!("{}", report.sensors.to_json_pretty()?);
    } else {
        print_report(&report, args.no_color);
    }
    Ok(())
}

/// Read the whole log from a file or stdin
fn read_log(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read log file {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read log from stdin")?;
            Ok(text)
        }
    }
}

/// Print one line per sensor followed by a tally
fn print_report(report: &EvaluationReport, no_color: bool) {
    if report.sensors.is_empty() {
        println!("No sensors with readings found.");
        return;
    }

    if no_color {
        println!("{}", report.to_parseable_string());
        println!("{}", report.summary());
    } else {
        println!("{}", report.to_terminal_string());
        println!("\x1b[90m{}\x1b[0m", report.summary());
    }
}
