//! Ringledger interactive binary.
//!
//! # Usage
//!
//! ```bash
//! # Default 10-second rotation interval
//! ringledger
//!
//! # Rotate every 3 seconds, verbose logging
//! ringledger --rotation-interval 3 --log-level debug
//! ```
//!
//! Commands on stdin: `add <integer>`, `process`, `timings`, `quit`.

#![allow(clippy::print_stdout, reason = "interactive CLI output")]

use std::{io::BufRead, time::Duration};

use clap::Parser;
use ringledger_app::{App, Command, Outcome, SystemEnv};
use ringledger_core::TransformEngine;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Ringledger demo shell
#[derive(Parser, Debug)]
#[command(name = "ringledger")]
#[command(about = "Modular transform demo with key rotation and a case ledger")]
#[command(version)]
struct Args {
    /// Key rotation interval in seconds
    #[arg(long, default_value = "10")]
    rotation_interval: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let env = SystemEnv::new();
    let engine = TransformEngine::generate(&env);
    let mut app = App::with_engine(env, engine, Duration::from_secs(args.rotation_interval));

    tracing::info!(rotation_interval_secs = args.rotation_interval, "ringledger starting");
    println!("Commands: add <integer>, process, timings, quit");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => render(&app.handle(command)),
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}

/// Print an outcome for the interactive session.
fn render(outcome: &Outcome) {
    match outcome {
        Outcome::CaseStored { case_id, encoded_value, rotated, elapsed } => {
            println!(
                "Encoded and stored case {case_id}: {encoded_value} ({} ms)",
                format_millis(*elapsed)
            );
            if *rotated {
                println!("Keys rotated");
            }
        },
        Outcome::CasesProcessed { results, elapsed } => {
            for (case_id, value) in results {
                println!("Case {case_id}: {value}");
            }
            println!("Processed {} cases ({} ms)", results.len(), format_millis(*elapsed));
        },
        Outcome::Timings { encode, process } => {
            println!("encode ms: {}", join_millis(encode));
            println!("process ms: {}", join_millis(process));
        },
        Outcome::Quit => {},
    }
}

fn format_millis(duration: Duration) -> String {
    format!("{:.3}", duration.as_secs_f64() * 1000.0)
}

fn join_millis(durations: &[Duration]) -> String {
    durations.iter().map(|duration| format_millis(*duration)).collect::<Vec<_>>().join(", ")
}
