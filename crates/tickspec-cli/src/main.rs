//! Command-line inspection of recurring time patterns.
//!
//! The scheduler consuming `tickspec` evaluates readiness in its own loop;
//! this binary is the debugging surface: parse a pattern to see its
//! structured form, or test it against a specific civil timestamp. The
//! `--at` default is the only clock read anywhere in the workspace.

use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use tickspec::parse_pattern;

#[derive(Parser)]
#[command(
    name = "tickspec",
    version,
    about = "Inspect and evaluate recurring time patterns"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a pattern and print the structured spec as JSON
    Parse {
        /// The pattern to parse (e.g. "Monday 14:30", "**:15")
        pattern: String,
    },
    /// Test whether a timestamp satisfies a pattern
    ///
    /// Exits 0 when the timestamp is ready, 1 when it is not.
    Check {
        /// The pattern to test against
        pattern: String,

        /// Civil timestamp to test (e.g. 2026-02-18T14:30:00); defaults to
        /// the current local time
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { pattern } => {
            let spec = parse_pattern(&pattern)?;
            let doc = serde_json::json!({
                "spec": spec,
                "canonical": spec.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Command::Check { pattern, at } => {
            let spec = parse_pattern(&pattern)?;
            let at = at.unwrap_or_else(|| Local::now().naive_local());
            if spec.is_ready(&at) {
                println!("ready");
            } else {
                println!("not ready");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
