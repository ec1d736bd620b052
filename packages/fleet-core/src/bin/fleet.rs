//! Fleet CLI
//!
//! Reads a fleet description, prints the ship counts per class and the
//! advantage time bound.
//!
//! # Usage
//!
//! ```bash
//! # Read from stdin
//! fleet < fleet.txt
//!
//! # Custom limits and JSON output
//! fleet --input fleet.txt --config limits.yaml --json
//!
//! # Scan details on stderr
//! RUST_LOG=fleet_core=debug fleet --input fleet.txt
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fleet_core::adapters::text::{run, FleetInput, FleetReport, InputError};
use fleet_core::config::FleetConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Classify the ships of a fleet and bound its advantage time", long_about = None)]
struct Cli {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// YAML file overriding the default limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(report) => match render(&report, cli.json) {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<FleetReport, InputError> {
    let config = match &cli.config {
        Some(path) => FleetConfig::from_yaml(path).map_err(fleet_core::FleetError::from)?,
        None => FleetConfig::default(),
    };

    let input = match &cli.input {
        Some(path) => FleetInput::from_reader(BufReader::new(File::open(path)?))?,
        None => FleetInput::from_reader(io::stdin().lock())?,
    };

    run(&input, &config.limits)
}

fn render(report: &FleetReport, json: bool) -> serde_json::Result<String> {
    if json {
        let mut text = serde_json::to_string_pretty(report)?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(report.to_text())
    }
}
