//! cm - certificate manager CLI
//!
//! Reads and writes credential records and profiles through the data access layer.
//! Results are printed to stdout as camelCase JSON.
//!
//! # Examples
//!
//! ```bash
//! # Add a certificate
//! cm certificate add --user <uuid> --name "Course A" --issuer "Academy" --date 2026-01-15
//!
//! # Look one up by its shareable credential ID
//! cm certificate get AWS-SAA-123 --pretty
//!
//! # Review queue and verification
//! cm certificate pending
//! cm certificate verify <uuid>
//! ```

use cm_cli::{Cli, CliResult, execute, logger};
use cm_config::Config;
use cm_services::DataAccess;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let data = DataAccess::open(&config).await?;
    let value = execute(&data, cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    output.map_err(cm_cli::CliError::from_json)
}
