//! cm-cli library
//!
//! Command definitions and their execution against the data access layer. The `cm`
//! binary parses arguments, opens the configured stores and prints the JSON result.

pub mod account_commands;
pub mod analytics_commands;
pub mod certificate_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod execute;
pub mod logger;
pub mod user_commands;
pub mod waitlist_commands;
pub mod wallet_commands;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use execute::execute;
