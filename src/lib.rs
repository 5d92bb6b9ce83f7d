//! Core library entry for the `ltc` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod ports;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::LatticeConfig;

/// Run the CLI with the provided arguments.
///
/// Command outcomes are reported on the terminal and do not make this fail.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the configuration
/// cannot be loaded.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = LatticeConfig::load()?;
    commands::dispatch(&cli.command, &config)
}
