use std::fmt::{self, Debug, Formatter};

use clap::Parser;
use env_logger::Env;
use stegoweb_core::StegoError;
use thiserror::Error;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

#[derive(Error)]
pub enum CliError {
    /// Represents every failure of hiding, unveiling and the image files
    #[error(transparent)]
    Stego(#[from] StegoError),

    /// Represents a password prompt that could not be shown or answered, e.g. without a terminal
    #[error("Password prompt failed: {0}")]
    PasswordPrompt(#[from] dialoguer::Error),
}

/// `main` reports errors with `Debug`, so this prints the same as `Display`
impl Debug for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;

fn main() -> CliResult<()> {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Unveil(unveil) => unveil.run(),
        Commands::Capacity(capacity) => capacity.run(),
        Commands::Keygen(keygen) => keygen.run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_print_errors_readable() {
        let error: CliError = StegoError::NoMessage.into();

        assert_eq!(format!("{error:?}"), "No secret message found");
    }
}
