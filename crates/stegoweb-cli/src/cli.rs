use clap::{Parser, Subcommand};
use dialoguer::Password;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// More log output, repeat for even more (-vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
    Keygen(keygen::KeygenArgs),
}

/// Prompts for the password without echoing it.
/// Only an empty input leads to `None`, that is the empty key.
/// Without a terminal the prompt fails and so does the command.
pub fn ask_for_password(confirm: bool) -> CliResult<Option<String>> {
    let mut prompt = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }
    let password = prompt.interact()?;

    Ok(Some(password).filter(|p| !p.is_empty()))
}
