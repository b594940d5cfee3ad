use std::path::PathBuf;

use clap::Args;
use stegoweb_core::{CodecOptions, StegoError};

use crate::{CliError, CliResult};

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password the message was hidden with, prompted if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the secret message
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        self.run_with_prompt(crate::cli::ask_for_password)
    }

    fn run_with_prompt(
        self,
        ask_for_password: impl FnOnce(bool) -> CliResult<Option<String>>,
    ) -> CliResult<()> {
        let password = match self.password {
            Some(password) => Some(password),
            None => ask_for_password(false)?,
        };

        let message =
            stegoweb_core::commands::unveil(&self.media, password, &CodecOptions::default())?;
        eprintln!("Message type: {}", message.kind);

        match self.output_file {
            Some(file) => std::fs::write(file, message.as_bytes())
                .map_err(|source| CliError::from(StegoError::WriteError { source })),
            None => {
                println!("{}", message.text);
                Ok(())
            }
        }
    }
}
