use clap::Args;
use stegoweb_core::DEFAULT_KEY_LENGTH;

use crate::CliResult;

/// Generates a random password
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Number of characters
    #[arg(short, long, value_name = "length", default_value_t = DEFAULT_KEY_LENGTH)]
    pub length: usize,
}

impl KeygenArgs {
    pub fn run(self) -> CliResult<()> {
        println!("{}", stegoweb_core::generate_key(self.length)?);

        Ok(())
    }
}
