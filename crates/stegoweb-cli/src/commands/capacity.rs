use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how many bytes of message fit into an image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image such as PNG or JPEG
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let capacity = stegoweb_core::commands::capacity(&self.media)?;

        println!("Image:     {}x{}", capacity.width, capacity.height);
        println!("Maximum:   {} bytes", capacity.max);
        println!("Available: {} bytes", capacity.available);

        Ok(())
    }
}
