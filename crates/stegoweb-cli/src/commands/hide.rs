use std::path::PathBuf;

use clap::Args;
use stegoweb_core::{CodecOptions, MessageType};

use crate::CliResult;

/// Hides a text message in an image, the result is always a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password that decides where the message is hidden, prompted if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: String,

    /// Type of the message: text, video-url, image-url or a number
    #[arg(short = 't', long = "type", value_name = "message type", default_value = "text")]
    pub message_type: MessageType,

    /// Keep the alpha channel out of the game and make every pixel fully opaque
    #[arg(long)]
    pub opaque: bool,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        self.run_with_prompt(crate::cli::ask_for_password)
    }

    fn run_with_prompt(
        self,
        ask_for_password: impl FnOnce(bool) -> CliResult<Option<String>>,
    ) -> CliResult<()> {
        let password = match self.password {
            Some(password) => Some(password),
            None => ask_for_password(true)?,
        };
        let options = CodecOptions::default().with_transparency(!self.opaque);

        stegoweb_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.message,
            self.message_type,
            password,
            &options,
        )?;

        Ok(())
    }
}
