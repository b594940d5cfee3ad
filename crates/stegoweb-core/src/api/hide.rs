use std::path::{Path, PathBuf};

use log::info;

use crate::{CodecOptions, Key, Message, MessageType, PixelBuffer, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    message_type: MessageType,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Key,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The output is always written as PNG, whatever the file extension says
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, the empty key is used
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password
            .map(|s| Key::from(s.as_ref()))
            .unwrap_or_default();
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let mut carrier = PixelBuffer::open(&image)?;
        let message = Message::new(message, self.message_type);
        crate::hide_in_place(&mut carrier, &self.password, &message, &self.options)?;
        carrier.save_png(&output)?;
        info!("message hidden in {output:?}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        PixelBuffer::filled(32, 32, [90, 120, 200, 255])
            .unwrap()
            .save_png(&carrier)
            .unwrap();

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_password("SuperSecret42")
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");
    }

    #[test]
    fn should_complain_about_missing_parts() {
        assert!(matches!(
            prepare().with_image("a.png").with_output("b.png").execute(),
            Err(StegoError::MissingMessage)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_output("b.png").execute(),
            Err(StegoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_image("a.png").execute(),
            Err(StegoError::TargetNotSet)
        ));
    }

    #[test]
    fn should_not_leak_the_password_in_debug() {
        let api = prepare().with_password("SuperSecret42");

        assert!(!format!("{api:?}").contains("SuperSecret42"));
    }
}
