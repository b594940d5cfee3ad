use std::path::{Path, PathBuf};

use crate::{CodecOptions, Key, Message, PixelBuffer, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    password: Key,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Set the password the message was hidden with
    /// If `None` is passed, the empty key is used
    pub fn using_password<P: Into<Key>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Message, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let pixels = PixelBuffer::open(secret_media)?;

        crate::unveil(&pixels, &self.password, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageType;
    use tempfile::tempdir;

    #[test]
    fn should_unveil_what_the_hide_api_has_hidden() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        PixelBuffer::filled(32, 32, [12, 34, 56, 200])
            .unwrap()
            .save_png(&carrier)
            .unwrap();

        crate::api::hide::prepare()
            .with_message("https://example.com/clip.mp4")
            .with_message_type(MessageType::VideoUrl)
            .with_password("Secret42")
            .with_image(&carrier)
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let message = prepare()
            .from_secret_file(&secret)
            .using_password("Secret42")
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(message.text, "https://example.com/clip.mp4");
        assert_eq!(message.kind, MessageType::VideoUrl);
    }

    #[test]
    fn should_fail_without_secret_file() {
        assert!(matches!(
            prepare().using_password("Secret42").execute(),
            Err(StegoError::CarrierNotSet)
        ));
    }

    #[test]
    fn should_fail_on_a_missing_file() {
        assert!(matches!(
            prepare().from_secret_file("does/not/exist.png").execute(),
            Err(StegoError::InvalidImageMedia)
        ));
    }
}
