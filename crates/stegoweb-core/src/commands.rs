use std::path::Path;

use crate::{api, Capacity, CodecOptions, Message, MessageType, Result};

pub fn hide(
    media: &Path,
    output: &Path,
    message: &str,
    message_type: MessageType,
    password: Option<String>,
    opts: &CodecOptions,
) -> Result<()> {
    api::hide::prepare()
        .with_options(*opts)
        .with_image(media)
        .with_output(output)
        .with_message(message)
        .with_message_type(message_type)
        .use_password(password)
        .execute()
}

pub fn unveil(media: &Path, password: Option<String>, opts: &CodecOptions) -> Result<Message> {
    api::unveil::prepare()
        .with_options(*opts)
        .from_secret_file(media)
        .using_password(password)
        .execute()
}

pub fn capacity(media: &Path) -> Result<Capacity> {
    api::capacity::of_image(media)
}
