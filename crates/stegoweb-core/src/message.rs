use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// What the text of a message stands for.
///
/// Only [`MessageType::Text`] has a fixed meaning, the URL kinds mirror what the
/// browser extension offers when composing a message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    #[default]
    Text,
    VideoUrl,
    ImageUrl,
    Other(u32),
}

impl From<u32> for MessageType {
    fn from(value: u32) -> Self {
        match value {
            0 => MessageType::Text,
            1 => MessageType::VideoUrl,
            2 => MessageType::ImageUrl,
            other => MessageType::Other(other),
        }
    }
}

impl From<MessageType> for u32 {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Text => 0,
            MessageType::VideoUrl => 1,
            MessageType::ImageUrl => 2,
            MessageType::Other(other) => other,
        }
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Text => write!(f, "text"),
            MessageType::VideoUrl => write!(f, "video-url"),
            MessageType::ImageUrl => write!(f, "image-url"),
            MessageType::Other(other) => write!(f, "{other}"),
        }
    }
}

impl FromStr for MessageType {
    type Err = String;

    /// accepts the names printed by `Display` or any plain number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(MessageType::Text),
            "video-url" | "video" => Ok(MessageType::VideoUrl),
            "image-url" | "image" => Ok(MessageType::ImageUrl),
            other => other
                .parse::<u32>()
                .map(MessageType::from)
                .map_err(|_| format!("unknown message type `{s}`")),
        }
    }
}

/// A text message together with its type tag
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageType,
}

impl Message {
    pub fn new<S: Into<String>>(text: S, kind: MessageType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// a plain text message, type 0
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::new(text, MessageType::Text)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// length of the UTF-8 encoded text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_message_types_losslessly() {
        for value in [0, 1, 2, 3, 42, u32::MAX] {
            assert_eq!(u32::from(MessageType::from(value)), value);
        }
        assert_eq!(MessageType::from(0), MessageType::Text);
        assert_eq!(MessageType::from(7), MessageType::Other(7));
    }

    #[test]
    fn should_parse_names_and_numbers() {
        assert_eq!("text".parse::<MessageType>().unwrap(), MessageType::Text);
        assert_eq!("Video".parse::<MessageType>().unwrap(), MessageType::VideoUrl);
        assert_eq!("image-url".parse::<MessageType>().unwrap(), MessageType::ImageUrl);
        assert_eq!("2".parse::<MessageType>().unwrap(), MessageType::ImageUrl);
        assert_eq!("99".parse::<MessageType>().unwrap(), MessageType::Other(99));
        assert!("-1".parse::<MessageType>().is_err());
        assert!("html".parse::<MessageType>().is_err());
    }

    #[test]
    fn should_display_parsable_names() {
        for kind in [
            MessageType::Text,
            MessageType::VideoUrl,
            MessageType::ImageUrl,
            MessageType::Other(12),
        ] {
            assert_eq!(kind.to_string().parse::<MessageType>().unwrap(), kind);
        }
    }

    #[test]
    fn should_measure_utf8_bytes() {
        let msg = Message::text("hé");
        assert_eq!(msg.len(), 3);
        assert_eq!(msg.kind, MessageType::Text);
    }
}
