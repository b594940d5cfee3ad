use std::fmt::{self, Debug, Formatter};

/// The passphrase that decides where a message is hidden.
///
/// Any byte sequence is accepted, the empty one included. An empty key is weak
/// but behaves the same when hiding and unveiling.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Key(Vec<u8>);

impl Key {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", "*".repeat(self.0.len()))
    }
}

impl From<&str> for Key {
    fn from(passphrase: &str) -> Self {
        Self(passphrase.as_bytes().to_vec())
    }
}

impl From<String> for Key {
    fn from(passphrase: String) -> Self {
        Self(passphrase.into_bytes())
    }
}

impl From<&String> for Key {
    fn from(passphrase: &String) -> Self {
        Self::from(passphrase.as_str())
    }
}

/// `None` stands for "no passphrase given" and maps to the empty key.
impl From<Option<String>> for Key {
    fn from(passphrase: Option<String>) -> Self {
        passphrase.map(Self::from).unwrap_or_default()
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_as_ref() {
        let key: Key = None.into();
        assert!(key.is_empty());

        let key: Key = "password".into();
        assert_eq!(key.as_ref(), b"password");
        assert_eq!(key, Key::from(Some("password".to_string())));
    }

    #[test]
    fn test_debug() {
        let key = Key::default();
        assert_eq!(format!("{:?}", key), "Key()");

        let key: Key = "password".into();
        assert_eq!(format!("{:?}", key), "Key(********)");
    }

    #[test]
    fn test_utf8_passphrase_is_kept_as_bytes() {
        let key: Key = "pässwört".into();
        assert_eq!(key.len(), "pässwört".len());
        assert_eq!(key.as_bytes(), "pässwört".as_bytes());
    }
}
