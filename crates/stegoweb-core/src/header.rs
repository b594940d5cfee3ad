//! The fixed 32 byte record that precedes every hidden message.
//!
//! ```text
//! offset  size  field
//!      0     4  magic "SWEB"
//!      4     1  format version
//!      5     1  channel layout (0 = rgb, 1 = rgba)
//!      6     2  reserved, zero
//!      8     8  payload length, u64 little endian
//!     16     8  payload digest, first 8 bytes of its SHA-256
//!     24     4  message type, u32 little endian
//!     28     4  reserved, zero
//! ```
//!
//! The message type offset is shared with every other reader and writer and must not move.

use byteorder::{ByteOrder, LittleEndian};
use sha2::{Digest, Sha256};

use crate::error::StegoError;
use crate::media::ChannelLayout;
use crate::result::Result;

pub const HEADER_SIZE: usize = 32;
pub const MESSAGE_TYPE_OFFSET: usize = 24;

const MAGIC: &[u8; 4] = b"SWEB";
const FORMAT_VERSION: u8 = 1;
const DIGEST_LEN: usize = 8;

const MAGIC_RANGE: std::ops::Range<usize> = 0..4;
const VERSION_OFFSET: usize = 4;
const LAYOUT_OFFSET: usize = 5;
const LENGTH_RANGE: std::ops::Range<usize> = 8..16;
const DIGEST_RANGE: std::ops::Range<usize> = 16..24;
const MESSAGE_TYPE_RANGE: std::ops::Range<usize> = MESSAGE_TYPE_OFFSET..MESSAGE_TYPE_OFFSET + 4;
const RESERVED: [usize; 6] = [6, 7, 28, 29, 30, 31];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    payload_length: u64,
    message_type: u32,
    layout: ChannelLayout,
    digest: [u8; DIGEST_LEN],
}

impl Header {
    /// A header for `payload_length` bytes, with RGBA layout and an all-zero digest.
    pub fn new(payload_length: u64, message_type: u32) -> Self {
        Self {
            payload_length,
            message_type,
            layout: ChannelLayout::Rgba,
            digest: [0; DIGEST_LEN],
        }
    }

    pub fn with_layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// records the digest of the payload, so that [`Header::verify_payload`] can check it later
    pub fn with_payload_digest(mut self, payload: &[u8]) -> Self {
        self.digest = digest_of(payload);
        self
    }

    pub fn payload_length(&self) -> u64 {
        self.payload_length
    }

    pub fn message_type(&self) -> u32 {
        self.message_type
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn verify_payload(&self, payload: &[u8]) -> bool {
        payload.len() as u64 == self.payload_length && digest_of(payload) == self.digest
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut raw = [0u8; HEADER_SIZE];

        raw[MAGIC_RANGE].copy_from_slice(MAGIC);
        raw[VERSION_OFFSET] = FORMAT_VERSION;
        raw[LAYOUT_OFFSET] = self.layout.into();
        LittleEndian::write_u64(&mut raw[LENGTH_RANGE], self.payload_length);
        raw[DIGEST_RANGE].copy_from_slice(&self.digest);
        LittleEndian::write_u32(&mut raw[MESSAGE_TYPE_RANGE], self.message_type);

        raw
    }

    /// Parses a header, anything that does not look like one is [`StegoError::NoMessage`].
    pub fn decode(raw: &[u8; HEADER_SIZE]) -> Result<Self> {
        if &raw[MAGIC_RANGE] != MAGIC
            || raw[VERSION_OFFSET] != FORMAT_VERSION
            || RESERVED.iter().any(|&i| raw[i] != 0)
        {
            return Err(StegoError::NoMessage);
        }

        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&raw[DIGEST_RANGE]);

        Ok(Self {
            payload_length: LittleEndian::read_u64(&raw[LENGTH_RANGE]),
            message_type: LittleEndian::read_u32(&raw[MESSAGE_TYPE_RANGE]),
            layout: ChannelLayout::try_from(raw[LAYOUT_OFFSET])?,
            digest,
        })
    }
}

fn digest_of(payload: &[u8]) -> [u8; DIGEST_LEN] {
    let hash = Sha256::digest(payload);
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hash[..DIGEST_LEN]);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_boundary_values() {
        for length in [0, 1, u32::MAX as u64, u64::MAX] {
            for message_type in [0, 1, u32::MAX] {
                let raw = Header::new(length, message_type).encode();
                let header = Header::decode(&raw).expect("header should decode");

                assert_eq!(header.payload_length(), length);
                assert_eq!(header.message_type(), message_type);
            }
        }
    }

    #[test]
    fn should_place_the_message_type_at_offset_24_little_endian() {
        let raw = Header::new(7, 0x0403_0201).encode();
        assert_eq!(&raw[24..28], &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn should_encode_byte_identical_for_equal_inputs() {
        let a = Header::new(42, 2).with_payload_digest(b"hi").encode();
        let b = Header::new(42, 2).with_payload_digest(b"hi").encode();
        assert_eq!(a, b);
        assert_eq!(&a[0..4], b"SWEB");
        assert_eq!(&a[6..8], &[0, 0]);
        assert_eq!(&a[28..32], &[0, 0, 0, 0]);
    }

    #[test]
    fn should_keep_the_layout() {
        for layout in ChannelLayout::PROBE_ORDER {
            let raw = Header::new(3, 0).with_layout(layout).encode();
            assert_eq!(Header::decode(&raw).unwrap().layout(), layout);
        }
    }

    #[test]
    fn should_reject_garbage() {
        let mut raw = Header::new(3, 0).encode();
        raw[0] = b'X';
        assert!(matches!(Header::decode(&raw), Err(StegoError::NoMessage)));

        let mut raw = Header::new(3, 0).encode();
        raw[VERSION_OFFSET] = 2;
        assert!(matches!(Header::decode(&raw), Err(StegoError::NoMessage)));

        let mut raw = Header::new(3, 0).encode();
        raw[LAYOUT_OFFSET] = 9;
        assert!(matches!(Header::decode(&raw), Err(StegoError::NoMessage)));

        let mut raw = Header::new(3, 0).encode();
        raw[30] = 1;
        assert!(matches!(Header::decode(&raw), Err(StegoError::NoMessage)));

        assert!(Header::decode(&[0u8; HEADER_SIZE]).is_err());
    }

    #[test]
    fn should_verify_the_payload_digest() {
        let header = Header::new(5, 0).with_payload_digest(b"hello");
        assert!(header.verify_payload(b"hello"));
        assert!(!header.verify_payload(b"hellO"));
        assert!(!header.verify_payload(b"hell"));
    }
}
