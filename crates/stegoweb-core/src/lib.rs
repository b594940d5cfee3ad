//! # StegoWeb Core API
//!
//! Hides short text messages in the least significant bits of RGBA pixels.
//! A key decides which channel bytes carry the bits, only the same key finds them again.
//!
//! - [`hide`] writes a [`Message`] into a copy of a [`PixelBuffer`]
//! - [`unveil`] reads it back
//! - [`max_capacity`] and [`available_capacity`] tell how much fits
//!
//! # Usage Examples
//!
//! ## Hide and unveil in memory
//!
//! ```rust
//! use stegoweb_core::{hide, unveil, CodecOptions, Key, Message, PixelBuffer};
//!
//! let carrier = PixelBuffer::filled(16, 16, [10, 20, 30, 255]).unwrap();
//! let key = Key::from("pw");
//! let opts = CodecOptions::default();
//!
//! let secret = hide(&carrier, &key, &Message::text("hi"), &opts).unwrap();
//! let message = unveil(&secret, &key, &opts).unwrap();
//!
//! assert_eq!(message.text, "hi");
//! ```
//!
//! ## Check the capacity first
//!
//! ```rust
//! use stegoweb_core::{available_capacity, max_capacity};
//!
//! assert_eq!(max_capacity(16, 16), 96);
//! assert_eq!(available_capacity(16, 16), 64);
//! assert_eq!(available_capacity(4, 4), 0);
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod capacity;
pub mod commands;
pub mod engine;
pub mod error;
pub mod header;
pub mod key;
pub mod media;
pub mod message;
pub mod permutation;
pub mod random;
pub mod result;

pub use crate::capacity::{available_capacity, max_capacity, Capacity};
pub use crate::engine::{hide, hide_in_place, unveil};
pub use crate::error::StegoError;
pub use crate::header::{Header, HEADER_SIZE};
pub use crate::key::Key;
pub use crate::media::{ChannelLayout, CodecOptions, PixelBuffer};
pub use crate::message::{Message, MessageType};
pub use crate::permutation::{
    BitPositionGenerator, KeyedShuffle, LinearPositions, PositionGenerators,
};
pub use crate::random::{generate_key, random_u32, DEFAULT_KEY_LENGTH};
pub use crate::result::Result;
