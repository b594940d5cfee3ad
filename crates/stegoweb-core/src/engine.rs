//! Hiding a message in pixels and unveiling it again.
//!
//! The bit stream is the 32 byte [`Header`] followed by the UTF-8 bytes of the
//! message. Each bit replaces the least significant bit of one channel byte,
//! the channel bytes are picked by the key.

use std::io::{Read, Write};

use log::{debug, trace};

use crate::capacity::{available_capacity, Capacity};
use crate::error::StegoError;
use crate::header::{Header, HEADER_SIZE};
use crate::key::Key;
use crate::media::{ChannelLayout, CodecOptions, LsbCodec, PixelBuffer};
use crate::message::Message;
use crate::result::Result;

/// Hides `message` in a copy of `pixels`, the original stays untouched.
pub fn hide(
    pixels: &PixelBuffer,
    key: &Key,
    message: &Message,
    opts: &CodecOptions,
) -> Result<PixelBuffer> {
    let mut carrier = pixels.clone();
    hide_in_place(&mut carrier, key, message, opts)?;

    Ok(carrier)
}

/// Hides `message` directly in `carrier`.
///
/// On [`StegoError::CapacityExceeded`] the carrier is left unmodified.
pub fn hide_in_place(
    carrier: &mut PixelBuffer,
    key: &Key,
    message: &Message,
    opts: &CodecOptions,
) -> Result<()> {
    let payload = message.as_bytes();
    let (width, height) = carrier.dimensions();
    let capacity = Capacity::of(width, height);
    if !capacity.fits(payload.len() as u64) {
        debug!(
            "message of {} bytes exceeds the capacity of {} bytes of a {width}x{height} image",
            payload.len(),
            capacity.available
        );
        return Err(StegoError::CapacityExceeded {
            required: payload.len() as u64,
            available: capacity.available,
        });
    }

    let layout = ChannelLayout::for_transparency(opts.transparency);
    let header = Header::new(payload.len() as u64, message.kind.into())
        .with_layout(layout)
        .with_payload_digest(payload);

    if layout == ChannelLayout::Rgb {
        carrier.force_opaque();
    }

    debug!(
        "hiding {} bytes in a {width}x{height} image using {layout:?} sites",
        payload.len()
    );
    let mut encoder = LsbCodec::encoder(carrier, key, layout, opts);
    encoder.write_all(&header.encode())?;
    encoder.write_all(payload)?;
    encoder.flush()?;

    Ok(())
}

/// Unveils the message hidden in `pixels` with `key`.
///
/// A wrong key, an image without a message and corrupted data are not told apart,
/// all of them end in [`StegoError::NoMessage`].
pub fn unveil(pixels: &PixelBuffer, key: &Key, opts: &CodecOptions) -> Result<Message> {
    for layout in ChannelLayout::PROBE_ORDER {
        match unveil_with_layout(pixels, key, layout, opts) {
            Ok(message) => {
                debug!("unveiled {} bytes using {layout:?} sites", message.len());
                return Ok(message);
            }
            Err(_) => trace!("no message found using {layout:?} sites"),
        }
    }

    Err(StegoError::NoMessage)
}

fn unveil_with_layout(
    pixels: &PixelBuffer,
    key: &Key,
    layout: ChannelLayout,
    opts: &CodecOptions,
) -> Result<Message> {
    let mut decoder = LsbCodec::decoder(pixels, key, layout, opts);

    let mut raw_header = [0u8; HEADER_SIZE];
    decoder
        .read_exact(&mut raw_header)
        .map_err(|_| StegoError::NoMessage)?;
    let header = Header::decode(&raw_header)?;
    if header.layout() != layout {
        return Err(StegoError::NoMessage);
    }

    let (width, height) = pixels.dimensions();
    if header.payload_length() > available_capacity(width, height) {
        return Err(StegoError::NoMessage);
    }
    let len = usize::try_from(header.payload_length()).map_err(|_| StegoError::NoMessage)?;

    let mut payload = vec![0u8; len];
    decoder
        .read_exact(&mut payload)
        .map_err(|_| StegoError::NoMessage)?;
    if !header.verify_payload(&payload) {
        return Err(StegoError::NoMessage);
    }

    let text = String::from_utf8(payload).map_err(|_| StegoError::NoMessage)?;

    Ok(Message::new(text, header.message_type().into()))
}
