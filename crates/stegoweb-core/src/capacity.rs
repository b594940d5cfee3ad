//! How many bytes an image of a given geometry can carry.
//!
//! Every pixel offers its red, green and blue channel bytes as embedding sites,
//! one payload bit each. The alpha channel is only used when transparency is
//! allowed, so it never counts towards the capacity.

use crate::header::HEADER_SIZE;

/// Sites per pixel that count towards the capacity.
const SITES_PER_PIXEL: u128 = 3;

/// Theoretical maximum of embeddable bytes, header included.
pub fn max_capacity(width: u32, height: u32) -> u64 {
    let bits = width as u128 * height as u128 * SITES_PER_PIXEL;
    u64::try_from(bits / 8).unwrap_or(u64::MAX)
}

/// Bytes left for the message once the header is accounted for, zero if not even the header fits.
pub fn available_capacity(width: u32, height: u32) -> u64 {
    max_capacity(width, height).saturating_sub(HEADER_SIZE as u64)
}

/// Capacity figures of one image geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub width: u32,
    pub height: u32,
    pub max: u64,
    pub available: u64,
}

impl Capacity {
    pub fn of(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            max: max_capacity(width, height),
            available: available_capacity(width, height),
        }
    }

    /// true if a message of `len` bytes fits together with its header
    pub fn fits(&self, len: u64) -> bool {
        len.checked_add(HEADER_SIZE as u64)
            .is_some_and(|total| total <= self.max)
    }
}
