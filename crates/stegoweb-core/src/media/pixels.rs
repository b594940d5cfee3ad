use std::fmt::{self, Debug, Formatter};

use crate::error::StegoError;
use crate::result::Result;

/// Bytes per pixel, interleaved as red, green, blue, alpha
pub const CHANNELS: usize = 4;
/// Index of the alpha byte inside a pixel
pub const ALPHA_CHANNEL: usize = 3;
/// Alpha value of a fully opaque pixel
pub const OPAQUE: u8 = u8::MAX;

/// Decides which channel bytes of a pixel are embedding sites.
///
/// The layout is part of the header, so a reader can tell which one the writer used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelLayout {
    /// red, green and blue carry bits, alpha is left alone
    Rgb = 0,
    /// all four channels carry bits
    Rgba = 1,
}

impl ChannelLayout {
    /// The order in which a reader probes the layouts.
    pub const PROBE_ORDER: [ChannelLayout; 2] = [ChannelLayout::Rgba, ChannelLayout::Rgb];

    /// Alpha is an embedding site only when transparency is allowed.
    pub fn for_transparency(transparency: bool) -> Self {
        if transparency {
            ChannelLayout::Rgba
        } else {
            ChannelLayout::Rgb
        }
    }

    /// number of embedding sites per pixel
    pub const fn sites_per_pixel(self) -> u64 {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// maps the n-th embedding site onto its byte offset in an interleaved RGBA buffer
    pub const fn byte_offset(self, site: u64) -> u64 {
        match self {
            ChannelLayout::Rgb => (site / 3) * CHANNELS as u64 + site % 3,
            ChannelLayout::Rgba => site,
        }
    }
}

impl From<ChannelLayout> for u8 {
    fn from(layout: ChannelLayout) -> Self {
        layout as u8
    }
}

impl TryFrom<u8> for ChannelLayout {
    type Error = StegoError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ChannelLayout::Rgb),
            1 => Ok(ChannelLayout::Rgba),
            _ => Err(StegoError::NoMessage),
        }
    }
}

/// Raw RGBA pixels of one image, row-major from top to bottom.
///
/// The length of the data always equals `width * height * 4`, this is checked on construction.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) data: Vec<u8>,
}

impl PixelBuffer {
    /// wraps the raw RGBA bytes of an image with the given dimensions
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        match expected_len(width, height) {
            Some(len) if len == data.len() => Ok(Self {
                width,
                height,
                data,
            }),
            _ => Err(StegoError::InvalidPixelBuffer {
                expected: (width as u64)
                    .saturating_mul(height as u64)
                    .saturating_mul(CHANNELS as u64),
                actual: data.len() as u64,
            }),
        }
    }

    /// an image where every pixel has the same color
    pub fn filled(width: u32, height: u32, rgba: [u8; CHANNELS]) -> Result<Self> {
        let pixels = expected_len(width, height).ok_or(StegoError::InvalidPixelBuffer {
            expected: u64::MAX,
            actual: 0,
        })? / CHANNELS;

        Self::new(width, height, rgba.repeat(pixels))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel_count(&self) -> u64 {
        (self.data.len() / CHANNELS) as u64
    }

    /// number of bytes that can carry a bit under the given layout
    pub fn site_count(&self, layout: ChannelLayout) -> u64 {
        self.pixel_count() * layout.sites_per_pixel()
    }

    /// the alpha values of all pixels in buffer order
    pub fn alpha(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.chunks_exact(CHANNELS).map(|p| p[ALPHA_CHANNEL])
    }

    /// sets every alpha byte to fully opaque
    pub fn force_opaque(&mut self) {
        self.data
            .chunks_exact_mut(CHANNELS)
            .for_each(|p| p[ALPHA_CHANNEL] = OPAQUE);
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn expected_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_buffers_that_do_not_match_the_dimensions() {
        let result = PixelBuffer::new(2, 2, vec![0; 15]);
        match result {
            Err(StegoError::InvalidPixelBuffer {
                expected: 16,
                actual: 15,
            }) => (),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
        assert!(PixelBuffer::new(0, 0, vec![]).is_ok());
    }

    #[test]
    fn should_map_rgb_sites_around_the_alpha_channel() {
        let offsets: Vec<u64> = (0..7).map(|s| ChannelLayout::Rgb.byte_offset(s)).collect();
        assert_eq!(offsets, vec![0, 1, 2, 4, 5, 6, 8]);

        let offsets: Vec<u64> = (0..5).map(|s| ChannelLayout::Rgba.byte_offset(s)).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn should_never_map_an_rgb_site_onto_alpha() {
        for site in 0..300 {
            let offset = ChannelLayout::Rgb.byte_offset(site) as usize;
            assert_ne!(offset % CHANNELS, ALPHA_CHANNEL, "site {site} hit alpha");
            assert!(offset < 100 * CHANNELS);
        }
    }

    #[test]
    fn should_count_sites_per_layout() {
        let pixels = PixelBuffer::filled(5, 3, [0; 4]).unwrap();
        assert_eq!(pixels.pixel_count(), 15);
        assert_eq!(pixels.site_count(ChannelLayout::Rgb), 45);
        assert_eq!(pixels.site_count(ChannelLayout::Rgba), 60);
    }

    #[test]
    fn should_force_every_alpha_byte_opaque() {
        let mut pixels = PixelBuffer::filled(3, 3, [10, 20, 30, 0]).unwrap();
        pixels.force_opaque();
        assert!(pixels.alpha().all(|a| a == OPAQUE));
        assert_eq!(&pixels.as_raw()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn should_convert_layouts_from_and_to_bytes() {
        for layout in ChannelLayout::PROBE_ORDER {
            assert_eq!(ChannelLayout::try_from(u8::from(layout)).unwrap(), layout);
        }
        assert!(ChannelLayout::try_from(2).is_err());
    }

    #[test]
    fn should_not_dump_pixels_in_debug_output() {
        let pixels = PixelBuffer::filled(2, 1, [1; 4]).unwrap();
        assert_eq!(
            format!("{pixels:?}"),
            "PixelBuffer { width: 2, height: 1, bytes: 8 }"
        );
    }
}
