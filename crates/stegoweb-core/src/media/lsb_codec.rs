use std::io::{Read, Write};

use super::decoder::LsbDecoder;
use super::encoder::LsbEncoder;
use super::{ChannelLayout, CodecOptions, PixelBuffer};
use crate::key::Key;
use crate::permutation::BitPositionGenerator;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a keyed LSB decoder that implements Read
    pub fn decoder<'i>(
        input: &'i PixelBuffer,
        key: &Key,
        layout: ChannelLayout,
        opts: &CodecOptions,
    ) -> Box<dyn Read + 'i> {
        let positions = opts.positions.positions(key, input.site_count(layout));
        Box::new(LsbDecoder::new(input, layout, positions))
    }

    /// builds a keyed LSB encoder that implements Write
    pub fn encoder<'i>(
        carrier: &'i mut PixelBuffer,
        key: &Key,
        layout: ChannelLayout,
        opts: &CodecOptions,
    ) -> Box<dyn Write + 'i> {
        let positions = opts.positions.positions(key, carrier.site_count(layout));
        Box::new(LsbEncoder::new(carrier, layout, positions))
    }
}
