use std::io::{Result, Write};

use bitstream_io::{BitRead, BitReader, LittleEndian};

use crate::media::{ChannelLayout, PixelBuffer};
use crate::permutation::Positions;

/// Scatters the bits of everything written into the least significant bits of the
/// channel bytes picked by `positions`.
///
/// Bits are taken least significant first from each byte. Once the positions are
/// exhausted `write` returns `Ok(0)`, which `write_all` reports as `WriteZero`.
pub struct LsbEncoder<'i> {
    carrier: &'i mut [u8],
    layout: ChannelLayout,
    positions: Positions,
}

impl<'i> LsbEncoder<'i> {
    pub fn new(carrier: &'i mut PixelBuffer, layout: ChannelLayout, positions: Positions) -> Self {
        Self {
            carrier: carrier.as_raw_mut(),
            layout,
            positions,
        }
    }

    fn next_channel(&mut self) -> Option<&mut u8> {
        let site = self.positions.next()?;
        let offset = usize::try_from(self.layout.byte_offset(site)).ok()?;
        self.carrier.get_mut(offset)
    }
}

impl Write for LsbEncoder<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bits = BitReader::endian(buf, LittleEndian);
        let mut written = 0;

        for _ in 0..buf.len() {
            for _ in 0..8 {
                let bit = bits.read_bit()?;
                let Some(channel) = self.next_channel() else {
                    return Ok(written);
                };
                *channel = (*channel & (u8::MAX - 1)) | u8::from(bit);
            }
            written += 1;
        }

        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::{BitPositionGenerator, LinearPositions};

    #[test]
    fn should_write_bits_lsb_first_in_site_order() {
        let mut pixels = PixelBuffer::filled(4, 1, [0xF0; 4]).unwrap();
        let positions = LinearPositions.positions(&"".into(), pixels.site_count(ChannelLayout::Rgba));
        {
            let mut encoder = LsbEncoder::new(&mut pixels, ChannelLayout::Rgba, positions);
            encoder.write_all(&[0b0100_1001]).unwrap();
        }

        let lsbs: Vec<u8> = pixels.as_raw()[..8].iter().map(|b| b & 1).collect();
        assert_eq!(lsbs, vec![1, 0, 0, 1, 0, 0, 1, 0]);
        assert!(pixels.as_raw().iter().all(|b| b & 0xFE == 0xF0));
    }

    #[test]
    fn should_skip_alpha_for_rgb_layout() {
        let mut pixels = PixelBuffer::filled(3, 1, [0; 4]).unwrap();
        let positions = LinearPositions.positions(&"".into(), pixels.site_count(ChannelLayout::Rgb));
        {
            let mut encoder = LsbEncoder::new(&mut pixels, ChannelLayout::Rgb, positions);
            encoder.write_all(&[0xFF]).unwrap();
        }

        assert_eq!(pixels.as_raw(), &[1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn should_report_write_zero_when_out_of_sites() {
        let mut pixels = PixelBuffer::filled(1, 1, [0; 4]).unwrap();
        let positions = LinearPositions.positions(&"".into(), pixels.site_count(ChannelLayout::Rgba));
        let mut encoder = LsbEncoder::new(&mut pixels, ChannelLayout::Rgba, positions);

        let error = encoder.write_all(b"x").unwrap_err();
        assert_eq!(error.kind(), std::io::ErrorKind::WriteZero);
    }
}
