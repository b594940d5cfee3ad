use std::io::{Read, Result};

use bitstream_io::{BitWrite, BitWriter, LittleEndian};

use crate::media::{ChannelLayout, PixelBuffer};
use crate::permutation::Positions;

/// Gathers the least significant bits of the channel bytes picked by `positions`
/// back into bytes, the counterpart of [`super::encoder::LsbEncoder`].
///
/// Only whole bytes are returned, `read` yields `Ok(0)` once fewer than 8 sites remain.
pub struct LsbDecoder<'i> {
    input: &'i [u8],
    layout: ChannelLayout,
    positions: Positions,
}

impl<'i> LsbDecoder<'i> {
    pub fn new(input: &'i PixelBuffer, layout: ChannelLayout, positions: Positions) -> Self {
        Self {
            input: input.as_raw(),
            layout,
            positions,
        }
    }

    fn next_bit(&mut self) -> Option<bool> {
        let site = self.positions.next()?;
        let offset = usize::try_from(self.layout.byte_offset(site)).ok()?;
        self.input.get(offset).map(|channel| channel & 1 == 1)
    }

    fn next_byte_bits(&mut self) -> Option<[bool; 8]> {
        let mut bits = [false; 8];
        for bit in bits.iter_mut() {
            *bit = self.next_bit()?;
        }
        Some(bits)
    }
}

impl Read for LsbDecoder<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut bit_buffer = BitWriter::endian(Vec::with_capacity(buf.len()), LittleEndian);
        let mut bytes_read = 0;

        while bytes_read < buf.len() {
            let Some(bits) = self.next_byte_bits() else {
                break;
            };
            for bit in bits {
                bit_buffer.write_bit(bit)?;
            }
            bytes_read += 1;
        }

        let gathered = bit_buffer.into_writer();
        buf[..bytes_read].copy_from_slice(&gathered[..bytes_read]);

        Ok(bytes_read)
    }
}
