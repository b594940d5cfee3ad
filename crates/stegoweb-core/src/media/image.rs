//! Bridges `PixelBuffer` and the `image` crate.
//!
//! Any format the `image` crate decodes is accepted as carrier, the result is always PNG:
//! lossy formats would wipe out the hidden bits.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use log::error;

use super::{PixelBuffer, CHANNELS};
use crate::error::StegoError;
use crate::result::Result;

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        // `RgbaImage` holds at least `width * height * 4` bytes, a raw container may hold more
        let mut data = img.into_raw();
        data.truncate(width as usize * height as usize * CHANNELS);

        Self {
            width,
            height,
            data,
        }
    }
}

impl PixelBuffer {
    /// loads an image file and converts it to RGBA8
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| {
            error!("Error opening image {path:?}: {e}");
            StegoError::InvalidImageMedia
        })?;

        Ok(img.to_rgba8().into())
    }

    /// decodes an encoded image, e.g. the bytes of a PNG file
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| {
            error!("Error decoding image: {e}");
            StegoError::InvalidImageMedia
        })?;

        Ok(img.to_rgba8().into())
    }

    pub fn into_image(self) -> Result<RgbaImage> {
        let (width, height) = self.dimensions();
        RgbaImage::from_raw(width, height, self.into_raw()).ok_or(StegoError::ImageEncodingError)
    }

    pub fn save_png(&self, file: impl AsRef<Path>) -> Result<()> {
        let file = file.as_ref();
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.write_png(&mut writer)?;
        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_png(&mut buf)?;
        Ok(buf)
    }

    fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        let (width, height) = self.dimensions();
        PngEncoder::new(writer)
            .write_image(self.as_raw(), width, height, ColorType::Rgba8)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })
    }
}
