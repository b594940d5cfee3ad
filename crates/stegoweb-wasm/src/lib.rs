//! WebAssembly binding of the stegoweb engine.
//!
//! Pixel data crosses the boundary as RGBA8 bytes, row by row, like an
//! `ImageData` of a canvas provides it.

use stegoweb_core::{CodecOptions, Key, Message, PixelBuffer, StegoError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Maximum bytes an image of `width` x `height` can carry, header included
#[wasm_bindgen]
pub fn get_max_capacity(width: u32, height: u32) -> f64 {
    stegoweb_core::max_capacity(width, height) as f64
}

/// Bytes left for the message text
#[wasm_bindgen]
pub fn get_capacity(width: u32, height: u32) -> f64 {
    stegoweb_core::available_capacity(width, height) as f64
}

/// A cryptographically strong random number
#[wasm_bindgen]
pub fn random_u32() -> Result<u32, JsValue> {
    stegoweb_core::random_u32().map_err(to_js)
}

#[wasm_bindgen]
pub struct ReadResult {
    message: String,
    message_type: u32,
}

#[wasm_bindgen]
impl ReadResult {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    #[wasm_bindgen(getter = type)]
    pub fn message_type(&self) -> u32 {
        self.message_type
    }
}

/// Unveils the message hidden in the RGBA pixels `data`
#[wasm_bindgen]
pub fn read_pixels(data: Vec<u8>, width: u32, height: u32, key: &str) -> Result<ReadResult, JsValue> {
    read(data, width, height, key).map_err(to_js)
}

/// Hides `message` in the RGBA pixels `data` and returns the modified pixels
#[wasm_bindgen]
pub fn write_pixels(
    data: Vec<u8>,
    width: u32,
    height: u32,
    message: &str,
    key: &str,
    message_type: u32,
    transparency: bool,
) -> Result<Vec<u8>, JsValue> {
    write(data, width, height, message, key, message_type, transparency).map_err(to_js)
}

/// Encodes RGBA pixels as PNG file
#[wasm_bindgen]
pub fn encode_png(data: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    PixelBuffer::new(width, height, data)
        .and_then(|pixels| pixels.to_png_bytes())
        .map_err(to_js)
}

fn read(data: Vec<u8>, width: u32, height: u32, key: &str) -> stegoweb_core::Result<ReadResult> {
    let pixels = PixelBuffer::new(width, height, data)?;
    let message = stegoweb_core::unveil(&pixels, &Key::from(key), &CodecOptions::default())?;

    Ok(ReadResult {
        message_type: message.kind.into(),
        message: message.text,
    })
}

fn write(
    data: Vec<u8>,
    width: u32,
    height: u32,
    message: &str,
    key: &str,
    message_type: u32,
    transparency: bool,
) -> stegoweb_core::Result<Vec<u8>> {
    let mut pixels = PixelBuffer::new(width, height, data)?;
    let opts = CodecOptions::default().with_transparency(transparency);
    let message = Message::new(message, message_type.into());
    stegoweb_core::hide_in_place(&mut pixels, &Key::from(key), &message, &opts)?;

    Ok(pixels.into_raw())
}

fn to_js(e: StegoError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
