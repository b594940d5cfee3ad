pub mod codec_options;
pub mod decoder;
pub mod encoder;
pub mod image;
pub mod lsb_codec;
mod pixels;

pub use codec_options::CodecOptions;
pub use lsb_codec::LsbCodec;
pub use pixels::*;
