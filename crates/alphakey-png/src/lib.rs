/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A small png decoder and encoder
//!
//! The decoder handles 8 bit, non-interlaced RGB and RGBA images and
//! always hands out RGBA pixels, other layouts are rejected with
//! [`PngDecodeErrors::Unsupported`]. Only IHDR, IDAT and IEND chunks
//! are interpreted, everything else is skipped.
//!
//! The encoder writes 8 bit RGBA with no scanline filtering and a
//! single IDAT chunk.
//!
//! # Decoding
//! ```no_run
//! use alphakey_png::PngDecoder;
//! let data = std::fs::read("sprite.png").unwrap();
//! let mut decoder = PngDecoder::new(&data);
//! let pixels = decoder.decode().unwrap();
//! ```
//!
//! # Encoding
//! ```
//! use alphakey_core::colorspace::ColorSpace;
//! use alphakey_core::options::EncoderOptions;
//! use alphakey_png::PngEncoder;
//!
//! let pixels = [255_u8; 2 * 2 * 4];
//! let options = EncoderOptions::new(2, 2, ColorSpace::RGBA);
//! let encoded = PngEncoder::new(&pixels, options).encode().unwrap();
//! assert_eq!(&encoded[1..4], b"PNG");
//! ```
//!
//! # Chunk checksums
//! Chunk crcs are not checked by default, set
//! [`DecoderOptions::set_confirm_crc`](alphakey_core::options::DecoderOptions::set_confirm_crc)
//! to reject files whose crcs do not match.
pub use alphakey_core;
pub use decoder::{PngDecoder, PngInfo};
pub use encoder::PngEncoder;
pub use enums::{FilterMethod, InterlaceMethod, PngColor};
pub use error::{PngDecodeErrors, PngEncodeErrors};
pub use filters::unfilter_scanlines;
pub use utils::expand_rgb_to_rgba;

mod constants;
mod crc;
mod decoder;
mod encoder;
mod enums;
pub mod error;
mod filters;
mod headers;
mod utils;
