/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image type and file level entry points
//!
//! This crate ties the png codec to a single [`Image`](image::Image)
//! type holding validated RGBA pixels.
//!
//! Image operations live in `alphakey-imageprocs` and implement
//! [`OperationsTrait`](traits::OperationsTrait).
//!
//! # Example
//! ```no_run
//! use alphakey_image::{decode, encode};
//!
//! let image = decode("in.png").unwrap();
//! encode("out.png", &image).unwrap();
//! ```
use std::path::Path;

use crate::errors::ImageErrors;
use crate::image::Image;

pub mod codecs;
pub mod errors;
pub mod image;
pub mod metadata;
mod serde;
pub mod traits;

pub use codecs::{probe, probe_bytes};

/// Decode the png file at `path` into an RGBA image
pub fn decode<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
    Image::open(path)
}

/// Encode `image` as an RGBA png and write it to `path`
pub fn encode<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), ImageErrors> {
    image.save(path)
}
