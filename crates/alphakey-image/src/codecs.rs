/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing png files
//!
//! Decoded images are always RGBA, RGB files get an opaque alpha
//! channel. Encoded files are always 8 bit RGBA.
use std::fs;
use std::path::Path;

use alphakey_core::colorspace::ColorSpace;
use alphakey_core::options::{DecoderOptions, EncoderOptions};
use alphakey_png::{PngDecodeErrors, PngDecoder, PngEncoder};
use log::{info, trace};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageInfo;

impl Image {
    /// Decode png bytes held in memory
    pub fn read(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        let mut decoder = PngDecoder::new_with_options(data, options);
        let pixels = decoder.decode()?;

        let (width, height) = decoder
            .get_dimensions()
            .ok_or(PngDecodeErrors::MissingHeader)?;

        Image::new(pixels, width, height)
    }

    /// Open and decode the png at `path` with default options
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
        Self::open_with_options(path, DecoderOptions::default())
    }

    /// Open and decode the png at `path`
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let path = path.as_ref();
        let data = fs::read(path)?;

        trace!("Read {} bytes from {}", data.len(), path.display());

        Self::read(&data, options)
    }

    /// Encode the image to png bytes
    pub fn write_to_vec(&self) -> Result<Vec<u8>, ImageErrors> {
        let options = EncoderOptions::new(self.width(), self.height(), ColorSpace::RGBA);

        self.write_to_vec_with_options(options)
    }

    /// Encode the image with the compression level from `options`,
    /// dimensions and colorspace are taken from the image
    pub fn write_to_vec_with_options(
        &self, options: EncoderOptions
    ) -> Result<Vec<u8>, ImageErrors> {
        let options = options
            .set_width(self.width())
            .set_height(self.height())
            .set_colorspace(self.colorspace());

        Ok(PngEncoder::new(self.pixels(), options).encode()?)
    }

    /// Encode the image and write it to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();
        let data = self.write_to_vec()?;

        fs::write(path, &data)?;
        info!("Wrote {} bytes to {}", data.len(), path.display());

        Ok(())
    }
}

/// Read the header of a png held in memory without inflating pixels
pub fn probe_bytes(data: &[u8]) -> Result<ImageInfo, ImageErrors> {
    let mut decoder = PngDecoder::new(data);
    decoder.decode_headers()?;

    let info = decoder.get_info().ok_or(PngDecodeErrors::MissingHeader)?;

    Ok(ImageInfo::from(info))
}

/// Read the header of the png at `path`
pub fn probe<P: AsRef<Path>>(path: P) -> Result<ImageInfo, ImageErrors> {
    let data = fs::read(path)?;
    probe_bytes(&data)
}
