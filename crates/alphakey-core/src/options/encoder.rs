/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::colorspace::ColorSpace;

/// Options shared by the encoders
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    width:       usize,
    height:      usize,
    colorspace:  ColorSpace,
    compression: u8
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:       0,
            height:      0,
            colorspace:  ColorSpace::RGBA,
            compression: 6
        }
    }
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`: Colorspace of the pixels handed to the encoder
    ///
    /// returns: EncoderOptions
    pub fn new(width: usize, height: usize, colorspace: ColorSpace) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace,
            ..Default::default()
        }
    }
    /// Get the width for which the image will be encoded in
    pub const fn get_width(&self) -> usize {
        self.width
    }
    /// Get height for which the image will be encoded in
    pub const fn get_height(&self) -> usize {
        self.height
    }
    /// Get the colorspace for which the image will be encoded in
    pub const fn get_colorspace(&self) -> ColorSpace {
        self.colorspace
    }
    /// Get the deflate compression level, 0 (store) to 9 (smallest)
    pub const fn get_compression(&self) -> u8 {
        self.compression
    }

    /// Set width for the image to be encoded
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set height for the image to be encoded
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the colorspace of the pixels handed to the encoder
    pub fn set_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }

    /// Set the deflate compression level
    ///
    /// Levels above 9 are clamped to 9
    pub fn set_compression(mut self, level: u8) -> Self {
        self.compression = level.min(9);
        self
    }
}

#[test]
fn test_compression_is_clamped() {
    let options = EncoderOptions::new(4, 4, ColorSpace::RGBA).set_compression(42);

    assert_eq!(options.get_compression(), 9);
    assert_eq!(options.get_width(), 4);
}
