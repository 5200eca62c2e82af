/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Header information read without decoding pixels
use alphakey_png::PngInfo;

/// The seven IHDR fields of a png, as found in the file
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ImageInfo {
    pub width:              usize,
    pub height:             usize,
    pub depth:              u8,
    pub color_type:         u8,
    pub compression_method: u8,
    pub filter_method:      u8,
    pub interlace_method:   u8
}

impl From<&PngInfo> for ImageInfo {
    fn from(info: &PngInfo) -> Self {
        ImageInfo {
            width:              info.width,
            height:             info.height,
            depth:              info.depth,
            color_type:         info.color_type,
            compression_method: info.compression_method,
            filter_method:      info.filter_method,
            interlace_method:   info.interlace_method
        }
    }
}
