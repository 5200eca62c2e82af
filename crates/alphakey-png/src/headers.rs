/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alphakey_core::bytestream::ByteReader;
use log::{info, warn};

use crate::constants::IHDR_LENGTH;
use crate::decoder::PngChunk;
use crate::enums::{InterlaceMethod, PngColor};
use crate::error::PngDecodeErrors;
use crate::PngDecoder;

pub(crate) mod writers;

impl<'a> PngDecoder<'a> {
    pub(crate) fn parse_ihdr(&mut self, chunk: PngChunk<'a>) -> Result<(), PngDecodeErrors> {
        if self.seen_hdr {
            warn!("Multiple IHDR chunks, keeping the first one");
            return Ok(());
        }

        if chunk.length != IHDR_LENGTH || chunk.data.len() != IHDR_LENGTH {
            return Err(PngDecodeErrors::BadHeaderLength(chunk.data.len()));
        }

        let mut stream = ByteReader::new(chunk.data);

        self.png_info.width = stream.get_u32_be() as usize;
        self.png_info.height = stream.get_u32_be() as usize;
        self.png_info.depth = stream.get_u8();
        self.png_info.color_type = stream.get_u8();
        self.png_info.compression_method = stream.get_u8();
        self.png_info.filter_method = stream.get_u8();
        self.png_info.interlace_method = stream.get_u8();

        info!("Width: {}", self.png_info.width);
        info!("Height: {}", self.png_info.height);
        info!("Depth: {}", self.png_info.depth);
        info!("Color type: {:?}", self.png_info.color());
        info!("Interlace: {:?}", self.png_info.interlace());

        self.seen_hdr = true;

        Ok(())
    }

    /// Check the header describes something this decoder can
    /// turn into pixels.
    ///
    /// Fields are checked in the order compression, filter, interlace,
    /// depth then color, the first offender is reported
    pub(crate) fn confirm_supported(&self) -> Result<(), PngDecodeErrors> {
        let info = &self.png_info;

        if info.compression_method != 0 {
            return Err(PngDecodeErrors::Unsupported {
                field: "compression method",
                value: info.compression_method
            });
        }
        if info.filter_method != 0 {
            return Err(PngDecodeErrors::Unsupported {
                field: "filter method",
                value: info.filter_method
            });
        }
        if info.interlace() != InterlaceMethod::Standard {
            return Err(PngDecodeErrors::Unsupported {
                field: "interlace method",
                value: info.interlace_method
            });
        }
        if info.depth != 8 {
            return Err(PngDecodeErrors::Unsupported {
                field: "bit depth",
                value: info.depth
            });
        }
        if !matches!(info.color(), PngColor::RGB | PngColor::RGBA) {
            return Err(PngDecodeErrors::Unsupported {
                field: "color type",
                value: info.color_type
            });
        }
        if info.width == 0 || info.height == 0 {
            return Err(PngDecodeErrors::ZeroDimensions);
        }
        if info.width > self.options.get_max_width() || info.height > self.options.get_max_height()
        {
            return Err(PngDecodeErrors::TooLarge {
                width:      info.width,
                height:     info.height,
                max_width:  self.options.get_max_width(),
                max_height: self.options.get_max_height()
            });
        }
        Ok(())
    }
}
