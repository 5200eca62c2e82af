/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use alphakey_core::bytestream::ByteWriter;
use alphakey_core::colorspace::ColorSpace;
use alphakey_core::options::EncoderOptions;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::trace;

use crate::constants::PNG_SIGNATURE;
use crate::enums::FilterMethod;
use crate::error::PngEncodeErrors;
use crate::headers::writers::{write_header_fn, write_idat, write_iend, write_ihdr};

/// A png encoder
///
/// Output is always an 8 bit RGBA png with filter type zero on
/// every scanline and all image data in a single IDAT chunk.
/// Input pixels must be RGBA.
pub struct PngEncoder<'a> {
    pub(crate) options:         EncoderOptions,
    pub(crate) data:            &'a [u8],
    pub(crate) filter_scanline: Vec<u8>,
    pub(crate) encoded_chunks:  Vec<u8>
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder for `data` laid out as described by `options`
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PngEncoder<'a> {
        PngEncoder {
            options,
            data,
            filter_scanline: Vec::new(),
            encoded_chunks: Vec::new()
        }
    }

    fn validate(&self) -> Result<(), PngEncodeErrors> {
        let width = self.options.get_width();
        let height = self.options.get_height();
        let colorspace = self.options.get_colorspace();

        if colorspace != ColorSpace::RGBA {
            return Err(PngEncodeErrors::UnsupportedColorspace(colorspace));
        }
        if width == 0 || height == 0 || width > u32::MAX as usize || height > u32::MAX as usize {
            return Err(PngEncodeErrors::BadDimensions(width, height));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()))
            .ok_or(PngEncodeErrors::BadDimensions(width, height))?;

        if self.data.len() != expected {
            return Err(PngEncodeErrors::DimensionsMisMatch {
                expected,
                found: self.data.len()
            });
        }
        Ok(())
    }

    /// Lay out rows as a zero filter byte followed by the raw RGBA row
    fn add_filters(&mut self) {
        let width_stride = self.options.get_width() * 4;

        self.filter_scanline = Vec::with_capacity((width_stride + 1) * self.options.get_height());

        for row in self.data.chunks_exact(width_stride) {
            self.filter_scanline.push(FilterMethod::None.to_int());
            self.filter_scanline.extend_from_slice(row);
        }
    }

    fn compress(&mut self) -> Result<(), PngEncodeErrors> {
        let level = Compression::new(u32::from(self.options.get_compression()));
        let mut encoder = ZlibEncoder::new(Vec::new(), level);

        encoder.write_all(&self.filter_scanline)?;
        self.encoded_chunks = encoder.finish()?;

        trace!(
            "Compressed {} scanline bytes into {}",
            self.filter_scanline.len(),
            self.encoded_chunks.len()
        );
        Ok(())
    }

    /// Encode the image, returning the bytes of a complete png file
    pub fn encode(&mut self) -> Result<Vec<u8>, PngEncodeErrors> {
        self.validate()?;
        self.add_filters();
        self.compress()?;

        let mut out = Vec::with_capacity(self.encoded_chunks.len() + 57);
        let mut writer = ByteWriter::new(&mut out);

        writer.write_u64_be(PNG_SIGNATURE);
        write_header_fn(self, &mut writer, b"IHDR", write_ihdr);
        write_header_fn(self, &mut writer, b"IDAT", write_idat);
        write_header_fn(self, &mut writer, b"IEND", write_iend);

        trace!("Wrote {} bytes", writer.bytes_written());

        Ok(out)
    }
}
