/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alphakey_core::bytestream::ByteReader;
use alphakey_core::colorspace::ColorSpace;
use alphakey_core::options::DecoderOptions;
use log::{trace, warn};
use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::constants::PNG_SIGNATURE;
use crate::crc::calc_chunk_crc;
use crate::enums::{InterlaceMethod, PngChunkType, PngColor};
use crate::error::PngDecodeErrors;
use crate::filters::unfilter_scanlines;
use crate::utils::expand_rgb_to_rgba;

/// Inflated bytes tolerated past the last scanline
const INFLATE_SLACK: usize = 1 << 16;

/// Output limit for the inflater given the exact scanline size
///
/// Sized from the header so images that pass the dimension limits
/// are never cut short by the inflater's own default cap
pub(crate) const fn inflate_limit(size_hint: usize) -> usize {
    size_hint.saturating_add(INFLATE_SLACK)
}

/// A single chunk as found in the stream
///
/// `data` borrows from the input, it may be shorter than `length`
/// when the file ends early, and `crc` is missing in that case too.
#[derive(Copy, Clone)]
pub(crate) struct PngChunk<'a> {
    pub length:     usize,
    pub chunk_type: PngChunkType,
    pub chunk:      [u8; 4],
    pub data:       &'a [u8],
    pub crc:        Option<u32>
}

/// Fields of the IHDR chunk, as stored in the file
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct PngInfo {
    pub width:              usize,
    pub height:             usize,
    pub depth:              u8,
    pub color_type:         u8,
    pub compression_method: u8,
    pub filter_method:      u8,
    pub interlace_method:   u8
}

impl PngInfo {
    pub fn color(&self) -> PngColor {
        PngColor::from_int(self.color_type)
    }
    pub fn interlace(&self) -> InterlaceMethod {
        InterlaceMethod::from_int(self.interlace_method)
    }
}

/// A png decoder
///
/// Only 8 bit, non-interlaced RGB and RGBA images are decoded,
/// everything else is reported as unsupported.
///
/// # Example
/// ```no_run
/// use alphakey_png::PngDecoder;
/// let data = std::fs::read("sprite.png").unwrap();
/// let mut decoder = PngDecoder::new(&data);
/// let pixels = decoder.decode().unwrap();
/// let (width, height) = decoder.get_dimensions().unwrap();
/// assert_eq!(pixels.len(), width * height * 4);
/// ```
pub struct PngDecoder<'a> {
    pub(crate) stream:      ByteReader<'a>,
    pub(crate) options:     DecoderOptions,
    pub(crate) png_info:    PngInfo,
    pub(crate) idat_chunks: Vec<u8>,
    pub(crate) seen_sig:    bool,
    pub(crate) seen_hdr:    bool,
    pub(crate) seen_end:    bool
}

impl<'a> PngDecoder<'a> {
    pub fn new(data: &'a [u8]) -> PngDecoder<'a> {
        PngDecoder::new_with_options(data, DecoderOptions::default())
    }
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> PngDecoder<'a> {
        PngDecoder {
            stream: ByteReader::new(data),
            options,
            png_info: PngInfo::default(),
            idat_chunks: Vec::new(),
            seen_sig: false,
            seen_hdr: false,
            seen_end: false
        }
    }

    /// Return header information, or `None` if the headers
    /// haven't been decoded yet
    pub const fn get_info(&self) -> Option<&PngInfo> {
        if !self.seen_hdr {
            return None;
        }
        Some(&self.png_info)
    }

    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if !self.seen_hdr {
            return None;
        }
        Some((self.png_info.width, self.png_info.height))
    }

    /// Colorspace of the stored pixels, `None` before headers are
    /// decoded or when the color type isn't one we can decode
    pub fn get_colorspace(&self) -> Option<ColorSpace> {
        if !self.seen_hdr {
            return None;
        }
        match self.png_info.color() {
            PngColor::RGB => Some(ColorSpace::RGB),
            PngColor::RGBA => Some(ColorSpace::RGBA),
            _ => None
        }
    }

    fn read_signature(&mut self) -> Result<(), PngDecodeErrors> {
        if self.seen_sig {
            return Ok(());
        }
        match self.stream.get_u64_be_err() {
            Ok(PNG_SIGNATURE) => {
                self.seen_sig = true;
                Ok(())
            }
            _ => Err(PngDecodeErrors::BadSignature)
        }
    }

    /// Read the next chunk, returns `None` when fewer bytes than
    /// a length and a type remain
    fn read_chunk(&mut self) -> Result<Option<PngChunk<'a>>, PngDecodeErrors> {
        // length - chunk type - [data] - crc
        if !self.stream.has(8) {
            if !self.stream.eof() {
                warn!(
                    "{} trailing bytes too short for a chunk, ignoring",
                    self.stream.remaining()
                );
            }
            return Ok(None);
        }
        let length = self.stream.get_u32_be() as usize;
        let chunk = self.stream.get_fixed_bytes_or_err::<4>()?;
        let chunk_type = PngChunkType::from_bytes(&chunk);

        let data = match self.stream.get_slice(length) {
            Ok(data) => data,
            Err(_) => {
                let found = self.stream.remaining();

                if self.options.get_confirm_crc() {
                    return Err(PngDecodeErrors::TruncatedChunk {
                        chunk,
                        expected: length,
                        found
                    });
                }
                warn!(
                    "Chunk {} declares {length} bytes but only {found} remain, truncating",
                    String::from_utf8_lossy(&chunk)
                );
                self.stream.get_remaining()
            }
        };
        let crc = self.stream.get_u32_be_err().ok();

        if self.options.get_confirm_crc() {
            let calculated = calc_chunk_crc(&chunk, data);

            match crc {
                Some(stored) if stored == calculated => (),
                Some(stored) => {
                    return Err(PngDecodeErrors::BadCrc {
                        chunk,
                        expected: stored,
                        found: calculated
                    });
                }
                None => {
                    return Err(PngDecodeErrors::TruncatedChunk {
                        chunk,
                        expected: 4,
                        found: self.stream.remaining()
                    });
                }
            }
        }

        Ok(Some(PngChunk {
            length,
            chunk_type,
            chunk,
            data,
            crc
        }))
    }

    /// Walk chunks until IEND or the end of the stream, stopping
    /// early after IHDR when `stop_at_header` is set
    fn read_chunks(&mut self, stop_at_header: bool) -> Result<(), PngDecodeErrors> {
        self.read_signature()?;

        while !self.seen_end {
            let chunk = match self.read_chunk()? {
                Some(chunk) => chunk,
                None => break
            };

            match chunk.chunk_type {
                PngChunkType::IHDR => {
                    self.parse_ihdr(chunk)?;

                    if stop_at_header {
                        return Ok(());
                    }
                }
                PngChunkType::IDAT => {
                    trace!("IDAT chunk of {} bytes, crc {:?}", chunk.data.len(), chunk.crc);
                    self.idat_chunks.extend_from_slice(chunk.data);
                }
                PngChunkType::IEND => {
                    self.seen_end = true;
                }
                PngChunkType::unkn => {
                    trace!(
                        "Skipping chunk {} of {} bytes",
                        String::from_utf8_lossy(&chunk.chunk),
                        chunk.length
                    );
                }
            }
        }
        // the stream is exhausted or IEND was seen, a further
        // walk would find nothing
        self.seen_end = true;

        if !self.seen_hdr {
            return Err(PngDecodeErrors::MissingHeader);
        }
        Ok(())
    }

    /// Decode the signature and IHDR chunk, without inflating
    /// any pixel data.
    ///
    /// Header values are reported as found, unsupported images are
    /// only rejected by [`decode`](Self::decode)
    pub fn decode_headers(&mut self) -> Result<(), PngDecodeErrors> {
        if self.seen_hdr {
            return Ok(());
        }
        self.read_chunks(true)
    }

    fn inflate(&self, size_hint: usize) -> Result<Vec<u8>, PngDecodeErrors> {
        let options = DeflateOptions::default()
            .set_size_hint(size_hint)
            .set_limit(inflate_limit(size_hint))
            .set_confirm_checksum(self.options.get_confirm_adler());

        let mut decoder = DeflateDecoder::new_with_options(&self.idat_chunks, options);

        Ok(decoder.decode_zlib()?)
    }

    /// Decode the image returning pixels in the colorspace
    /// they are stored in, three or four bytes per pixel
    pub fn decode_raw(&mut self) -> Result<Vec<u8>, PngDecodeErrors> {
        self.read_chunks(false)?;
        self.confirm_supported()?;

        let info = self.png_info;
        let components = usize::from(info.color().num_components());

        let expected = info
            .width
            .checked_mul(components)
            .and_then(|x| x.checked_add(1))
            .and_then(|x| x.checked_mul(info.height))
            .ok_or(PngDecodeErrors::TooLarge {
                width:      info.width,
                height:     info.height,
                max_width:  self.options.get_max_width(),
                max_height: self.options.get_max_height()
            })?;

        let deflate_data = self.inflate(expected)?;
        // done with compressed data
        self.idat_chunks = Vec::new();

        if deflate_data.len() > expected {
            warn!(
                "{} extra bytes after the last scanline, ignoring",
                deflate_data.len() - expected
            );
        }
        unfilter_scanlines(&deflate_data, info.width, info.height, components)
    }

    /// Decode the image returning RGBA pixels, RGB images
    /// get an opaque alpha channel
    pub fn decode(&mut self) -> Result<Vec<u8>, PngDecodeErrors> {
        let pixels = self.decode_raw()?;

        match self.png_info.color() {
            PngColor::RGB => Ok(expand_rgb_to_rgba(&pixels)),
            _ => Ok(pixels)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::inflate_limit;

    #[test]
    fn test_inflate_limit_covers_largest_default_image() {
        // 16384 x 16384 RGBA, one filter byte per row
        let expected = (16384 * 4 + 1) * 16384;

        assert!(expected > 1 << 30);
        assert!(inflate_limit(expected) > expected);
        assert_eq!(inflate_limit(usize::MAX), usize::MAX);
    }
}
