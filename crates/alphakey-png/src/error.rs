/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during png decoding and encoding
use core::fmt::{Debug, Display, Formatter};

use alphakey_core::bytestream::ByteIoError;
use alphakey_core::colorspace::ColorSpace;
use zune_inflate::errors::InflateDecodeErrors;

/// Errors that can occur while decoding a png
pub enum PngDecodeErrors {
    /// The first eight bytes are not the png magic
    BadSignature,
    /// No IHDR chunk was found before the data ran out
    MissingHeader,
    /// IHDR payload was not 13 bytes long
    BadHeaderLength(usize),
    /// Width or height is zero
    ZeroDimensions,
    /// Image dimensions are above the configured limits
    /// or cannot be represented in memory
    TooLarge {
        width:      usize,
        height:     usize,
        max_width:  usize,
        max_height: usize
    },
    /// A header field holds a value this decoder does not handle.
    Unsupported { field: &'static str, value: u8 },
    /// The inflated stream is shorter than the scanlines require
    NotEnoughData { expected: usize, found: usize },
    /// A scanline started with a filter byte above 4
    UnknownFilter(u8),
    /// The zlib stream inside the IDAT chunks could not be inflated
    ZlibDecodeErrors(InflateDecodeErrors),
    /// Chunk crc did not match, only reported when crc confirmation is on
    BadCrc {
        chunk:    [u8; 4],
        expected: u32,
        found:    u32
    },
    /// A chunk declared more data than the file holds,
    /// only reported when crc confirmation is on
    TruncatedChunk {
        chunk:    [u8; 4],
        expected: usize,
        found:    usize
    }
}

impl PngDecodeErrors {
    /// Returns true if the error stems from header values the decoder
    /// recognises but does not support, as opposed to a malformed file
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, PngDecodeErrors::Unsupported { .. })
    }
    /// Returns true if the error happened while turning IDAT
    /// data into pixels
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            PngDecodeErrors::NotEnoughData { .. }
                | PngDecodeErrors::UnknownFilter(_)
                | PngDecodeErrors::ZlibDecodeErrors(_)
        )
    }
}

impl Display for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadSignature => write!(f, "Bad PNG signature, not a png"),
            Self::MissingHeader => write!(f, "No IHDR chunk found"),
            Self::BadHeaderLength(length) => {
                write!(f, "Bad IHDR length {length}, expected 13")
            }
            Self::ZeroDimensions => write!(f, "Width or height cannot be zero"),
            Self::TooLarge {
                width,
                height,
                max_width,
                max_height
            } => write!(
                f,
                "Image dimensions {width}x{height} larger than maximum configured {max_width}x{max_height}"
            ),
            Self::Unsupported { field, value } => {
                write!(f, "Unsupported {field} {value}")
            }
            Self::NotEnoughData { expected, found } => write!(
                f,
                "Not enough pixel data, expected {expected} bytes but found {found}"
            ),
            Self::UnknownFilter(filter) => write!(f, "Unknown filter type {filter}"),
            Self::ZlibDecodeErrors(err) => write!(f, "Could not inflate data: {:?}", err.error),
            Self::BadCrc {
                chunk,
                expected,
                found
            } => write!(
                f,
                "CRC mismatch on chunk {}, expected {expected:#010X} but found {found:#010X}",
                String::from_utf8_lossy(chunk)
            ),
            Self::TruncatedChunk {
                chunk,
                expected,
                found
            } => write!(
                f,
                "Not enough bytes for chunk {}, expected {expected} but found {found}",
                String::from_utf8_lossy(chunk)
            )
        }
    }
}

impl Debug for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl std::error::Error for PngDecodeErrors {}

impl From<InflateDecodeErrors> for PngDecodeErrors {
    fn from(val: InflateDecodeErrors) -> Self {
        Self::ZlibDecodeErrors(val)
    }
}

impl From<ByteIoError> for PngDecodeErrors {
    fn from(val: ByteIoError) -> Self {
        match val {
            ByteIoError::NotEnoughBytes(expected, found) => {
                Self::NotEnoughData { expected, found }
            }
        }
    }
}

/// Errors that can occur while encoding a png
pub enum PngEncodeErrors {
    /// Pixel buffer length does not match width * height * components
    DimensionsMisMatch { expected: usize, found: usize },
    /// Width or height is zero or does not fit the header
    BadDimensions(usize, usize),
    /// Only RGBA pixels can be encoded
    UnsupportedColorspace(ColorSpace),
    /// The compressor failed
    IoErrors(std::io::Error)
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DimensionsMisMatch { expected, found } => write!(
                f,
                "Pixel buffer length mismatch, expected {expected} bytes but found {found}"
            ),
            Self::BadDimensions(width, height) => {
                write!(f, "Cannot encode an image with dimensions {width}x{height}")
            }
            Self::UnsupportedColorspace(colorspace) => {
                write!(f, "Cannot encode {colorspace:?} pixels, only RGBA is supported")
            }
            Self::IoErrors(err) => write!(f, "I/O error while compressing: {err}")
        }
    }
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl std::error::Error for PngEncodeErrors {}

impl From<std::io::Error> for PngEncodeErrors {
    fn from(val: std::io::Error) -> Self {
        Self::IoErrors(val)
    }
}
