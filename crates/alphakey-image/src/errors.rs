/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use alphakey_png::error::{PngDecodeErrors, PngEncodeErrors};

/// Broad categories errors fall into
///
/// Each [`ImageErrors`] maps to exactly one of these via [`ImageErrors::kind`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Input isn't a well formed png, or a buffer doesn't
    /// match its dimensions
    Format,
    /// Input is a valid png using features that aren't handled
    Unsupported,
    /// Pixel data could not be recovered
    Decode,
    /// Reading or writing a file failed
    Io
}

/// All possible image errors that can occur.
pub enum ImageErrors {
    PngDecodeErrors(PngDecodeErrors),
    PngEncodeErrors(PngEncodeErrors),
    IoErrors(std::io::Error),
    /// A pixel buffer did not match `width * height * 4`
    DimensionsMisMatch { expected: usize, found: usize },
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// Width times height overflowed
    TooLarge(usize, usize)
}

impl ImageErrors {
    /// Return the category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PngDecodeErrors(err) => {
                if err.is_unsupported() || matches!(err, PngDecodeErrors::TooLarge { .. }) {
                    ErrorKind::Unsupported
                } else if err.is_decode_error() {
                    ErrorKind::Decode
                } else {
                    ErrorKind::Format
                }
            }
            Self::PngEncodeErrors(PngEncodeErrors::IoErrors(_)) => ErrorKind::Io,
            Self::PngEncodeErrors(PngEncodeErrors::UnsupportedColorspace(_)) => {
                ErrorKind::Unsupported
            }
            Self::PngEncodeErrors(_) => ErrorKind::Format,
            Self::IoErrors(_) => ErrorKind::Io,
            Self::DimensionsMisMatch { .. } => ErrorKind::Format,
            Self::ZeroDimensions(..) => ErrorKind::Format,
            Self::TooLarge(..) => ErrorKind::Unsupported
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PngDecodeErrors(err) => write!(f, "Png decoding failed: {err}"),
            Self::PngEncodeErrors(err) => write!(f, "Png encoding failed: {err}"),
            Self::IoErrors(err) => write!(f, "I/O error: {err}"),
            Self::DimensionsMisMatch { expected, found } => write!(
                f,
                "Dimensions mismatch, expected {expected} bytes of pixels but found {found}"
            ),
            Self::ZeroDimensions(width, height) => {
                write!(f, "Image of {width}x{height} pixels has no area")
            }
            Self::TooLarge(width, height) => {
                write!(f, "Image of {width}x{height} pixels is too large")
            }
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PngDecodeErrors(err) => Some(err),
            Self::PngEncodeErrors(err) => Some(err),
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<PngDecodeErrors> for ImageErrors {
    fn from(from: PngDecodeErrors) -> Self {
        ImageErrors::PngDecodeErrors(from)
    }
}

impl From<PngEncodeErrors> for ImageErrors {
    fn from(from: PngEncodeErrors) -> Self {
        ImageErrors::PngEncodeErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}
