/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

/// Chunk types the decoder interprets, see table 5.3
/// of https://www.w3.org/TR/2003/REC-PNG-20031110/
///
/// Everything else is skipped without looking at it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    IDAT,
    IEND,
    unkn
}

impl PngChunkType {
    pub fn from_bytes(chunk: &[u8; 4]) -> PngChunkType {
        match chunk {
            b"IHDR" => PngChunkType::IHDR,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            _ => PngChunkType::unkn
        }
    }
}

/// The filter type byte that starts every scanline
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterMethod {
    pub fn from_int(int: u8) -> Option<FilterMethod> {
        match int {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }
    pub const fn to_int(self) -> u8 {
        match self {
            FilterMethod::None => 0,
            FilterMethod::Sub => 1,
            FilterMethod::Up => 2,
            FilterMethod::Average => 3,
            FilterMethod::Paeth => 4
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InterlaceMethod {
    Standard,
    Adam7,
    #[default]
    Unknown
}

impl InterlaceMethod {
    pub fn from_int(int: u8) -> InterlaceMethod {
        match int {
            0 => Self::Standard,
            1 => Self::Adam7,
            _ => Self::Unknown
        }
    }
}

/// Color types a png header may declare
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PngColor {
    Luma,
    Palette,
    LumaA,
    RGB,
    RGBA,
    #[default]
    Unknown
}

impl PngColor {
    /// Number of samples per pixel, zero for unknown color types
    pub const fn num_components(self) -> u8 {
        match self {
            PngColor::Luma => 1,
            PngColor::Palette => 1,
            PngColor::LumaA => 2,
            PngColor::RGB => 3,
            PngColor::RGBA => 4,
            PngColor::Unknown => 0
        }
    }
    pub fn from_int(int: u8) -> PngColor {
        match int {
            0 => Self::Luma,
            2 => Self::RGB,
            3 => Self::Palette,
            4 => Self::LumaA,
            6 => Self::RGBA,
            _ => Self::Unknown
        }
    }
}

#[test]
fn test_filter_bytes_are_closed() {
    for byte in 0..=4 {
        assert_eq!(FilterMethod::from_int(byte).unwrap().to_int(), byte);
    }
    for byte in 5..=255 {
        assert!(FilterMethod::from_int(byte).is_none());
    }
}
