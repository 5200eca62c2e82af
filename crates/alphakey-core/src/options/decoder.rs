/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Decoder options
///
/// Getters and setters follow the builder pattern, each setter
/// consumes the options and returns a modified copy
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:     usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:    usize,
    /// Whether the png decoder should confirm each chunk's crc
    ///
    /// - Default value: false
    confirm_crc:   bool,
    /// Whether the inflater should confirm the zlib adler32 trailer
    ///
    /// - Default value: false
    confirm_adler: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:     1 << 14,
            max_height:    1 << 14,
            confirm_crc:   false,
            confirm_adler: false
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Create decoder options which confirm every checksum present in the
    /// file, chunk crc's and the zlib adler32 trailer
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true if chunk crc's should be confirmed
    pub const fn get_confirm_crc(&self) -> bool {
        self.confirm_crc
    }

    /// Return true if the zlib adler32 trailer should be confirmed
    pub const fn get_confirm_adler(&self) -> bool {
        self.confirm_adler
    }

    /// Return true whether the decoder confirms every checksum
    pub const fn get_strict_mode(&self) -> bool {
        self.confirm_crc && self.confirm_adler
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    ///
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the png decoder should compare the stored crc of each
    /// chunk against one computed from the chunk type and payload.
    ///
    /// Off by default, in which case mismatches are ignored.
    pub fn set_confirm_crc(mut self, yes: bool) -> Self {
        self.confirm_crc = yes;
        self
    }

    /// Set whether the inflater should confirm the adler32 trailer
    /// of the compressed pixel stream
    pub fn set_confirm_adler(mut self, yes: bool) -> Self {
        self.confirm_adler = yes;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// This turns on every checksum confirmation
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.confirm_crc = yes;
        self.confirm_adler = yes;
        self
    }
}
