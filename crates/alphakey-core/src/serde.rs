/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::colorspace::ColorSpace;
use crate::options::DecoderOptions;

impl Serialize for ColorSpace {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // colorspace serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for DecoderOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DecoderOptions", 4)?;

        state.serialize_field("max_width", &self.get_max_width())?;
        state.serialize_field("max_height", &self.get_max_height())?;
        state.serialize_field("confirm_crc", &self.get_confirm_crc())?;
        state.serialize_field("confirm_adler", &self.get_confirm_adler())?;

        state.end()
    }
}
