/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use alphakey_png::PngColor;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::metadata::ImageInfo;

impl Serialize for ImageInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageInfo", 8)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("depth", &self.depth)?;
        state.serialize_field("color_type", &self.color_type)?;
        state.serialize_field(
            "color",
            &format!("{:?}", PngColor::from_int(self.color_type))
        )?;
        state.serialize_field("compression_method", &self.compression_method)?;
        state.serialize_field("filter_method", &self.filter_method)?;
        state.serialize_field("interlace_method", &self.interlace_method)?;
        state.end()
    }
}
