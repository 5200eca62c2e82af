/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alphakey_core::options::{DecoderOptions, EncoderOptions};
use alphakey_imageprocs::background::BackgroundOptions;

use crate::cmd_parsers::global_options::CmdOptions;

pub mod global_options;

pub fn get_decoder_options(options: &CmdOptions) -> DecoderOptions {
    DecoderOptions::default()
        .set_max_width(options.max_width)
        .set_max_height(options.max_height)
        .set_confirm_crc(options.confirm_crc)
}

pub fn get_encoder_options(options: &CmdOptions) -> EncoderOptions {
    EncoderOptions::default().set_compression(options.compression)
}

pub fn get_background_options(options: &CmdOptions) -> BackgroundOptions {
    BackgroundOptions::default()
        .set_tolerance(options.tolerance)
        .set_max_seed_colors(options.max_seed_colors)
        .set_sample_stride(options.sample_stride)
}
