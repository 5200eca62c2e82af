/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:       usize,
    pub max_height:      usize,
    pub confirm_crc:     bool,
    pub compression:     u8,
    pub tolerance:       u32,
    pub max_seed_colors: usize,
    pub sample_stride:   usize
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:       1 << 14,
            max_height:      1 << 14,
            confirm_crc:     false,
            compression:     6,
            tolerance:       28,
            max_seed_colors: 2,
            sample_stride:   16
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if let Some(level) = options.get_one::<u8>("compression") {
        cmd_options.compression = *level;
    }
    if let Some(tolerance) = options.get_one::<u32>("tolerance") {
        cmd_options.tolerance = *tolerance;
    }
    if let Some(seeds) = options.get_one::<usize>("seeds") {
        cmd_options.max_seed_colors = *seeds;
    }
    if let Some(stride) = options.get_one::<usize>("stride") {
        cmd_options.sample_stride = *stride;
    }
    if options.get_flag("confirm-crc") {
        info!("Confirming chunk crcs");
        cmd_options.confirm_crc = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
