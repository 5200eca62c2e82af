/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use alphakey_image::errors::ImageErrors;
use alphakey_image::probe_bytes;
use clap::ArgMatches;
use log::warn;

use crate::serde::Metadata;

/// Probe input files, extract header information, and print it to standard output.
///
/// Files that cannot be read stop the probe, files that are not pngs
/// are reported and skipped.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), ImageErrors> {
    let Some(in_files) = args.get_raw("in") else {
        return Ok(());
    };

    for in_file in in_files {
        let data = fs::read(in_file)?;

        match probe_bytes(&data) {
            Ok(info) => {
                let metadata = Metadata::new(in_file.to_os_string(), data.len() as u64, &info);

                match serde_json::to_string_pretty(&metadata) {
                    Ok(json) => println!("{json}"),
                    Err(err) => warn!("Could not serialize metadata: {err}")
                }
            }
            Err(err) => warn!("Could not probe {:?}: {err}", in_file)
        }
    }
    Ok(())
}
