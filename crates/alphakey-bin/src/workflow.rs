/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use alphakey_image::errors::ImageErrors;
use alphakey_image::image::Image;
use alphakey_image::traits::OperationsTrait;
use alphakey_imageprocs::background::RemoveBackground;
use clap::ArgMatches;
use log::{debug, info, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{get_background_options, get_decoder_options, get_encoder_options};
use crate::probe_files::probe_input_files;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    if args.get_flag("probe") {
        return probe_input_files(args);
    }
    info!("Creating workflows from input");

    let decoder_options = get_decoder_options(cmd_opts);
    let encoder_options = get_encoder_options(cmd_opts);
    let operation = RemoveBackground::new(get_background_options(cmd_opts));

    match serde_json::to_string(&decoder_options) {
        Ok(json) => debug!("Decoder options: {json}"),
        Err(err) => warn!("Could not serialize decoder options: {err}")
    }

    let (Some(in_files), Some(out_files)) = (args.get_raw("in"), args.get_raw("out")) else {
        return Ok(());
    };
    if in_files.len() != out_files.len() {
        warn!(
            "{} inputs but {} outputs, extra files are ignored",
            in_files.len(),
            out_files.len()
        );
    }

    for (in_file, out_file) in in_files.zip(out_files) {
        info!("Processing {:?}", in_file);

        let mut image = Image::open_with_options(in_file, decoder_options)?;

        operation.execute(&mut image)?;

        let data = image.write_to_vec_with_options(encoder_options)?;
        fs::write(out_file, &data)?;

        info!("Wrote {} bytes to {:?}", data.len(), out_file);
    }
    Ok(())
}
