/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("alphakey")
        .about("Make the background of png sprites transparent")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .action(ArgAction::Append)
            .required_unless_present("probe"))
        .arg(Arg::new("tolerance")
            .long("tolerance")
            .help("Maximum RGB distance from a background color, inclusive")
            .help_heading("BACKGROUND")
            .value_parser(value_parser!(u32))
            .default_value("28"))
        .arg(Arg::new("seeds")
            .long("seeds")
            .help("Number of most frequent border colors treated as background")
            .help_heading("BACKGROUND")
            .value_parser(value_parser!(usize))
            .default_value("2"))
        .arg(Arg::new("stride")
            .long("stride")
            .help("Distance between sampled border pixels")
            .help_heading("BACKGROUND")
            .value_parser(value_parser!(usize))
            .default_value("16"))
        .arg(Arg::new("compression")
            .long("compression")
            .help("Deflate level used for the output, 0 to 9")
            .help_heading("OUTPUT")
            .value_parser(value_parser!(u8).range(0..=9))
            .default_value("6"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print png header information as json and exit"))
        .arg(Arg::new("confirm-crc")
            .long("confirm-crc")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject files whose chunk crcs do not match"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

#[test]
fn verify_cmd() {
    create_cmd_args().debug_assert();
}
