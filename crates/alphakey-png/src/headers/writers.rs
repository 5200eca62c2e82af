/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alphakey_core::bytestream::ByteWriter;

use crate::crc::calc_chunk_crc;
use crate::encoder::PngEncoder;
use crate::enums::FilterMethod;

pub(crate) fn write_ihdr(ctx: &PngEncoder, output: &mut Vec<u8>) {
    let mut writer = ByteWriter::new(output);
    // dimensions are checked to fit in a u32 before we get here
    writer.write_u32_be(ctx.options.get_width() as u32);
    writer.write_u32_be(ctx.options.get_height() as u32);
    // depth
    writer.write_u8(8);
    // output is always RGBA
    writer.write_u8(6);
    // compression method
    writer.write_u8(0);
    // filter method
    writer.write_u8(FilterMethod::None.to_int());
    // interlace method, always standard
    writer.write_u8(0);
}

pub(crate) fn write_idat(ctx: &PngEncoder, output: &mut Vec<u8>) {
    output.extend_from_slice(&ctx.encoded_chunks);
}

// iend has no data
pub(crate) fn write_iend(_: &PngEncoder, _: &mut Vec<u8>) {}

/// Write the boilerplate for a png chunk
///
/// Writes the length and chunk type, calls `func` to write the
/// chunk data and then writes the crc of the type and data.
pub(crate) fn write_header_fn<F: Fn(&PngEncoder, &mut Vec<u8>)>(
    ctx: &PngEncoder, writer: &mut ByteWriter, name: &[u8; 4], func: F
) {
    let mut data = Vec::new();
    func(ctx, &mut data);

    write_chunk(writer, name, &data);
}

/// Write a full chunk, length, type, data and crc
pub(crate) fn write_chunk(writer: &mut ByteWriter, name: &[u8; 4], data: &[u8]) {
    writer.reserve(data.len() + 12);
    writer.write_u32_be(data.len() as u32);
    writer.write_all(name);
    writer.write_all(data);
    writer.write_u32_be(calc_chunk_crc(name, data));
}
