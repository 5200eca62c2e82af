/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use alphakey_core::options::DecoderOptions;
use alphakey_png::{PngDecodeErrors, PngDecoder};
use flate2::write::ZlibEncoder;
use flate2::Compression;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn chunk(name: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(name);
    hasher.update(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
    out
}

fn ihdr(width: u32, height: u32, depth: u8, color: u8, interlace: u8) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[depth, color, 0, 0, interlace]);
    chunk(b"IHDR", &data)
}

fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn build_png(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();
    for c in chunks {
        out.extend_from_slice(c);
    }
    out
}

/// A 2x2 RGB image, red and green on top, blue and white below
fn small_rgb_scanlines() -> Vec<u8> {
    vec![
        0, 255, 0, 0, 0, 255, 0, //
        0, 0, 0, 255, 255, 255, 255,
    ]
}

#[test]
fn test_rgb_gets_opaque_alpha() {
    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines())),
        chunk(b"IEND", &[])
    ]);
    let mut decoder = PngDecoder::new(&file);
    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.get_dimensions(), Some((2, 2)));
    assert_eq!(
        pixels,
        [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255
        ]
    );
}

#[test]
fn test_decode_raw_keeps_stored_channels() {
    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines())),
        chunk(b"IEND", &[])
    ]);
    let pixels = PngDecoder::new(&file).decode_raw().unwrap();

    assert_eq!(pixels.len(), 2 * 2 * 3);
}

#[test]
fn test_bad_signature() {
    let mut file = build_png(&[ihdr(1, 1, 8, 6, 0)]);
    file[1] = b'J';

    let err = PngDecoder::new(&file).decode().unwrap_err();
    assert!(matches!(err, PngDecodeErrors::BadSignature));

    let err = PngDecoder::new(&SIGNATURE[..4]).decode().unwrap_err();
    assert!(matches!(err, PngDecodeErrors::BadSignature));
}

#[test]
fn test_missing_header() {
    let file = build_png(&[chunk(b"IDAT", &zlib(&[0, 1, 2, 3])), chunk(b"IEND", &[])]);
    let err = PngDecoder::new(&file).decode().unwrap_err();

    assert!(matches!(err, PngDecodeErrors::MissingHeader));
}

#[test]
fn test_unsupported_fields_are_named() {
    let cases: [(Vec<u8>, &str, u8); 4] = [
        (ihdr(1, 1, 8, 3, 0), "color type", 3),
        (ihdr(1, 1, 16, 6, 0), "bit depth", 16),
        (ihdr(1, 1, 8, 0, 0), "color type", 0),
        (ihdr(1, 1, 8, 6, 1), "interlace method", 1)
    ];
    for (header, expected_field, expected_value) in cases {
        let file = build_png(&[header, chunk(b"IEND", &[])]);
        let err = PngDecoder::new(&file).decode().unwrap_err();

        match err {
            PngDecodeErrors::Unsupported { field, value } => {
                assert_eq!(field, expected_field);
                assert_eq!(value, expected_value);
            }
            err => panic!("Expected an unsupported error, found {err}")
        }
    }
}

#[test]
fn test_truncated_pixel_stream() {
    // header says 2x2 RGB, 14 bytes needed, give it one row
    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines()[..7])),
        chunk(b"IEND", &[])
    ]);
    let err = PngDecoder::new(&file).decode().unwrap_err();

    assert!(matches!(
        err,
        PngDecodeErrors::NotEnoughData {
            expected: 14,
            found:    7
        }
    ));
}

#[test]
fn test_extra_inflated_bytes_are_ignored() {
    let mut scanlines = small_rgb_scanlines();
    scanlines.extend_from_slice(&[7; 100]);

    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&scanlines)),
        chunk(b"IEND", &[])
    ]);
    let pixels = PngDecoder::new(&file).decode().unwrap();

    assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
    assert_eq!(pixels.len(), 16);
}

#[test]
fn test_unknown_filter_type() {
    let mut scanlines = small_rgb_scanlines();
    scanlines[7] = 9;

    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&scanlines)),
        chunk(b"IEND", &[])
    ]);
    let err = PngDecoder::new(&file).decode().unwrap_err();

    assert!(matches!(err, PngDecodeErrors::UnknownFilter(9)));
}

#[test]
fn test_corrupt_deflate_stream() {
    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
        chunk(b"IEND", &[])
    ]);
    let err = PngDecoder::new(&file).decode().unwrap_err();

    assert!(err.is_decode_error());
}

#[test]
fn test_split_idat_and_unknown_chunks() {
    let compressed = zlib(&small_rgb_scanlines());
    let (first, second) = compressed.split_at(compressed.len() / 2);

    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"tEXt", b"Comment\0hello"),
        chunk(b"IDAT", first),
        chunk(b"zzZz", &[1, 2, 3]),
        chunk(b"IDAT", second),
        chunk(b"IEND", &[])
    ]);
    let pixels = PngDecoder::new(&file).decode().unwrap();

    assert_eq!(&pixels[8..12], &[0, 0, 255, 255]);
}

#[test]
fn test_missing_iend_is_accepted() {
    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines()))
    ]);

    assert!(PngDecoder::new(&file).decode().is_ok());
}

#[test]
fn test_chunks_after_iend_are_ignored() {
    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines())),
        chunk(b"IEND", &[]),
        chunk(b"IDAT", &[0xFF; 12])
    ]);

    assert!(PngDecoder::new(&file).decode().is_ok());
}

#[test]
fn test_crc_is_ignored_by_default() {
    let mut file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines())),
        chunk(b"IEND", &[])
    ]);
    // corrupt the crc of the IHDR chunk, it ends at 8 + 4 + 4 + 13 + 4
    file[32] ^= 0xFF;

    assert!(PngDecoder::new(&file).decode().is_ok());

    let options = DecoderOptions::default().set_confirm_crc(true);
    let err = PngDecoder::new_with_options(&file, options)
        .decode()
        .unwrap_err();

    match err {
        PngDecodeErrors::BadCrc { chunk, .. } => assert_eq!(&chunk, b"IHDR"),
        err => panic!("Expected a crc error, found {err}")
    }
}

#[test]
fn test_truncated_final_chunk() {
    let mut file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines()))
    ]);
    // chop off the crc, data is still whole
    file.truncate(file.len() - 4);

    assert!(PngDecoder::new(&file).decode().is_ok());

    let options = DecoderOptions::default().set_confirm_crc(true);
    let err = PngDecoder::new_with_options(&file, options)
        .decode()
        .unwrap_err();

    assert!(matches!(err, PngDecodeErrors::TruncatedChunk { .. }));
}

#[test]
fn test_dimension_limits() {
    let file = build_png(&[ihdr(64, 1, 8, 6, 0), chunk(b"IEND", &[])]);
    let options = DecoderOptions::default().set_max_width(32);

    let err = PngDecoder::new_with_options(&file, options)
        .decode()
        .unwrap_err();

    assert!(matches!(err, PngDecodeErrors::TooLarge { width: 64, .. }));
}

#[test]
fn test_zero_dimensions() {
    let file = build_png(&[ihdr(0, 4, 8, 6, 0), chunk(b"IEND", &[])]);
    let err = PngDecoder::new(&file).decode().unwrap_err();

    assert!(matches!(err, PngDecodeErrors::ZeroDimensions));
}

#[test]
fn test_header_probe_reports_unsupported_images() {
    // palette images can't be decoded but their headers can be read
    let file = build_png(&[ihdr(48, 32, 8, 3, 0), chunk(b"IEND", &[])]);
    let mut decoder = PngDecoder::new(&file);

    assert!(decoder.get_info().is_none());
    decoder.decode_headers().unwrap();

    let info = decoder.get_info().unwrap();
    assert_eq!((info.width, info.height), (48, 32));
    assert_eq!(info.color_type, 3);
    assert_eq!(info.depth, 8);
    assert!(decoder.get_colorspace().is_none());
}

#[test]
fn test_first_header_wins() {
    let file = build_png(&[
        ihdr(2, 2, 8, 2, 0),
        ihdr(7, 7, 8, 6, 0),
        chunk(b"IDAT", &zlib(&small_rgb_scanlines())),
        chunk(b"IEND", &[])
    ]);
    let mut decoder = PngDecoder::new(&file);

    assert!(decoder.decode().is_ok());
    assert_eq!(decoder.get_dimensions(), Some((2, 2)));
}

#[test]
fn test_short_header() {
    let file = build_png(&[chunk(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8])]);
    let err = PngDecoder::new(&file).decode_headers().unwrap_err();

    assert!(matches!(err, PngDecodeErrors::BadHeaderLength(9)));
}
