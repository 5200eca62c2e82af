/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Expand three channel pixels into four channels, appending
/// an opaque alpha after every pixel.
///
/// Trailing bytes that do not form a full pixel are dropped.
pub fn expand_rgb_to_rgba(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((input.len() / 3) * 4);

    for pixel in input.chunks_exact(3) {
        out.extend_from_slice(pixel);
        out.push(255);
    }
    out
}

#[test]
fn test_expand_appends_opaque_alpha() {
    let rgb = [255, 0, 0, 0, 255, 0];

    assert_eq!(expand_rgb_to_rgba(&rgb), [255, 0, 0, 255, 0, 255, 0, 255]);
}
