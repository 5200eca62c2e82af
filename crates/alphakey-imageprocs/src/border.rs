/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Border sampling
//!
//! Collects colors along the image edges and ranks them by how
//! often they occur, the most common ones are taken as background.
use std::collections::HashMap;

/// Collect RGB triples from the four edges of an RGBA image
///
/// Walks x in steps of `stride` taking the top then the bottom pixel of
/// each column, then walks y the same way taking the left then the right
/// pixel of each row. Corners are sampled more than once.
///
/// A `stride` of zero is treated as one. Returns nothing for images with
/// zero area.
pub fn sample_border_colors(
    pixels: &[u8], width: usize, height: usize, stride: usize
) -> Vec<[u8; 3]> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let stride = stride.max(1);
    let rgb_at = |x: usize, y: usize| -> [u8; 3] {
        let start = (y * width + x) * 4;
        [pixels[start], pixels[start + 1], pixels[start + 2]]
    };

    let mut samples = Vec::with_capacity(2 * (width / stride + height / stride + 2));

    for x in (0..width).step_by(stride) {
        samples.push(rgb_at(x, 0));
        samples.push(rgb_at(x, height - 1));
    }
    for y in (0..height).step_by(stride) {
        samples.push(rgb_at(0, y));
        samples.push(rgb_at(width - 1, y));
    }
    samples
}

/// Pick up to `max_colors` of the most frequent colors in `samples`
///
/// Colors are ordered by descending count, colors with the same count
/// keep the order in which they first appear in `samples`.
pub fn rank_seed_colors(samples: &[[u8; 3]], max_colors: usize) -> Vec<[u8; 3]> {
    // (color, count), in first seen order
    let mut histogram: Vec<([u8; 3], usize)> = Vec::new();
    // color to its position in histogram
    let mut positions: HashMap<[u8; 3], usize> = HashMap::new();

    for sample in samples {
        match positions.get(sample) {
            Some(&position) => histogram[position].1 += 1,
            None => {
                positions.insert(*sample, histogram.len());
                histogram.push((*sample, 1));
            }
        }
    }
    // stable sort keeps first seen order among equal counts
    histogram.sort_by(|a, b| b.1.cmp(&a.1));

    histogram
        .into_iter()
        .take(max_colors)
        .map(|(color, _)| color)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Vec<u8> {
        let mut out = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                out.extend_from_slice(&f(x, y));
                out.push(255);
            }
        }
        out
    }

    #[test]
    fn test_sampling_order() {
        let (width, height) = (3, 2);
        // color encodes position
        let pixels = image_from_fn(width, height, |x, y| [x as u8, y as u8, 0]);
        let samples = sample_border_colors(&pixels, width, height, 2);

        assert_eq!(
            samples,
            [
                // x = 0, top and bottom
                [0, 0, 0],
                [0, 1, 0],
                // x = 2
                [2, 0, 0],
                [2, 1, 0],
                // y = 0, left and right
                [0, 0, 0],
                [2, 0, 0]
            ]
        );
    }

    #[test]
    fn test_zero_stride_samples_every_pixel() {
        let pixels = image_from_fn(4, 4, |_, _| [9, 9, 9]);
        let samples = sample_border_colors(&pixels, 4, 4, 0);

        assert_eq!(samples.len(), 16);
    }

    #[test]
    fn test_zero_area_has_no_samples() {
        assert!(sample_border_colors(&[], 0, 5, 16).is_empty());
        assert!(sample_border_colors(&[], 5, 0, 16).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let samples = [[3, 3, 3], [1, 1, 1], [2, 2, 2], [1, 1, 1], [2, 2, 2], [3, 3, 3]];

        assert_eq!(
            rank_seed_colors(&samples, 2),
            [[3, 3, 3], [1, 1, 1]]
        );
    }

    #[test]
    fn test_most_frequent_first() {
        let samples = [[1, 1, 1], [2, 2, 2], [2, 2, 2], [3, 3, 3], [2, 2, 2], [3, 3, 3]];

        assert_eq!(
            rank_seed_colors(&samples, 5),
            [[2, 2, 2], [3, 3, 3], [1, 1, 1]]
        );
        assert!(rank_seed_colors(&samples, 0).is_empty());
    }
}
