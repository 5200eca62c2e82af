/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Background removal: Turn background pixels connected to the image
//! edges transparent.
//!
//! The background is described by the most common colors found along
//! the border. A flood fill starts from every edge pixel and walks
//! 4-connected neighbours, clearing the alpha of every pixel close enough
//! to one of those colors. Pixels that do not match stop the fill, so
//! background colored regions enclosed by foreground are left alone.
//!
//! Only alpha is changed, RGB values are kept as they were.
use alphakey_image::errors::ImageErrors;
use alphakey_image::image::Image;
use alphakey_image::traits::OperationsTrait;
use log::{debug, info};

use crate::border::{rank_seed_colors, sample_border_colors};

/// Options controlling background removal
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BackgroundOptions {
    tolerance:       u32,
    max_seed_colors: usize,
    sample_stride:   usize
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        BackgroundOptions {
            tolerance:       28,
            max_seed_colors: 2,
            sample_stride:   16
        }
    }
}

impl BackgroundOptions {
    /// Maximum euclidean RGB distance from a seed color for
    /// a pixel to count as background, inclusive
    pub const fn get_tolerance(&self) -> u32 {
        self.tolerance
    }
    /// Number of border colors used as background seeds
    pub const fn get_max_seed_colors(&self) -> usize {
        self.max_seed_colors
    }
    /// Distance between sampled border pixels
    pub const fn get_sample_stride(&self) -> usize {
        self.sample_stride
    }
    #[must_use]
    pub fn set_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }
    #[must_use]
    pub fn set_max_seed_colors(mut self, max_seed_colors: usize) -> Self {
        self.max_seed_colors = max_seed_colors;
        self
    }
    /// Set the sampling stride, zero is treated as one
    #[must_use]
    pub fn set_sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride.max(1);
        self
    }
}

/// What a fill did
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FillStats {
    /// Number of pixels whose alpha was set to zero
    pub cleared: usize,
    /// Seed colors, most frequent first
    pub seeds:   Vec<[u8; 3]>
}

#[inline(always)]
fn distance_sq(a: &[u8], b: &[u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = i32::from(*x) - i32::from(*y);
            (diff * diff) as u32
        })
        .sum()
}

/// Returns true if `rgb` is within `tolerance` of any seed color
///
/// Uses squared distances, so a pixel exactly `tolerance` away
/// is background.
pub fn is_background(rgb: &[u8], seeds: &[[u8; 3]], tolerance: u32) -> bool {
    let tolerance_sq = u64::from(tolerance) * u64::from(tolerance);

    seeds
        .iter()
        .any(|seed| u64::from(distance_sq(rgb, seed)) <= tolerance_sq)
}

/// Remove the background from RGBA `pixels`, returning a new buffer
/// and statistics about the fill.
///
/// Buffers with zero area come back unchanged.
///
/// # Errors
/// [`ImageErrors::DimensionsMisMatch`] if `pixels` does not hold
/// `width * height * 4` bytes
pub fn remove_background_with_stats(
    pixels: &[u8], width: usize, height: usize, options: &BackgroundOptions
) -> Result<(Vec<u8>, FillStats), ImageErrors> {
    let expected = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(4))
        .ok_or(ImageErrors::TooLarge(width, height))?;

    if pixels.len() != expected {
        return Err(ImageErrors::DimensionsMisMatch {
            expected,
            found: pixels.len()
        });
    }
    let mut out = pixels.to_vec();

    let samples = sample_border_colors(pixels, width, height, options.get_sample_stride());
    let seeds = rank_seed_colors(&samples, options.get_max_seed_colors());

    if seeds.is_empty() {
        return Ok((out, FillStats::default()));
    }
    info!("Background seed colors: {seeds:?}");

    let tolerance = options.get_tolerance();
    let mut visited = vec![false; width * height];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    let mut push = |x: usize, y: usize, stack: &mut Vec<(usize, usize)>| {
        let idx = y * width + x;
        if !visited[idx] {
            visited[idx] = true;
            stack.push((x, y));
        }
    };

    // every edge pixel is a starting point
    for x in 0..width {
        push(x, 0, &mut stack);
        push(x, height - 1, &mut stack);
    }
    for y in 0..height {
        push(0, y, &mut stack);
        push(width - 1, y, &mut stack);
    }

    let mut cleared = 0;

    while let Some((x, y)) = stack.pop() {
        let start = (y * width + x) * 4;

        if !is_background(&out[start..start + 3], &seeds, tolerance) {
            continue;
        }
        out[start + 3] = 0;
        cleared += 1;

        if x > 0 {
            push(x - 1, y, &mut stack);
        }
        if x + 1 < width {
            push(x + 1, y, &mut stack);
        }
        if y > 0 {
            push(x, y - 1, &mut stack);
        }
        if y + 1 < height {
            push(x, y + 1, &mut stack);
        }
    }
    debug!(
        "Cleared {cleared} of {} pixels with tolerance {tolerance}",
        width * height
    );

    Ok((out, FillStats { cleared, seeds }))
}

/// Remove the background from RGBA `pixels`, returning a new buffer
pub fn remove_background_pixels(
    pixels: &[u8], width: usize, height: usize, options: &BackgroundOptions
) -> Result<Vec<u8>, ImageErrors> {
    Ok(remove_background_with_stats(pixels, width, height, options)?.0)
}

/// Background removal operation
///
/// # Example
/// ```
/// use alphakey_image::image::Image;
/// use alphakey_image::traits::OperationsTrait;
/// use alphakey_imageprocs::background::{BackgroundOptions, RemoveBackground};
///
/// let mut image = Image::fill([0, 255, 0, 255], 8, 8).unwrap();
/// RemoveBackground::new(BackgroundOptions::default())
///     .execute(&mut image)
///     .unwrap();
/// assert!(image.pixels().chunks_exact(4).all(|px| px[3] == 0));
/// ```
#[derive(Default)]
pub struct RemoveBackground {
    options: BackgroundOptions
}

impl RemoveBackground {
    #[must_use]
    pub fn new(options: BackgroundOptions) -> RemoveBackground {
        RemoveBackground { options }
    }
    /// Run background removal returning a new image and leaving
    /// `image` untouched
    pub fn apply(&self, image: &Image) -> Result<(Image, FillStats), ImageErrors> {
        let (width, height) = image.dimensions();
        let (pixels, stats) =
            remove_background_with_stats(image.pixels(), width, height, &self.options)?;

        Ok((Image::new(pixels, width, height)?, stats))
    }
}

impl OperationsTrait for RemoveBackground {
    fn name(&self) -> &'static str {
        "Remove Background"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (new_image, _) = self.apply(image)?;
        *image = new_image;

        Ok(())
    }
}
