/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for alphakey
//!
//! The routines work on raw RGBA slices, [`background::RemoveBackground`]
//! wraps them as an operation on [`Image`]s.
use alphakey_image::errors::ImageErrors;
use alphakey_image::image::Image;

use crate::background::{BackgroundOptions, RemoveBackground};

pub mod background;
pub mod border;

/// Make the background of `image` transparent, returning a new image
///
/// Seeds are the `max_seed_colors` most common border colors, pixels
/// within `tolerance` of a seed and connected to an edge through such
/// pixels get an alpha of zero.
///
/// # Example
/// ```
/// use alphakey_image::image::Image;
/// use alphakey_imageprocs::remove_background;
///
/// let image = Image::fill([40, 40, 40, 255], 4, 4).unwrap();
/// let keyed = remove_background(&image, 28, 2).unwrap();
///
/// assert_eq!(keyed.pixel(1, 1), Some([40, 40, 40, 0]));
/// // the input is left as is
/// assert_eq!(image.pixel(1, 1), Some([40, 40, 40, 255]));
/// ```
pub fn remove_background(
    image: &Image, tolerance: u32, max_seed_colors: usize
) -> Result<Image, ImageErrors> {
    let options = BackgroundOptions::default()
        .set_tolerance(tolerance)
        .set_max_seed_colors(max_seed_colors);

    remove_background_with_options(image, options)
}

/// Make the background of `image` transparent using `options`
pub fn remove_background_with_options(
    image: &Image, options: BackgroundOptions
) -> Result<Image, ImageErrors> {
    let (image, _) = RemoveBackground::new(options).apply(image)?;
    Ok(image)
}
