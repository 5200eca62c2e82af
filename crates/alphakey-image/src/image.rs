/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image representation
//!
//! An image is a width, a height and an RGBA pixel buffer laid out
//! row by row, top to bottom. The buffer length is checked once
//! when the image is created.
use alphakey_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;

/// Number of bytes every pixel occupies
pub const BYTES_PER_PIXEL: usize = 4;

/// An 8 bit RGBA image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl Image {
    /// Create an image from RGBA pixels
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimensions`] if width or height is zero
    /// - [`ImageErrors::DimensionsMisMatch`] if `pixels.len()` is not
    ///   `width * height * 4`
    ///
    /// # Example
    /// ```
    /// use alphakey_image::image::Image;
    /// let image = Image::new(vec![0; 2 * 3 * 4], 2, 3).unwrap();
    /// assert_eq!(image.dimensions(), (2, 3));
    /// assert!(Image::new(vec![0; 5], 2, 3).is_err());
    /// assert!(Image::new(vec![], 0, 3).is_err());
    /// ```
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let expected = Self::buffer_size(width, height)?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch {
                expected,
                found: pixels.len()
            });
        }
        Ok(Image {
            width,
            height,
            pixels
        })
    }

    /// Create an image with every pixel set to `color`
    pub fn fill(color: [u8; 4], width: usize, height: usize) -> Result<Image, ImageErrors> {
        let size = Self::buffer_size(width, height)?;
        let pixels = color.iter().copied().cycle().take(size).collect();

        Image::new(pixels, width, height)
    }

    fn buffer_size(width: usize, height: usize) -> Result<usize, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::ZeroDimensions(width, height));
        }
        width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ImageErrors::TooLarge(width, height))
    }

    /// Return the image width and height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Images are always RGBA in memory
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGBA
    }
    /// Return the RGBA pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    /// Return the pixel at `(x, y)` or `None` if outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * BYTES_PER_PIXEL;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);

        Some(out)
    }
    /// Consume the image returning its pixel buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_length_is_validated() {
        let err = Image::new(vec![0; 15], 2, 2).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(
            err,
            ImageErrors::DimensionsMisMatch {
                expected: 16,
                found:    15
            }
        ));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let err = Image::new(vec![], 0, 7).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, ImageErrors::ZeroDimensions(0, 7)));
        assert!(Image::fill([0; 4], 3, 0).is_err());
    }

    #[test]
    fn test_fill_and_pixel_access() {
        let image = Image::fill([1, 2, 3, 4], 3, 2).unwrap();

        assert_eq!(image.pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(image.pixel(3, 1), None);
        assert_eq!(image.into_pixels().len(), 24);
    }

    #[test]
    fn test_overflowing_dimensions() {
        let err = Image::fill([0; 4], usize::MAX, 2).unwrap_err();
        assert!(matches!(err, ImageErrors::TooLarge(..)));
    }
}
