/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline de-filtering
//!
//! Every function here writes one reconstructed row into `current`
//! from the filtered bytes in `raw`, reading already reconstructed
//! bytes from `current` (left) and `prev_row` (up, up-left).
//!
//! The `_first` variants handle the first row of an image where
//! the row above is treated as all zeroes.
use log::trace;

use crate::enums::FilterMethod;
use crate::error::PngDecodeErrors;

pub fn handle_sub(raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len());

    // handle leftmost pixel explicitly, there is nothing to its left
    for i in 0..components.min(end) {
        current[i] = raw[i];
    }
    for i in components..end {
        let a = current[i - components];
        current[i] = raw[i].wrapping_add(a);
    }
}

pub fn handle_up(prev_row: &[u8], raw: &[u8], current: &mut [u8]) {
    for ((filt, recon), up) in raw.iter().zip(current).zip(prev_row) {
        *recon = (*filt).wrapping_add(*up)
    }
}

pub fn handle_avg(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize) {
    // raw length is one row, so always keep it in check
    let end = current.len().min(raw.len()).min(prev_row.len());

    for i in 0..components.min(end) {
        current[i] = raw[i].wrapping_add(prev_row[i] >> 1);
    }
    for i in components..end {
        let a = current[i - components];
        let b = prev_row[i];
        // floor((a + b) / 2) without leaving 8 bits
        let c = (a & b) + ((a ^ b) >> 1);

        current[i] = raw[i].wrapping_add(c);
    }
}

pub fn handle_paeth(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len()).min(prev_row.len());

    for i in 0..components.min(end) {
        current[i] = raw[i].wrapping_add(paeth(0, prev_row[i], 0));
    }
    for i in components..end {
        let paeth_res = paeth(
            current[i - components],
            prev_row[i],
            prev_row[i - components]
        );
        current[i] = raw[i].wrapping_add(paeth_res)
    }
}

/// Average filter on the first row, `b` is always zero
pub fn handle_avg_first(raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len());

    for i in 0..components.min(end) {
        current[i] = raw[i];
    }
    for i in components..end {
        current[i] = raw[i].wrapping_add(current[i - components] >> 1);
    }
}

/// Paeth filter on the first row
///
/// With `b` and `c` zero the predictor always picks `a`, which
/// makes this a sub filter.
pub fn handle_paeth_first(raw: &[u8], current: &mut [u8], components: usize) {
    handle_sub(raw, current, components);
}

/// The Paeth predictor from section 9.4 of the png specification
#[inline(always)]
pub fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let a = i16::from(a);
    let b = i16::from(b);
    let c = i16::from(c);

    let p = a + b - c;
    let pa = (p - a).abs();
    let pb = (p - b).abs();
    let pc = (p - c).abs();

    if pa <= pb && pa <= pc {
        a as u8
    } else if pb <= pc {
        b as u8
    } else {
        c as u8
    }
}

/// Undo per-row filtering on an inflated scanline stream.
///
/// `data` holds `height` rows each made of a filter type byte followed
/// by `width * components` filtered bytes. Rows are reconstructed top to
/// bottom since every row reads the one above it.
///
/// Returns the reconstructed pixels without filter bytes.
pub fn unfilter_scanlines(
    data: &[u8], width: usize, height: usize, components: usize
) -> Result<Vec<u8>, PngDecodeErrors> {
    let too_large = || PngDecodeErrors::TooLarge {
        width,
        height,
        max_width: usize::MAX,
        max_height: usize::MAX
    };
    let width_stride = width.checked_mul(components).ok_or_else(too_large)?;
    let in_stride = width_stride.checked_add(1).ok_or_else(too_large)?;
    let expected = in_stride.checked_mul(height).ok_or_else(too_large)?;

    if data.len() < expected {
        return Err(PngDecodeErrors::NotEnoughData {
            expected,
            found: data.len()
        });
    }

    let mut out = vec![0_u8; width_stride * height];

    if width_stride == 0 {
        return Ok(out);
    }

    for (row, in_row) in data.chunks_exact(in_stride).take(height).enumerate() {
        let filter_byte = in_row[0];
        let raw = &in_row[1..];

        let filter = FilterMethod::from_int(filter_byte)
            .ok_or(PngDecodeErrors::UnknownFilter(filter_byte))?;

        // split output into rows already written and the one being written
        let (prev, current) = out.split_at_mut(row * width_stride);
        let current = &mut current[..width_stride];

        if row == 0 {
            match filter {
                FilterMethod::None | FilterMethod::Up => current.copy_from_slice(raw),
                FilterMethod::Sub => handle_sub(raw, current, components),
                FilterMethod::Average => handle_avg_first(raw, current, components),
                FilterMethod::Paeth => handle_paeth_first(raw, current, components)
            }
        } else {
            let prev_row = &prev[(row - 1) * width_stride..];

            match filter {
                FilterMethod::None => current.copy_from_slice(raw),
                FilterMethod::Sub => handle_sub(raw, current, components),
                FilterMethod::Up => handle_up(prev_row, raw, current),
                FilterMethod::Average => handle_avg(prev_row, raw, current, components),
                FilterMethod::Paeth => handle_paeth(prev_row, raw, current, components)
            }
        }
    }
    trace!("Reconstructed {height} scanlines of {width_stride} bytes");

    Ok(out)
}
