/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alphakey_core::options::DecoderOptions;
use alphakey_image::errors::{ErrorKind, ImageErrors};
use alphakey_image::image::Image;
use alphakey_image::traits::OperationsTrait;
use alphakey_imageprocs::background::{
    remove_background_pixels, remove_background_with_stats, BackgroundOptions, RemoveBackground
};
use alphakey_imageprocs::remove_background;
use nanorand::{Rng, WyRand};

const BG: [u8; 3] = [200, 200, 200];
const FG: [u8; 3] = [20, 40, 160];

fn image_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Image {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&f(x, y));
            pixels.push(255);
        }
    }
    Image::new(pixels, width, height).unwrap()
}

fn alpha(image: &Image, x: usize, y: usize) -> u8 {
    image.pixel(x, y).unwrap()[3]
}

#[test]
fn test_enclosed_patch_is_kept() {
    // background border, a foreground ring from 2..=7 and a
    // background colored 2x2 hole at 4..=5
    let image = image_from_fn(10, 10, |x, y| {
        let ring = (2..=7).contains(&x) && (2..=7).contains(&y);
        let hole = (4..=5).contains(&x) && (4..=5).contains(&y);

        if ring && !hole {
            FG
        } else {
            BG
        }
    });
    let keyed = remove_background(&image, 28, 2).unwrap();

    for y in 0..10 {
        for x in 0..10 {
            let ring = (2..=7).contains(&x) && (2..=7).contains(&y);
            let expected = if ring { 255 } else { 0 };

            assert_eq!(alpha(&keyed, x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_tolerance_boundary_is_inclusive() {
    // 16^2 + 16^2 + 12^2 = 656, tolerance 28 gives 784
    // 16^2 + 16^2 + 17^2 = 801 is just outside
    let inside = [216, 216, 212];
    let outside = [216, 216, 217];
    // exactly 28 away on one channel
    let boundary = [228, 200, 200];

    let image = image_from_fn(5, 1, |x, _| match x {
        1 => inside,
        2 => boundary,
        3 => outside,
        _ => BG
    });
    // a one pixel tall image has every pixel on the edge
    let keyed = remove_background(&image, 28, 1).unwrap();

    assert_eq!(alpha(&keyed, 1, 0), 0);
    assert_eq!(alpha(&keyed, 2, 0), 0);
    assert_eq!(alpha(&keyed, 3, 0), 255);
}

#[test]
fn test_rgb_is_preserved() {
    let image = image_from_fn(6, 6, |x, y| if (x + y) % 2 == 0 { BG } else { [205, 198, 201] });
    let keyed = remove_background(&image, 28, 2).unwrap();

    for (before, after) in image
        .pixels()
        .chunks_exact(4)
        .zip(keyed.pixels().chunks_exact(4))
    {
        assert_eq!(before[..3], after[..3]);
        assert_eq!(after[3], 0);
    }
}

#[test]
fn test_diagonal_pixels_are_not_connected() {
    // background border around a foreground block, (1, 1) opens onto the
    // border while (2, 2) only touches (1, 1) at a corner
    let image = image_from_fn(5, 5, |x, y| {
        let edge = x == 0 || y == 0 || x == 4 || y == 4;
        if edge || (x, y) == (1, 1) || (x, y) == (2, 2) {
            BG
        } else {
            FG
        }
    });
    let keyed = remove_background(&image, 28, 2).unwrap();

    assert_eq!(alpha(&keyed, 0, 0), 0);
    assert_eq!(alpha(&keyed, 1, 1), 0);
    assert_eq!(alpha(&keyed, 2, 2), 255);
    assert_eq!(alpha(&keyed, 1, 2), 255);
}

#[test]
fn test_checkerboard_background_uses_two_seeds() {
    let light = [240, 240, 240];
    let dark = [190, 190, 190];
    let image = image_from_fn(32, 32, |x, y| {
        if (8..24).contains(&x) && (8..24).contains(&y) {
            FG
        } else if (x / 4 + y / 4) % 2 == 0 {
            light
        } else {
            dark
        }
    });
    let options = BackgroundOptions::default().set_sample_stride(1);
    let (pixels, stats) = remove_background_with_stats(image.pixels(), 32, 32, &options).unwrap();

    assert_eq!(stats.seeds.len(), 2);
    assert_eq!(stats.cleared, 32 * 32 - 16 * 16);
    assert_eq!(pixels[(16 * 32 + 16) * 4 + 3], 255);

    // one seed only matches half the checkerboard
    let options = options.set_max_seed_colors(1);
    let (_, stats) = remove_background_with_stats(image.pixels(), 32, 32, &options).unwrap();
    assert!(stats.cleared < 32 * 32 - 16 * 16);
}

#[test]
fn test_output_is_deterministic() {
    let mut rand = WyRand::new_seed(99);
    let mut pixels = vec![0_u8; 24 * 24 * 4];
    // few distinct colors so seeds have ties
    for byte in pixels.iter_mut() {
        *byte = rand.generate_range(0_u8..4) * 60;
    }
    let image = Image::new(pixels, 24, 24).unwrap();

    let first = remove_background(&image, 40, 2).unwrap();
    for _ in 0..5 {
        assert_eq!(remove_background(&image, 40, 2).unwrap(), first);
    }
}

#[test]
fn test_zero_seeds_and_zero_area_are_no_ops() {
    let image = image_from_fn(4, 4, |_, _| BG);
    assert_eq!(remove_background(&image, 28, 0).unwrap(), image);

    let options = BackgroundOptions::default();
    assert!(remove_background_pixels(&[], 3, 0, &options)
        .unwrap()
        .is_empty());
    assert!(remove_background_pixels(&[], 0, 0, &options)
        .unwrap()
        .is_empty());
}

#[test]
fn test_short_buffer_is_rejected() {
    let options = BackgroundOptions::default();
    let err = remove_background_with_stats(&[200; 15], 2, 2, &options).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(
        err,
        ImageErrors::DimensionsMisMatch {
            expected: 16,
            found:    15
        }
    ));
    assert!(remove_background_pixels(&[200; 8], 3, 3, &options).is_err());
}

#[test]
fn test_round_trip_after_removal_is_exact() {
    let image = image_from_fn(23, 37, |x, y| {
        if (6..17).contains(&x) && (9..28).contains(&y) {
            FG
        } else if (x + y) % 2 == 0 {
            [240, 240, 240]
        } else {
            [225, 225, 225]
        }
    });
    let keyed = remove_background(&image, 28, 2).unwrap();
    assert_eq!(alpha(&keyed, 0, 0), 0);
    assert_eq!(alpha(&keyed, 11, 18), 255);

    let encoded = keyed.write_to_vec().unwrap();
    let decoded = Image::read(&encoded, DecoderOptions::default()).unwrap();

    assert_eq!(decoded, keyed);
}

#[test]
fn test_operation_replaces_image() {
    let mut image = image_from_fn(3, 3, |x, y| if (x, y) == (1, 1) { FG } else { BG });

    RemoveBackground::new(BackgroundOptions::default())
        .execute(&mut image)
        .unwrap();

    assert_eq!(alpha(&image, 0, 0), 0);
    assert_eq!(alpha(&image, 1, 1), 255);
}
