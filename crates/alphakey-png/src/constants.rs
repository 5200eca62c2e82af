/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The eight bytes every png file starts with, read as a big endian u64
pub const PNG_SIGNATURE: u64 = 0x89504E470D0A1A0A;

/// Length of the IHDR payload
pub const IHDR_LENGTH: usize = 13;
