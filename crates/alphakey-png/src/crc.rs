/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! CRC-32 as used by png chunks
//!
//! The crc covers the chunk type and chunk data but not the length.
use crc32fast::Hasher;

/// Calculate the crc of a chunk from its type and payload
pub fn calc_chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    hasher.finalize()
}

#[test]
fn test_iend_crc() {
    // every IEND chunk in existence ends with this crc
    assert_eq!(calc_chunk_crc(b"IEND", &[]), 0xAE42_6082);
}
