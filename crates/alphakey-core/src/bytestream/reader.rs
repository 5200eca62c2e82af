/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur when reading from a [`ByteReader`]
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum ByteIoError {
    // requested, remaining
    NotEnoughBytes(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                write!(f, "not enough bytes, expected {expected} but found {found}")
            }
        }
    }
}

impl std::error::Error for ByteIoError {}

/// An encapsulation of an in-memory byte stream
///
/// The lifetime parameter is from the buffer being read, slices
/// handed out by the reader borrow from it directly so no copies
/// are made when pulling chunk payloads
pub struct ByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Return the number of bytes left to read
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Return true if the stream can satisfy a read of `num` bytes
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }
    /// Return true if there are no more bytes to read
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Look ahead `position` bytes and return a reference
    /// to `num_bytes` from that position, or an error if the
    /// peek would be out of bounds.
    ///
    /// This doesn't increment the position.
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Result<&'a [u8], ByteIoError> {
        let start = self.position.saturating_add(position);
        let end = start.saturating_add(num_bytes);

        match self.stream.get(start..end) {
            Some(bytes) => Ok(bytes),
            None => Err(ByteIoError::NotEnoughBytes(
                num_bytes,
                self.stream.len().saturating_sub(start)
            ))
        }
    }
    /// Return `num_bytes` from the current position and advance
    /// past them, or an error if the stream is too short.
    pub fn get_slice(&mut self, num_bytes: usize) -> Result<&'a [u8], ByteIoError> {
        let bytes = self.peek_at(0, num_bytes)?;
        self.position += num_bytes;

        Ok(bytes)
    }
    /// Return every byte left in the stream, advancing to the end
    pub fn get_remaining(&mut self) -> &'a [u8] {
        let start = self.position.min(self.stream.len());
        self.position = self.stream.len();

        &self.stream[start..]
    }
    /// Read a fixed number of bytes into an array
    pub fn get_fixed_bytes_or_err<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        byte_store.copy_from_slice(self.get_slice(N)?);

        Ok(byte_store)
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<'a> ByteReader<'a> {
            /// Read a big endian value or return an error
            /// if there are not enough bytes
            ///
            /// The stream does not move on failure
            #[inline(always)]
            pub fn $name(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                match self.stream.get(self.position..self.position.saturating_add(SIZE_OF_VAL)) {
                    Some(position) => {
                        space.copy_from_slice(position);
                        self.position += SIZE_OF_VAL;

                        Ok($int_type::from_be_bytes(space))
                    }
                    None => Err(ByteIoError::NotEnoughBytes(SIZE_OF_VAL, self.remaining()))
                }
            }
        }
    };
}

get_single_type!(get_u32_be_err, u32);
get_single_type!(get_u64_be_err, u64);

impl<'a> ByteReader<'a> {
    /// Read a big endian u32, returning zero if
    /// there are not enough bytes
    #[inline(always)]
    pub fn get_u32_be(&mut self) -> u32 {
        self.get_u32_be_err().unwrap_or(0)
    }
    /// Read a single byte, returning zero at the end of the stream
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
}
