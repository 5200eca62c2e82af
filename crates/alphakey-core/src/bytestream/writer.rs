/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Encapsulates a simple byte writer with
/// support for endian aware writes
///
/// Writes go to a growable vector so they cannot fail,
/// the writer only tracks how much it has appended
pub struct ByteWriter<'a> {
    buffer:        &'a mut Vec<u8>,
    bytes_written: usize
}

impl<'a> ByteWriter<'a> {
    /// Create a new writer appending to `buffer`
    pub fn new(buffer: &'a mut Vec<u8>) -> ByteWriter<'a> {
        ByteWriter {
            buffer,
            bytes_written: 0
        }
    }
    /// Return the number of bytes this writer has appended
    ///
    /// # Example
    /// ```
    /// use alphakey_core::bytestream::ByteWriter;
    /// let mut sink = vec![1, 2];
    /// let mut writer = ByteWriter::new(&mut sink);
    /// writer.write_u32_be(7);
    /// assert_eq!(writer.bytes_written(), 4);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Hint how many more bytes are going to be written
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }
    pub fn write_all(&mut self, buf: &[u8]) {
        self.buffer.extend_from_slice(buf);
        self.bytes_written += buf.len();
    }
    pub fn write_u8(&mut self, byte: u8) {
        self.buffer.push(byte);
        self.bytes_written += 1;
    }
    pub fn write_u32_be(&mut self, value: u32) {
        self.write_all(&value.to_be_bytes());
    }
    pub fn write_u64_be(&mut self, value: u64) {
        self.write_all(&value.to_be_bytes());
    }
}

#[test]
fn test_writes_are_big_endian() {
    let mut sink = vec![];
    let mut writer = ByteWriter::new(&mut sink);

    writer.write_u32_be(13);
    writer.write_u8(8);
    writer.write_all(b"IHDR");

    assert_eq!(writer.bytes_written(), 9);
    assert_eq!(sink, [0, 0, 0, 13, 8, b'I', b'H', b'D', b'R']);
}
