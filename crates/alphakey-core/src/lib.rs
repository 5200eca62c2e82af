/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all alphakey libraries
//!
//! This crate provides a set of core routines shared
//! by the png codec, the background remover and the command line
//!
//! It currently contains
//!
//! - A bytestream reader and writer with big endian aware reads and writes
//! - Colorspace information shared by images
//! - Image decoder and encoder options
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
pub mod bytestream;
pub mod colorspace;
pub mod options;
pub mod serde;
