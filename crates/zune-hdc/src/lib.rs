/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding of HDC, a lossless Huffman differential image format
//!
//! Pixels are first replaced by their difference to the pixel on the left,
//! the residuals are then entropy coded with a static Huffman code whose
//! table travels in the stream.
//!
//! # Layout
//! Bits are packed MSB-first
//! ```text
//! [height:16][width:16]
//! repeat { [symbol + 255:9][code length:5][codeword] } until symbol + 255 == 511
//! repeat height*width*3 times: [codeword]
//! zero padding to a byte boundary
//! ```
//!
//! # Features
//! - Decoding and encoding
//! - `no_std`
//! - Fuzz tested
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
//!
//! # Example
//! ```
//! use zune_core::bytestream::ZCursor;
//! use zune_core::colorspace::ColorSpace;
//! use zune_core::options::EncoderOptions;
//! use zune_hdc::{HdcDecoder, HdcEncoder};
//!
//! let pixels = [10_u8, 20, 30, 10, 20, 31, 12, 20, 30, 12, 21, 30];
//! let options = EncoderOptions::new(2, 2, ColorSpace::RGB);
//!
//! let mut encoded = vec![];
//! HdcEncoder::new(&pixels, options).encode(&mut encoded).unwrap();
//!
//! let decoded = HdcDecoder::new(ZCursor::new(&encoded)).decode().unwrap();
//! assert_eq!(decoded, pixels);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use bitstream::{BitReader, BitWriter};
pub use codeword::{decode_uint, encode_uint, Codeword};
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use histogram::Histogram;
pub use huffman::{CodeTable, HuffmanTree};
pub use zune_core;

mod bitstream;
mod codeword;
pub mod constants;
mod decode_table;
mod decoder;
mod encoder;
mod errors;
mod histogram;
mod huffman;
pub mod predictor;
