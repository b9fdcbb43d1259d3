/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

/// Possible Errors that may occur during decoding
pub enum HdcErrors {
    /// The stream ran out of bits before the decoder was done
    ///
    /// Always raised when the header or the code table is cut short,
    /// raised for the payload only in strict mode.
    ///
    /// # Arguments
    /// - `decoded`: number of fields or samples read before the stream ended
    /// - `expected`: number of fields or samples the decoder needed
    StreamExhausted { decoded: usize, expected: usize },
    /// Image dimensions exceed the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the width found in the header
    /// - 2nd argument is the height found in the header
    TooLargeDimensions(usize, usize),
    /// The code table contains entries that would make
    /// the code ambiguous, e.g. one codeword prefixing another
    InvalidCodeTable(&'static str),
    /// The payload contains a bit sequence which no codeword starts with
    InvalidCode,
    /// A decoded sample cannot be represented in 8 bits
    SampleOutOfRange(i32),
    /// Generic message
    Generic(String),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for HdcErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            HdcErrors::StreamExhausted { decoded, expected } => {
                writeln!(
                    f,
                    "Stream exhausted after {decoded} of {expected} expected items"
                )
            }
            HdcErrors::TooLargeDimensions(width, height) => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed configured decoder limits"
                )
            }
            HdcErrors::InvalidCodeTable(reason) => {
                writeln!(f, "Invalid code table: {reason}")
            }
            HdcErrors::InvalidCode => {
                writeln!(f, "Bit sequence in payload matches no codeword")
            }
            HdcErrors::SampleOutOfRange(value) => {
                writeln!(f, "Decoded sample {value} is outside the 8 bit range 0..=255")
            }
            HdcErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            HdcErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            HdcErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl From<&'static str> for HdcErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for HdcErrors {
    fn from(value: ZByteIoError) -> Self {
        HdcErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum HdcEncodeErrors {
    /// A value does not fit in the fixed width field reserved for it
    ///
    /// Raised for dimensions above 16 bits and codewords longer than
    /// the 5 bit length field can describe
    RangeError { value: usize, width: u8 },
    /// A sample (after prediction, if enabled) falls outside `-255..=255`
    /// and cannot be written as a 9 bit biased symbol
    SampleRange(i32),
    /// Symbols and probabilities handed to the Huffman builder
    /// differ in length
    ///
    /// # Arguments
    /// - 1st argument is the number of symbols
    /// - 2nd argument is the number of probabilities
    LengthMismatch(usize, usize),
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),

    Generic(&'static str),

    IoError(ZByteIoError)
}

impl Debug for HdcEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            HdcEncodeErrors::RangeError { value, width } => {
                writeln!(
                    f,
                    "Value {value} cannot be stored in {width} bits, maximum is {}",
                    (1_u64 << width) - 1
                )
            }
            HdcEncodeErrors::SampleRange(value) => {
                writeln!(
                    f,
                    "Sample {value} outside the encodable range -255..=255"
                )
            }
            HdcEncodeErrors::LengthMismatch(symbols, probabilities) => {
                writeln!(
                    f,
                    "Got {symbols} symbols but {probabilities} probabilities"
                )
            }
            HdcEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into HDC, supported ones are {supported:?}")
            }
            HdcEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            HdcEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for HdcEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for HdcErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HdcEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for HdcErrors {}

impl From<ZByteIoError> for HdcEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}
