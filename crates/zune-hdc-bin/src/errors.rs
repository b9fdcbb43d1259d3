/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;
use zune_hdc::{HdcEncodeErrors, HdcErrors};

/// Errors the command line driver can run into
pub enum CliErrors {
    IoError(std::io::Error),
    ByteIoError(ZByteIoError),
    EncodeErrors(HdcEncodeErrors),
    DecodeErrors(HdcErrors),
    /// Input is not a binary PPM file we can handle
    PpmErrors(String),
    /// Decoding an encoded file did not give back the original pixels
    RoundTripMismatch(String),
    JsonErrors(serde_json::Error)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::IoError(err) => writeln!(f, "I/O error: {err}"),
            CliErrors::ByteIoError(err) => writeln!(f, "I/O error: {err:?}"),
            CliErrors::EncodeErrors(err) => writeln!(f, "Encoding failed: {err:?}"),
            CliErrors::DecodeErrors(err) => writeln!(f, "Decoding failed: {err:?}"),
            CliErrors::PpmErrors(msg) => writeln!(f, "Invalid PPM: {msg}"),
            CliErrors::RoundTripMismatch(file) => {
                writeln!(f, "Decoded pixels of {file} differ from the original")
            }
            CliErrors::JsonErrors(err) => writeln!(f, "Could not serialize report: {err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoError(value)
    }
}

impl From<ZByteIoError> for CliErrors {
    fn from(value: ZByteIoError) -> Self {
        CliErrors::ByteIoError(value)
    }
}

impl From<HdcEncodeErrors> for CliErrors {
    fn from(value: HdcEncodeErrors) -> Self {
        CliErrors::EncodeErrors(value)
    }
}

impl From<HdcErrors> for CliErrors {
    fn from(value: HdcErrors) -> Self {
        CliErrors::DecodeErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::JsonErrors(value)
    }
}
