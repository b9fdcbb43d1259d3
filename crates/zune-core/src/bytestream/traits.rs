/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Sources and sinks the codecs read from and write to

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};

/// A source of encoded bytes
///
/// Decoders pull bytes strictly in order, seeking is only
/// needed by text header parsers that look one byte ahead.
pub trait ZByteReaderTrait {
    /// Fill all of `buf` or fail without consuming anything
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError>;

    /// Read up to `buf.len()` bytes, returning how many were read
    ///
    /// `Ok(0)` for a non-empty `buf` means the source is exhausted,
    /// `Err` is reserved for failures of the source itself
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError>;

    /// Move the read position, returning the new one
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError>;
}

/// A sink for encoded bytes
pub trait ZByteWriterTrait {
    /// Write every byte of `buf` or fail
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;

    /// Push buffered bytes to the underlying storage
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;

    /// Hint that `size` more bytes are coming
    ///
    /// Sinks that cannot make use of it, e.g. files, return `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError>;
}
