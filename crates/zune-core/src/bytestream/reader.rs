/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

pub(crate) mod std_readers;
pub(crate) mod zcursor;

use crate::bytestream::ZByteReaderTrait;

/// Where a seek is measured from
///
/// Mirrors `std::io::SeekFrom` so that seeking works without `std`
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum ZSeekFrom {
    Start(u64),
    End(i64),
    Current(i64)
}

#[cfg(feature = "std")]
impl From<ZSeekFrom> for std::io::SeekFrom {
    fn from(value: ZSeekFrom) -> Self {
        match value {
            ZSeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            ZSeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            ZSeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

/// Failures of a byte source or sink
pub enum ZByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// A position does not fit the integer type it is converted to
    TryFromIntError(core::num::TryFromIntError),
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes left
    NotEnoughBytes(usize, usize),
    SeekError(&'static str),
    Generic(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => writeln!(f, "{err}"),
            ZByteIoError::TryFromIntError(err) => writeln!(f, "Position out of range: {err}"),
            ZByteIoError::NotEnoughBytes(requested, left) => {
                writeln!(f, "Requested {requested} bytes but only {left} are left")
            }
            ZByteIoError::SeekError(err) => writeln!(f, "Cannot seek: {err}"),
            ZByteIoError::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ZByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ZByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// Byte-at-a-time access to a [`ZByteReaderTrait`] source
pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }

    /// Read the next byte
    ///
    /// # Returns
    /// - `Ok(Some(byte))`: The next byte
    /// - `Ok(None)`: The source has no more bytes
    /// - `Err(e)`: The source failed
    #[inline]
    pub fn get_u8_or_eof(&mut self) -> Result<Option<u8>, ZByteIoError> {
        let mut byte = [0];

        if self.inner.read_bytes(&mut byte)? == 0 {
            return Ok(None);
        }
        Ok(Some(byte[0]))
    }

    /// Fill `buf` completely or fail
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    /// Step back `num` bytes
    pub fn rewind(&mut self, num: usize) -> Result<u64, ZByteIoError> {
        let offset = i64::try_from(num)?;
        self.inner.z_seek(ZSeekFrom::Current(-offset))
    }
}
