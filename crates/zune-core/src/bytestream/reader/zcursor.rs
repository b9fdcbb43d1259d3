/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// An in-memory source of bytes
///
/// Running past the end is never an I/O error, short reads
/// simply return fewer bytes.
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Number of bytes left between the current position and the end
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
    fn unread(&self) -> &[u8] {
        self.stream.as_ref().get(self.position..).unwrap_or_default()
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let unread = self.unread();

        if unread.len() < buf.len() {
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), unread.len()));
        }
        buf.copy_from_slice(&unread[..buf.len()]);
        self.position += buf.len();
        Ok(())
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let amount = buf.len().min(self.remaining());

        buf[..amount].copy_from_slice(&self.unread()[..amount]);
        self.position += amount;

        Ok(amount)
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        let new_position = match from {
            ZSeekFrom::Start(position) => i64::try_from(position)?,
            ZSeekFrom::End(offset) => i64::try_from(self.stream.as_ref().len())? + offset,
            ZSeekFrom::Current(offset) => i64::try_from(self.position)? + offset
        };
        if new_position < 0 {
            return Err(ZByteIoError::SeekError("Seeking before the start of the cursor"));
        }
        self.position = usize::try_from(new_position)?;

        Ok(self.position as u64)
    }
}
