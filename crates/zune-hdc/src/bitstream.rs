/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit I/O functionalities
//!
//! Both directions are MSB-first, the first bit written/read is the
//! most significant bit of the first byte.

use zune_core::bytestream::{ZByteIoError, ZByteReaderTrait, ZByteWriterTrait, ZReader, ZWriter};

use crate::codeword::Codeword;

/// A bit writer that packs bits into an already existing
/// byte writer
///
/// Complete bytes are handed to the sink as soon as they are formed,
/// the last partial byte is zero padded by [`close`](BitWriter::close)
pub struct BitWriter<'a, T: ZByteWriterTrait> {
    // pending bits, right aligned, at most 7 between calls
    buffer:         u64,
    bits_in_buffer: u8,
    dest:           &'a mut ZWriter<T>
}

impl<'a, T: ZByteWriterTrait> BitWriter<'a, T> {
    /// Construct a new bit-writer
    pub fn new(dest: &'a mut ZWriter<T>) -> BitWriter<'a, T> {
        BitWriter {
            buffer: 0,
            bits_in_buffer: 0,
            dest
        }
    }

    /// Write complete bytes to the sink, keeping the remaining 0-7 bits
    fn flush(&mut self) -> Result<(), ZByteIoError> {
        let mut scratch = [0_u8; 8];
        let mut count = 0;

        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            scratch[count] = (self.buffer >> self.bits_in_buffer) as u8;
            count += 1;
        }
        // remove those bits we wrote.
        self.buffer &= (1_u64 << self.bits_in_buffer) - 1;

        if count > 0 {
            self.dest.write_all(&scratch[..count])?;
        }
        Ok(())
    }

    /// Put the low `nbits` bits of `value`, most significant first
    ///
    /// # Arguments
    /// - nbits: Number of bits to store, at most 32
    /// - value: The bits, right aligned
    pub fn put_bits(&mut self, nbits: u8, value: u32) -> Result<(), ZByteIoError> {
        debug_assert!(nbits <= 32);

        let mask = (1_u64 << nbits) - 1;

        self.buffer = (self.buffer << nbits) | (u64::from(value) & mask);
        self.bits_in_buffer += nbits;

        if self.bits_in_buffer >= 8 {
            self.flush()?;
        }
        Ok(())
    }

    /// Put every bit of `code`
    #[inline]
    pub fn put_codeword(&mut self, code: &Codeword) -> Result<(), ZByteIoError> {
        self.put_bits(code.len(), code.bits())
    }

    /// Zero pad the last partial byte, write it and flush the sink
    ///
    /// Returns the number of bytes the sink received in total
    pub fn close(mut self) -> Result<usize, ZByteIoError> {
        if self.bits_in_buffer != 0 {
            self.put_bits(8 - self.bits_in_buffer, 0)?;
        }
        debug_assert_eq!(self.bits_in_buffer, 0);

        self.dest.flush()?;
        Ok(self.dest.bytes_written())
    }
}

/// A bit reader pulling one byte at a time from a [`ZReader`]
///
/// When the source runs out the reader becomes exhausted and stays so,
/// every later read returns `None` instead of an error.
pub struct BitReader<T: ZByteReaderTrait> {
    stream:    ZReader<T>,
    current:   u8,
    bits_left: u8,
    exhausted: bool
}

impl<T: ZByteReaderTrait> BitReader<T> {
    pub fn new(stream: ZReader<T>) -> BitReader<T> {
        BitReader {
            stream,
            current: 0,
            bits_left: 0,
            exhausted: false
        }
    }

    /// Read the next bit
    ///
    /// # Returns
    /// - `Ok(Some(bit))`: the next bit
    /// - `Ok(None)`: the source is exhausted
    /// - `Err(e)`: the underlying source failed
    #[inline]
    pub fn read_bit(&mut self) -> Result<Option<bool>, ZByteIoError> {
        if self.exhausted {
            return Ok(None);
        }
        if self.bits_left == 0 {
            match self.stream.get_u8_or_eof()? {
                Some(byte) => {
                    self.current = byte;
                    self.bits_left = 8;
                }
                None => {
                    self.exhausted = true;
                    return Ok(None);
                }
            }
        }
        self.bits_left -= 1;

        Ok(Some((self.current >> self.bits_left) & 1 == 1))
    }

    /// Read a `width` bit field
    ///
    /// Returns `None` if the source ran out before all bits were read
    pub fn read_bits(&mut self, width: u8) -> Result<Option<Codeword>, ZByteIoError> {
        let mut field = Codeword::EMPTY;

        for _ in 0..width {
            match self.read_bit()? {
                Some(bit) => field.push(bit),
                None => return Ok(None)
            }
        }
        Ok(Some(field))
    }

    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Stop reading, every later read reports exhaustion
    pub fn close(&mut self) {
        self.exhausted = true;
        self.bits_left = 0;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use zune_core::bytestream::{ZCursor, ZReader, ZWriter};

    use crate::bitstream::{BitReader, BitWriter};
    use crate::codeword::Codeword;

    fn write_with<F>(func: F) -> Vec<u8>
    where
        F: FnOnce(&mut BitWriter<&mut Vec<u8>>)
    {
        let mut sink = vec![];
        let mut stream = ZWriter::new(&mut sink);
        let mut writer = BitWriter::new(&mut stream);
        func(&mut writer);
        let written = writer.close().unwrap();
        assert_eq!(written, sink.len());
        sink
    }

    #[test]
    fn partial_byte_is_zero_padded() {
        let out = write_with(|w| {
            w.put_bits(3, 0b101).unwrap();
        });
        assert_eq!(out, [0b1010_0000]);
    }

    #[test]
    fn byte_aligned_stream_gets_no_padding() {
        let out = write_with(|w| {
            w.put_bits(16, 0xABCD).unwrap();
        });
        assert_eq!(out, [0xAB, 0xCD]);

        assert!(write_with(|_| {}).is_empty());
    }

    #[test]
    fn fields_straddle_bytes() {
        let out = write_with(|w| {
            w.put_bits(9, 511).unwrap();
            w.put_bits(5, 0b00011).unwrap();
            w.put_codeword(&Codeword::EMPTY.with(true).with(true)).unwrap();
        });
        // 1111_1111 1000_1111
        assert_eq!(out, [0xFF, 0x8F]);
    }

    #[test]
    fn reader_is_msb_first_and_sticky() {
        let mut reader = BitReader::new(ZReader::new(ZCursor::new([0b1000_0001_u8])));

        assert_eq!(reader.read_bit().ok(), Some(Some(true)));
        for _ in 0..6 {
            assert_eq!(reader.read_bit().ok(), Some(Some(false)));
        }
        assert_eq!(reader.read_bit().ok(), Some(Some(true)));
        assert!(!reader.is_exhausted());

        assert_eq!(reader.read_bit().ok(), Some(None));
        assert!(reader.is_exhausted());
        assert_eq!(reader.read_bit().ok(), Some(None));
    }

    #[test]
    fn reader_fields_and_close() {
        let mut reader = BitReader::new(ZReader::new(ZCursor::new([0xFF_u8, 0x8F])));

        let field = reader.read_bits(9).ok().flatten().unwrap();
        assert_eq!(field.bits(), 511);
        // 7 bits remain, a 9 bit field cannot be completed
        assert!(reader.read_bits(9).ok().flatten().is_none());
        assert!(reader.is_exhausted());

        let mut reader = BitReader::new(ZReader::new(ZCursor::new([0xFF_u8])));
        reader.close();
        assert_eq!(reader.read_bit().ok(), Some(None));
    }
}
