#![cfg(feature = "std")]

use std::io::{BufWriter, Write};

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

impl<W: Write> ZByteWriterTrait for BufWriter<W> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        Ok(self.write_all(buf)?)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(self.flush()?)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        Ok(())
    }
}
