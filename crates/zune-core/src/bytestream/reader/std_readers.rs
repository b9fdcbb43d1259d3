#![cfg(feature = "std")]

use std::io::{BufReader, ErrorKind, Read, Seek};

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};
use crate::bytestream::ZByteReaderTrait;

impl<T: Read + Seek> ZByteReaderTrait for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        Ok(self.read_exact(buf)?)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        loop {
            match self.read(buf) {
                Ok(bytes_read) => return Ok(bytes_read),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into())
            }
        }
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        Ok(self.seek(from.into())?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use crate::bytestream::ZReader;

    #[test]
    fn buffered_reader_source() {
        let mut reader = ZReader::new(BufReader::new(Cursor::new(vec![7_u8, 8])));

        assert_eq!(reader.get_u8_or_eof().ok(), Some(Some(7)));
        assert!(reader.rewind(1).is_ok());
        assert_eq!(reader.get_u8_or_eof().ok(), Some(Some(7)));
        assert_eq!(reader.get_u8_or_eof().ok(), Some(Some(8)));
        assert_eq!(reader.get_u8_or_eof().ok(), Some(None));
    }
}
