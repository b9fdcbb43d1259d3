/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The reader [`ZReader`] wraps anything implementing [`ZByteReaderTrait`]
//! and the writer [`ZWriter`] wraps anything implementing [`ZByteWriterTrait`].
//!
//! Implementations are provided for in memory buffers ([`ZCursor`] and `&mut Vec<u8>`)
//! and, with the `std` feature, for buffered files.
pub use reader::zcursor::ZCursor;
pub use reader::{ZByteIoError, ZReader, ZSeekFrom};
pub use traits::{ZByteReaderTrait, ZByteWriterTrait};
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
