/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing binary PPM (P6) files with 8 bit samples

use log::{debug, info};
use zune_core::bytestream::{ZByteIoError, ZByteReaderTrait, ZByteWriterTrait, ZReader, ZWriter};

use crate::errors::CliErrors;

/// Interleaved RGB pixels and their dimensions
pub struct PpmImage {
    pub width:  usize,
    pub height: usize,
    pub pixels: Vec<u8>
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces<T: ZByteReaderTrait>(stream: &mut ZReader<T>) -> Result<(), ZByteIoError> {
    while let Some(mut byte) = stream.get_u8_or_eof()? {
        if byte == b'#' {
            // skip the whole comment
            while byte != b'\n' {
                match stream.get_u8_or_eof()? {
                    Some(next) => byte = next,
                    None => return Ok(())
                }
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            stream.rewind(1)?;
            break;
        }
    }
    Ok(())
}

fn get_integer<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, field: &str
) -> Result<usize, CliErrors> {
    let mut value = 0_usize;
    let mut digits = 0;

    while let Some(byte) = stream.get_u8_or_eof()? {
        if !byte.is_ascii_digit() {
            stream.rewind(1)?;
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(byte - b'0')))
            .ok_or_else(|| CliErrors::PpmErrors(format!("{field} is too large")))?;
        digits += 1;
    }
    if digits == 0 {
        return Err(CliErrors::PpmErrors(format!("Missing {field}")));
    }
    Ok(value)
}

/// Read a P6 file with a maximum value of 255
pub fn read_ppm<T: ZByteReaderTrait>(stream: &mut ZReader<T>) -> Result<PpmImage, CliErrors> {
    let mut magic = [0; 2];
    stream
        .read_exact_bytes(&mut magic)
        .map_err(|_| CliErrors::PpmErrors("File too short".to_string()))?;

    if &magic != b"P6" {
        return Err(CliErrors::PpmErrors(format!(
            "Expected P6 magic bytes, found {:?}",
            String::from_utf8_lossy(&magic)
        )));
    }
    skip_spaces(stream)?;
    let width = get_integer(stream, "width")?;
    skip_spaces(stream)?;
    let height = get_integer(stream, "height")?;
    skip_spaces(stream)?;
    let max_value = get_integer(stream, "max value")?;

    if max_value != 255 {
        return Err(CliErrors::PpmErrors(format!(
            "Max value {max_value} not supported, only 8 bit (255) images are"
        )));
    }
    // exactly one whitespace separates the header from the raster
    match stream.get_u8_or_eof()? {
        Some(byte) if byte.is_ascii_whitespace() => (),
        _ => return Err(CliErrors::PpmErrors("Missing whitespace after header".to_string()))
    }
    info!("Width: {}, height: {}", width, height);

    let size = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(3))
        .ok_or_else(|| CliErrors::PpmErrors("Image dimensions overflow".to_string()))?;

    let mut pixels = vec![0; size];
    stream
        .read_exact_bytes(&mut pixels)
        .map_err(|_| CliErrors::PpmErrors(format!("Expected {size} bytes of pixels")))?;

    debug!("Read {size} bytes of pixels");

    Ok(PpmImage {
        width,
        height,
        pixels
    })
}

/// Write interleaved RGB pixels as a P6 file
pub fn write_ppm<T: ZByteWriterTrait>(
    sink: T, width: usize, height: usize, pixels: &[u8]
) -> Result<usize, CliErrors> {
    let mut writer = ZWriter::new(sink);

    let header = format!("P6\n{width}\n{height}\n255\n");

    writer.write_all(header.as_bytes())?;
    writer.write_all(pixels)?;
    writer.flush()?;

    Ok(writer.bytes_written())
}

#[cfg(test)]
mod tests {
    use zune_core::bytestream::{ZCursor, ZReader};

    use crate::errors::CliErrors;
    use crate::file_io::{read_ppm, write_ppm};

    fn parse(data: &[u8]) -> Result<super::PpmImage, CliErrors> {
        read_ppm(&mut ZReader::new(ZCursor::new(data)))
    }

    #[test]
    fn header_with_comments() {
        let mut data = b"P6 # made by hand\n2 # width\n1\n255\n".to_vec();
        // pixels starting with a whitespace byte value
        data.extend_from_slice(&[b'\n', 1, 2, 3, 4, 5]);

        let image = parse(&data).unwrap();
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.pixels, [b'\n', 1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_unsupported_files() {
        assert!(matches!(parse(b"P3\n1 1\n255\n"), Err(CliErrors::PpmErrors(_))));
        assert!(matches!(parse(b"P6\n1 1\n65535\n"), Err(CliErrors::PpmErrors(_))));
        assert!(matches!(parse(b"P6\n1 1\n255\n\x01\x02"), Err(CliErrors::PpmErrors(_))));
        assert!(matches!(parse(b"P6\n \n"), Err(CliErrors::PpmErrors(_))));
        assert!(matches!(parse(b"P"), Err(CliErrors::PpmErrors(_))));
    }

    #[test]
    fn written_files_read_back() {
        let pixels: Vec<u8> = (0..4 * 3 * 3).collect();
        let mut sink = vec![];

        let size = write_ppm(&mut sink, 4, 3, &pixels).unwrap();
        assert_eq!(size, sink.len());
        assert!(sink.starts_with(b"P6\n4\n3\n255\n"));

        let image = parse(&sink).unwrap();
        assert_eq!((image.width, image.height), (4, 3));
        assert_eq!(image.pixels, pixels);
    }
}
