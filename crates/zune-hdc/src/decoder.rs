/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use alloc::{format, vec};

use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{error, trace, warn};
use zune_core::options::DecoderOptions;

use crate::bitstream::BitReader;
use crate::codeword::decode_uint;
use crate::constants::{
    HDC_CHANNELS, HDC_CODE_LENGTH_BITS, HDC_DIMENSION_BITS, HDC_END_OF_TABLE, HDC_SYMBOL_BIAS,
    HDC_SYMBOL_BITS
};
use crate::decode_table::{DecodeTable, Step};
use crate::errors::HdcErrors;
use crate::predictor;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum DecoderState {
    Start,
    Headers,
    Finished,
    // bits were consumed by a failed call, the stream position is unknown
    Failed
}

/// A Huffman differential image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to read the header and code table
/// or [`decode`] to return uncompressed pixels
///
/// Width, height and the size of the code table are
/// accessible after decoding headers
///
/// Whether the image was predicted is not stored in the stream,
/// [`DecoderOptions::set_use_prediction`] must agree with the encoder
///
/// The image can be decoded once. Later calls, and any call after
/// an error, return an error instead of reading more of the stream.
///
/// [`decode_headers`]:HdcDecoder::decode_headers
/// [`decode`]:HdcDecoder::decode
pub struct HdcDecoder<T>
where
    T: ZByteReaderTrait
{
    width:   usize,
    height:  usize,
    state:   DecoderState,
    table:   DecodeTable,
    stream:  BitReader<T>,
    options: DecoderOptions
}

impl<T> HdcDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new decoder with the default options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use zune_core::bytestream::ZCursor;
    /// let mut decoder = zune_hdc::HdcDecoder::new(ZCursor::new(&[]));
    /// ```
    pub fn new(data: T) -> HdcDecoder<T> {
        HdcDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder that obeys specified restrictions
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_core::options::DecoderOptions;
    /// use zune_hdc::HdcDecoder;
    ///
    /// // only decode images less than 10 in both width and height
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = HdcDecoder::new_with_options(ZCursor::new([]), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> HdcDecoder<T> {
        HdcDecoder {
            width: 0,
            height: 0,
            state: DecoderState::Start,
            table: DecodeTable::new(),
            stream: BitReader::new(ZReader::new(data)),
            options
        }
    }

    fn read_field(&mut self, width: u8, decoded: usize, expected: usize) -> Result<u32, HdcErrors> {
        match self.stream.read_bits(width)? {
            Some(field) => Ok(decode_uint(field)),
            None => Err(HdcErrors::StreamExhausted { decoded, expected })
        }
    }

    /// Read the image dimensions and the code table
    ///
    /// # Returns
    /// - On success: Nothing
    /// - On error: The error encountered, an instance of [`HdcErrors`]
    pub fn decode_headers(&mut self) -> Result<(), HdcErrors> {
        match self.state {
            DecoderState::Start => (),
            DecoderState::Headers | DecoderState::Finished => return Ok(()),
            DecoderState::Failed => {
                return Err(HdcErrors::GenericStatic(
                    "Decoder cannot be used after an earlier error"
                ))
            }
        }
        let result = self.read_headers();

        if result.is_err() {
            self.state = DecoderState::Failed;
        }
        result
    }

    fn read_headers(&mut self) -> Result<(), HdcErrors> {
        let height = self.read_field(HDC_DIMENSION_BITS, 0, 2)? as usize;
        let width = self.read_field(HDC_DIMENSION_BITS, 1, 2)? as usize;

        if width > self.options.max_width() || height > self.options.max_height() {
            return Err(HdcErrors::TooLargeDimensions(width, height));
        }

        let mut table = DecodeTable::new();
        let mut entries = 0;

        loop {
            let symbol = self.read_field(HDC_SYMBOL_BITS, entries, entries + 1)?;

            if symbol == HDC_END_OF_TABLE {
                break;
            }
            let length = self.read_field(HDC_CODE_LENGTH_BITS, entries, entries + 1)?;

            let code = self
                .stream
                .read_bits(length as u8)?
                .ok_or(HdcErrors::StreamExhausted {
                    decoded:  entries,
                    expected: entries + 1
                })?;

            let residual = (symbol as i32 - HDC_SYMBOL_BIAS) as i16;

            if code.is_empty() {
                warn!("Skipping zero length codeword for symbol {residual}");
            } else {
                table.insert(&code, residual)?;
            }
            entries += 1;
        }
        self.width = width;
        self.height = height;
        self.table = table;
        self.state = DecoderState::Headers;

        trace!("Image width: {}", self.width);
        trace!("Image height: {}", self.height);
        trace!("Code table entries: {}", self.table.len());

        Ok(())
    }

    /// Decode the signed samples of the image
    ///
    /// Samples are interleaved, `width*height*3` of them. With prediction on,
    /// the running sum is already applied.
    ///
    /// If the payload ends early or holds a bit sequence matching no codeword,
    /// strict mode returns an error, otherwise the remaining samples are left as zero.
    pub fn decode_samples(&mut self) -> Result<Vec<i16>, HdcErrors> {
        self.decode_headers()?;

        if self.state == DecoderState::Finished {
            return Err(HdcErrors::GenericStatic("Image already decoded"));
        }
        let result = self.read_samples();

        self.state = if result.is_ok() {
            DecoderState::Finished
        } else {
            DecoderState::Failed
        };
        result
    }

    fn read_samples(&mut self) -> Result<Vec<i16>, HdcErrors> {
        let expected = self
            .output_buffer_size()
            .ok_or(HdcErrors::GenericStatic("Image dimensions overflow"))?;

        let mut samples = vec![0_i16; expected];
        let mut decoded = 0;

        'samples: while decoded < expected {
            let mut node = self.table.root();
            loop {
                let Some(bit) = self.stream.read_bit()? else {
                    if self.options.strict_mode() {
                        return Err(HdcErrors::StreamExhausted { decoded, expected });
                    }
                    error!("Stream exhausted after {decoded} of {expected} samples, filling the rest with zeroes");
                    break 'samples;
                };
                match self.table.step(node, bit) {
                    Step::Partial(next) => node = next,
                    Step::Symbol(symbol) => {
                        samples[decoded] = symbol;
                        decoded += 1;
                        continue 'samples;
                    }
                    Step::Invalid => {
                        if self.options.strict_mode() {
                            return Err(HdcErrors::InvalidCode);
                        }
                        error!("Invalid code after {decoded} of {expected} samples, filling the rest with zeroes");
                        break 'samples;
                    }
                }
            }
        }
        self.stream.close();

        if self.options.use_prediction() {
            predictor::inverse(&mut samples, self.width, HDC_CHANNELS);
        }
        trace!("Finished decoding image");

        Ok(samples)
    }

    /// Decode the image, returning 8 bit interleaved pixels
    ///
    /// # Returns
    /// - On success: The decoded pixels, `width*height*3` of them
    /// - On error: An instance of [`HdcErrors`] describing why the image could not be decoded
    pub fn decode(&mut self) -> Result<Vec<u8>, HdcErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(HdcErrors::GenericStatic("Image dimensions overflow"))?;

        let mut output = vec![0; size];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode the image into `pixels`
    ///
    /// Returns an error if the buffer cannot hold the image.
    ///
    /// Samples outside `0..=255` are an error in strict mode,
    /// otherwise they are clamped
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), HdcErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(HdcErrors::GenericStatic("Image dimensions overflow"))?;

        if pixels.len() < size {
            return Err(HdcErrors::Generic(format!(
                "Output buffer too small, expected {size} but found {}",
                pixels.len()
            )));
        }
        let samples = self.decode_samples()?;

        let mut clamped = 0_usize;

        for (pixel, &sample) in pixels.iter_mut().zip(&samples) {
            *pixel = match u8::try_from(sample) {
                Ok(value) => value,
                Err(_) => {
                    if self.options.strict_mode() {
                        return Err(HdcErrors::SampleOutOfRange(i32::from(sample)));
                    }
                    clamped += 1;
                    sample.clamp(0, 255) as u8
                }
            };
        }
        if clamped > 0 {
            warn!("Clamped {clamped} samples outside 0..=255");
        }
        Ok(())
    }

    const fn headers_ready(&self) -> bool {
        matches!(self.state, DecoderState::Headers | DecoderState::Finished)
    }

    /// Return the number of samples in a decoded image
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Headers were not decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.headers_ready() {
            self.width
                .checked_mul(self.height)?
                .checked_mul(HDC_CHANNELS)
        } else {
            None
        }
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.headers_ready() {
            return Some((self.width, self.height));
        }
        None
    }

    /// Colorspace of decoded pixels, always RGB once headers are decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.headers_ready() {
            Some(ColorSpace::RGB)
        } else {
            None
        }
    }

    /// Number of codewords in the transmitted table
    pub const fn code_table_len(&self) -> Option<usize> {
        if self.headers_ready() {
            Some(self.table.len())
        } else {
            None
        }
    }
}
