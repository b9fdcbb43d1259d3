/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::EncoderOptions;

use crate::bitstream::BitWriter;
use crate::codeword::{encode_uint, Codeword};
use crate::constants::{
    HDC_CHANNELS, HDC_CODE_LENGTH_BITS, HDC_DIMENSION_BITS, HDC_END_OF_TABLE, HDC_MAX_SAMPLE,
    HDC_MIN_SAMPLE, HDC_SYMBOL_BIAS, HDC_SYMBOL_BITS
};
use crate::errors::HdcEncodeErrors;
use crate::histogram::Histogram;
use crate::huffman::{CodeTable, HuffmanTree};
use crate::predictor;

const SUPPORTED_COLORSPACES: [ColorSpace; 3] = [ColorSpace::RGB, ColorSpace::BGR, ColorSpace::YCbCr];

enum Samples<'a> {
    Eight(&'a [u8]),
    Wide(&'a [i16])
}

impl Samples<'_> {
    fn len(&self) -> usize {
        match self {
            Samples::Eight(data) => data.len(),
            Samples::Wide(data) => data.len()
        }
    }
    fn widen(&self) -> Vec<i16> {
        match self {
            Samples::Eight(data) => data.iter().map(|&x| i16::from(x)).collect(),
            Samples::Wide(data) => data.to_vec()
        }
    }
}

/// A Huffman differential image encoder
///
/// # Example
/// - Encode a 16 by 16 RGB image
///
/// ```
/// use zune_core::colorspace::ColorSpace;
/// use zune_core::options::EncoderOptions;
/// use zune_hdc::{HdcEncodeErrors, HdcEncoder};
///
/// const W: usize = 16;
/// const H: usize = 16;
///
/// fn main() -> Result<(), HdcEncodeErrors> {
///     let pixels = std::array::from_fn::<u8, { W * H * 3 }, _>(|i| (i % 256) as u8);
///     let mut encoder = HdcEncoder::new(&pixels, EncoderOptions::new(W, H, ColorSpace::RGB));
///     let mut sink = vec![];
///     let size = encoder.encode(&mut sink)?;
///     assert_eq!(size, sink.len());
///     Ok(())
/// }
/// ```
pub struct HdcEncoder<'a> {
    samples: Samples<'a>,
    options: EncoderOptions
}

impl<'a> HdcEncoder<'a> {
    /// Create a new encoder for 8 bit pixels
    ///
    /// # Arguments
    /// - data: Interleaved pixels, length must be `width*height*3`
    /// - options: Dimensions, colorspace and whether to predict
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> HdcEncoder<'a> {
        HdcEncoder {
            samples: Samples::Eight(data),
            options
        }
    }

    /// Create a new encoder for samples that are already widened
    ///
    /// Samples may be any value as long as every sample
    /// (or residual, with prediction on) fits in `-255..=255`
    pub const fn new_wide(data: &'a [i16], options: EncoderOptions) -> HdcEncoder<'a> {
        HdcEncoder {
            samples: Samples::Wide(data),
            options
        }
    }

    fn validate(&self) -> Result<(Codeword, Codeword), HdcEncodeErrors> {
        let colorspace = self.options.colorspace();

        if colorspace.num_components() != HDC_CHANNELS || !SUPPORTED_COLORSPACES.contains(&colorspace)
        {
            return Err(HdcEncodeErrors::UnsupportedColorspace(
                colorspace,
                &SUPPORTED_COLORSPACES
            ));
        }
        let expected_len = self
            .options
            .width()
            .checked_mul(self.options.height())
            .and_then(|x| x.checked_mul(HDC_CHANNELS))
            .ok_or(HdcEncodeErrors::Generic("Image dimensions overflow"))?;

        if self.samples.len() != expected_len {
            return Err(HdcEncodeErrors::Generic(
                "Expected length doesn't match pixels length"
            ));
        }
        let height = encode_uint(self.options.height(), HDC_DIMENSION_BITS)?;
        let width = encode_uint(self.options.width(), HDC_DIMENSION_BITS)?;

        Ok((height, width))
    }

    /// Encode the image into `sink`
    ///
    /// Everything that can fail, apart from the sink itself,
    /// is checked before the first byte is written
    ///
    /// # Returns
    /// - Ok(size): Number of bytes written to the sink
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&mut self, sink: T) -> Result<usize, HdcEncodeErrors> {
        let (height, width) = self.validate()?;

        let mut residuals = self.samples.widen();

        if self.options.use_prediction() {
            predictor::forward(&mut residuals, self.options.width(), HDC_CHANNELS);
        }
        if let Some(&bad) = residuals
            .iter()
            .find(|&&x| !(HDC_MIN_SAMPLE..=HDC_MAX_SAMPLE).contains(&i32::from(x)))
        {
            return Err(HdcEncodeErrors::SampleRange(i32::from(bad)));
        }

        let histogram = Histogram::build(&residuals);
        let tree = HuffmanTree::build(histogram.symbols(), histogram.probabilities())?;
        let table = tree.generate_codes()?;

        trace!("Image width: {}", self.options.width());
        trace!("Image height: {}", self.options.height());
        trace!("Distinct symbols: {}", table.len());
        #[cfg(feature = "std")]
        {
            trace!("Residual entropy: {:.4} bits/sample", histogram.entropy());
        }

        let payload_bits = table.payload_bits(histogram.symbols(), histogram.counts());
        let table_bits: u64 = table
            .iter()
            .map(|(_, code)| u64::from(HDC_SYMBOL_BITS + HDC_CODE_LENGTH_BITS + code.len()))
            .sum();

        let total_bits =
            u64::from(2 * HDC_DIMENSION_BITS + HDC_SYMBOL_BITS) + table_bits + payload_bits;

        trace!("Payload bits: {payload_bits}, table bits: {table_bits}");

        let mut stream = ZWriter::new(sink);
        stream.reserve(total_bits.div_ceil(8) as usize)?;

        let mut writer = BitWriter::new(&mut stream);

        writer.put_codeword(&height)?;
        writer.put_codeword(&width)?;

        write_table(&table, &mut writer)?;

        for &sample in &residuals {
            let code = table
                .get(sample)
                .ok_or(HdcEncodeErrors::Generic("Sample has no codeword"))?;
            writer.put_codeword(code)?;
        }
        let written = writer.close()?;

        trace!("Wrote {written} bytes");

        Ok(written)
    }
}

/// Serialize `table` in ascending symbol order followed by the terminator
fn write_table<T: ZByteWriterTrait>(
    table: &CodeTable, writer: &mut BitWriter<T>
) -> Result<(), HdcEncodeErrors> {
    for (symbol, code) in table.iter() {
        let biased = (i32::from(symbol) + HDC_SYMBOL_BIAS) as usize;

        writer.put_codeword(&encode_uint(biased, HDC_SYMBOL_BITS)?)?;
        writer.put_codeword(&encode_uint(usize::from(code.len()), HDC_CODE_LENGTH_BITS)?)?;
        writer.put_codeword(code)?;
    }
    writer.put_bits(HDC_SYMBOL_BITS, HDC_END_OF_TABLE)?;
    Ok(())
}
