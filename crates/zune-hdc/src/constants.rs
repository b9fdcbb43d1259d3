/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Bits used to store each of height and width in the header
pub const HDC_DIMENSION_BITS: u8 = 16;
/// Bits used to store a biased symbol in the code table
pub const HDC_SYMBOL_BITS: u8 = 9;
/// Bits used to store the length of a codeword in the code table
pub const HDC_CODE_LENGTH_BITS: u8 = 5;
/// Longest codeword the 5 bit length field can describe
pub const HDC_MAX_CODE_LENGTH: u8 = (1 << HDC_CODE_LENGTH_BITS) - 1;
/// Added to a residual before it is written so that it fits in 9 unsigned bits
pub const HDC_SYMBOL_BIAS: i32 = 255;
/// Biased symbol value marking the end of the code table
pub const HDC_END_OF_TABLE: u32 = 511;
/// Smallest residual that can be transmitted
pub const HDC_MIN_SAMPLE: i32 = -HDC_SYMBOL_BIAS;
/// Largest residual that can be transmitted
pub const HDC_MAX_SAMPLE: i32 = HDC_SYMBOL_BIAS;
/// Number of distinct symbols that can appear in a table
pub const HDC_ALPHABET_SIZE: usize = (HDC_MAX_SAMPLE - HDC_MIN_SAMPLE + 1) as usize;
/// Interleaved channels per pixel
pub const HDC_CHANNELS: usize = 3;
