/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel layouts a codec can be asked to carry

/// How the samples of one pixel are laid out
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Interleaved red, green and blue samples
    RGB,
    /// RGB followed by an alpha sample
    RGBA,
    /// Same as RGB with the red and blue samples swapped
    BGR,
    /// Luma followed by two chroma samples
    YCbCr,
    /// Layout could not be determined
    Unknown
}

impl ColorSpace {
    /// Samples making up a single pixel, zero for [`ColorSpace::Unknown`]
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB | Self::BGR | Self::YCbCr => 3,
            Self::RGBA => 4,
            Self::Unknown => 0
        }
    }

    /// Short upper case name, e.g. `"RGB"`
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RGB => "RGB",
            Self::RGBA => "RGBA",
            Self::BGR => "BGR",
            Self::YCbCr => "YCbCr",
            Self::Unknown => "Unknown"
        }
    }
}
