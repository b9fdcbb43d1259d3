/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::colorspace::ColorSpace;

/// Options shared by encoders
///
/// Describes the pixels handed to the encoder and
/// how the encoder should treat them
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:          usize,
    height:         usize,
    colorspace:     ColorSpace,
    use_prediction: bool
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:          0,
            height:         0,
            colorspace:     ColorSpace::RGB,
            use_prediction: true
        }
    }
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`:  Image colorspaces
    ///
    /// returns: `EncoderOptions`
    pub fn new(width: usize, height: usize, colorspace: ColorSpace) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace,
            ..Default::default()
        }
    }
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Get the colorspace for which the image will be encoded in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }
    /// Whether pixels are replaced by horizontal differences
    /// before entropy coding
    ///
    /// - Default value: true
    pub const fn use_prediction(&self) -> bool {
        self.use_prediction
    }

    /// Set width for the image to be encoded
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set height for the image to be encoded
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    /// Set colorspace for the image to be encoded
    pub fn set_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }
    /// Set whether pixels are run through the horizontal
    /// predictor before entropy coding
    pub fn set_use_prediction(mut self, yes: bool) -> Self {
        self.use_prediction = yes;
        self
    }
}
