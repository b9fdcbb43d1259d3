/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Knobs shared by decoders

/// Limits and behaviour switches handed to a decoder
///
/// Built with the `set_*` methods, starting from [`DecoderOptions::default`]
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Images wider than this are refused before any sample is decoded
    ///
    /// Defaults to 65535, the widest image a 16 bit header can describe
    max_width:      usize,
    /// Images taller than this are refused before any sample is decoded
    max_height:     usize,
    /// Turn recoverable stream damage into errors.
    ///
    /// Off by default, in which case the damage is logged and the decoder
    /// fills in what it could not read.
    strict_mode:    bool,
    /// Samples are left-neighbour residuals and must be integrated.
    ///
    /// Streams do not record this, it must agree with the encoder.
    use_prediction: bool
}

impl DecoderOptions {
    /// Defaults without dimension limits, for tools where the user
    /// named the file explicitly
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }

    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub const fn use_prediction(&self) -> bool {
        self.use_prediction
    }

    /// Refuse images wider than `width`
    pub const fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Refuse images taller than `height`
    pub const fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Report truncated or corrupt payloads as errors instead of
    /// logging and zero filling
    pub const fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Run decoded samples through the inverse predictor
    pub const fn set_use_prediction(mut self, yes: bool) -> Self {
        self.use_prediction = yes;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:      usize::from(u16::MAX),
            max_height:     usize::from(u16::MAX),
            strict_mode:    false,
            use_prediction: true
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn builder_chains() {
        let options = DecoderOptions::default()
            .set_max_width(10)
            .set_max_height(20)
            .set_strict_mode(true)
            .set_use_prediction(false);

        assert_eq!(options.max_width(), 10);
        assert_eq!(options.max_height(), 20);
        assert!(options.strict_mode());
        assert!(!options.use_prediction());
    }

    #[test]
    fn default_limits_cover_16_bit_dimensions() {
        let options = DecoderOptions::default();
        assert_eq!(options.max_width(), 65535);
        assert_eq!(options.max_height(), 65535);
        assert!(!options.strict_mode());
    }

    #[test]
    fn cmd_options_lift_limits() {
        let options = DecoderOptions::new_cmd();
        assert_eq!(options.max_width(), usize::MAX);
        assert!(options.use_prediction());
    }
}
