/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};

pub mod global_options;

/// Whether `--no-prediction` was left out
pub fn use_prediction(options: &ArgMatches) -> bool {
    !options.get_flag("no-prediction")
}

/// Options for the `decode` subcommand
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let mut decoder_options = DecoderOptions::new_cmd()
        .set_use_prediction(use_prediction(options))
        .set_strict_mode(options.get_flag("strict"));

    if let Some(&width) = options.get_one::<usize>("max-width") {
        decoder_options = decoder_options.set_max_width(width);
    }
    if let Some(&height) = options.get_one::<usize>("max-height") {
        decoder_options = decoder_options.set_max_height(height);
    }
    decoder_options
}

pub fn get_encoder_options(options: &ArgMatches, width: usize, height: usize) -> EncoderOptions {
    EncoderOptions::new(width, height, ColorSpace::RGB).set_use_prediction(use_prediction(options))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::{get_decoder_options, get_encoder_options};

    #[test]
    fn decoder_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "hdc",
                "decode",
                "-i",
                "a.hdc",
                "-o",
                "a.ppm",
                "--strict",
                "--no-prediction",
                "--max-width",
                "100"
            ])
            .unwrap();
        let options = get_decoder_options(matches.subcommand().unwrap().1);

        assert!(options.strict_mode());
        assert!(!options.use_prediction());
        assert_eq!(options.max_width(), 100);
        assert_eq!(options.max_height(), 65535);
    }

    #[test]
    fn encoder_predicts_by_default() {
        let matches = create_cmd_args()
            .try_get_matches_from(["hdc", "encode", "-i", "a.ppm", "-o", "a.hdc"])
            .unwrap();
        let options = get_encoder_options(matches.subcommand().unwrap().1, 3, 4);

        assert!(options.use_prediction());
        assert_eq!((options.width(), options.height()), (3, 4));
    }
}
