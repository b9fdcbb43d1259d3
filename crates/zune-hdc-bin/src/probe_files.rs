/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::info;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_hdc::HdcDecoder;

use crate::errors::CliErrors;
use crate::serde::ProbeReport;

/// Probe input files, extract header information, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), CliErrors> {
    for in_file in args.get_many::<String>("in").into_iter().flatten() {
        info!("Probing {in_file}");

        let data = std::fs::read(in_file)?;
        // set to high to remove restrictions.
        // We'll just be reading headers so it doesn't matter
        let mut decoder = HdcDecoder::new_with_options(ZCursor::new(&data), DecoderOptions::new_cmd());
        decoder.decode_headers()?;

        let (width, height) = decoder.dimensions().unwrap_or_default();

        let report = ProbeReport {
            file: in_file,
            size: data.len() as u64,
            width,
            height,
            colorspace: decoder.colorspace().unwrap_or(ColorSpace::Unknown),
            code_table_entries: decoder.code_table_len().unwrap_or_default()
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
