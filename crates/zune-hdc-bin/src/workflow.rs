/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::BufWriter;

use clap::ArgMatches;
use log::{debug, info};
use zune_core::bytestream::{ZByteWriterTrait, ZCursor, ZReader};
use zune_core::options::DecoderOptions;
use zune_hdc::{HdcDecoder, HdcEncoder};

use crate::cmd_parsers::{get_decoder_options, get_encoder_options, use_prediction};
use crate::errors::CliErrors;
use crate::file_io::{read_ppm, write_ppm, PpmImage};
use crate::probe_files::probe_input_files;
use crate::serde::RatioReport;

pub fn run_subcommand(name: &str, args: &ArgMatches) -> Result<(), CliErrors> {
    match name {
        "encode" => encode_file(args),
        "decode" => decode_file(args),
        "probe" => probe_input_files(args),
        "ratio" => report_ratios(args),
        _ => unreachable!("clap rejects unknown subcommands")
    }
}

fn in_out(args: &ArgMatches) -> (&String, &String) {
    // both are required, clap fails before we get here if missing
    (
        args.get_one::<String>("in").unwrap(),
        args.get_one::<String>("out").unwrap()
    )
}

fn create_output(path: &str) -> Result<BufWriter<File>, CliErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    Ok(BufWriter::new(file))
}

fn load_ppm(path: &str) -> Result<(PpmImage, usize), CliErrors> {
    let data = std::fs::read(path)?;
    let image = read_ppm(&mut ZReader::new(ZCursor::new(&data)))?;

    Ok((image, data.len()))
}

fn encode_image<T: ZByteWriterTrait>(
    args: &ArgMatches, image: &PpmImage, sink: T
) -> Result<usize, CliErrors> {
    let options = get_encoder_options(args, image.width, image.height);

    Ok(HdcEncoder::new(&image.pixels, options).encode(sink)?)
}

fn encode_file(args: &ArgMatches) -> Result<(), CliErrors> {
    let (in_file, out_file) = in_out(args);

    info!("Encoding {in_file} to {out_file}");

    let (image, _) = load_ppm(in_file)?;
    let size = encode_image(args, &image, create_output(out_file)?)?;

    info!("Wrote {size} bytes to {out_file}");
    Ok(())
}

fn decode_file(args: &ArgMatches) -> Result<(), CliErrors> {
    let (in_file, out_file) = in_out(args);

    info!("Decoding {in_file} to {out_file}");

    let data = std::fs::read(in_file)?;
    let mut decoder =
        HdcDecoder::new_with_options(ZCursor::new(&data), get_decoder_options(args));

    let pixels = decoder.decode()?;
    let (width, height) = decoder
        .dimensions()
        .ok_or(CliErrors::PpmErrors("Dimensions unknown after decoding".to_string()))?;

    let size = write_ppm(create_output(out_file)?, width, height, &pixels)?;

    info!("Wrote {size} bytes to {out_file}");
    Ok(())
}

/// Encode `image` in memory, check it decodes back and return the encoded size
fn round_trip(args: &ArgMatches, file: &str, image: &PpmImage) -> Result<usize, CliErrors> {
    let mut encoded = vec![];
    let size = encode_image(args, image, &mut encoded)?;

    let options = DecoderOptions::new_cmd()
        .set_use_prediction(use_prediction(args))
        .set_strict_mode(true);

    let decoded = HdcDecoder::new_with_options(ZCursor::new(&encoded), options).decode()?;

    if decoded != image.pixels {
        return Err(CliErrors::RoundTripMismatch(file.to_string()));
    }
    Ok(size)
}

fn report_ratios(args: &ArgMatches) -> Result<(), CliErrors> {
    let mut ratios = vec![];

    for in_file in args.get_many::<String>("in").into_iter().flatten() {
        let (image, original_size) = load_ppm(in_file)?;
        let encoded_size = round_trip(args, in_file, &image)?;

        let report = RatioReport {
            file: in_file,
            original_size,
            encoded_size
        };
        debug!("{in_file}: {original_size} -> {encoded_size} bytes");

        println!("{}", serde_json::to_string(&report)?);
        ratios.push(report.ratio());
    }
    if let Some(mean) = mean(&ratios) {
        println!("Mean compression ratio: {mean:.4}");
    }
    Ok(())
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::file_io::PpmImage;
    use crate::workflow::{mean, round_trip};

    #[test]
    fn mean_of_ratios() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 3.0, 4.0]), Some(3.0));
    }

    #[test]
    fn in_memory_round_trip() {
        let image = PpmImage {
            width:  4,
            height: 2,
            pixels: (0..24).map(|x| (x * 9) as u8).collect()
        };
        for extra in [None, Some("--no-prediction")] {
            let mut argv = vec!["hdc", "ratio", "-i", "a.ppm"];
            argv.extend(extra);

            let matches = create_cmd_args().try_get_matches_from(argv).unwrap();
            let args = matches.subcommand().unwrap().1;

            let size = round_trip(args, "a.ppm", &image).unwrap();
            assert!(size > 0);
        }
    }
}
