/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

fn input(multiple: bool) -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .action(if multiple { ArgAction::Append } else { ArgAction::Set })
        .required(true)
}

fn output() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output to write the data to")
        .action(ArgAction::Set)
        .required(true)
}

fn no_prediction() -> Arg {
    Arg::new("no-prediction")
        .long("no-prediction")
        .action(ArgAction::SetTrue)
        .help_heading("CODEC")
        .help("Entropy code raw pixels instead of horizontal differences")
        .long_help("Skip the horizontal differential predictor.\nThe flag is not stored in the file, decoding must use the same setting as encoding.")
}

#[rustfmt::skip]
fn logging_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the coding options"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    let cmd = Command::new("hdc")
        .about("Lossless Huffman differential image coding")
        .subcommand_required(true)
        .subcommand(Command::new("encode")
            .about("Encode a binary PPM (P6) image")
            .arg(input(false))
            .arg(output())
            .arg(no_prediction()))
        .subcommand(Command::new("decode")
            .about("Decode an image into a binary PPM (P6) file")
            .arg(input(false))
            .arg(output())
            .arg(no_prediction())
            .arg(Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help_heading("ADVANCED")
                .help("Treat truncated or corrupt payloads as errors"))
            .arg(Arg::new("max-width")
                .long("max-width")
                .help_heading("ADVANCED")
                .help("Largest image width the decoder accepts")
                .value_parser(value_parser!(usize))
                .default_value("65535"))
            .arg(Arg::new("max-height")
                .long("max-height")
                .help_heading("ADVANCED")
                .help("Largest image height the decoder accepts")
                .value_parser(value_parser!(usize))
                .default_value("65535")))
        .subcommand(Command::new("probe")
            .about("Print header information of encoded files as JSON")
            .arg(input(true)))
        .subcommand(Command::new("ratio")
            .about("Encode PPM files in memory and report compression ratios")
            .long_about("Encode every input in memory, check that it decodes back to the same pixels\nand report original size / encoded size per file and the mean over all files")
            .arg(input(true))
            .arg(no_prediction()));

    logging_args(cmd)
}
