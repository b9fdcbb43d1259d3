/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::run_subcommand;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    let Some((name, args)) = options.subcommand() else {
        error!("No subcommand given");
        exit(-1);
    };

    cmd_parsers::global_options::setup_logger(args);

    let result = run_subcommand(name, args);

    if let Err(reason) = result {
        println!();
        error!(" Could not complete {name}, reason {reason:?}");
        println!();
        exit(-1);
    }
}
