/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// Log level picked by the logging flags, most verbose wins
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use log::Level;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::log_level;

    fn level_for(args: &[&str]) -> Level {
        let matches = create_cmd_args().try_get_matches_from(args).unwrap();
        log_level(matches.subcommand().unwrap().1)
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(level_for(&["hdc", "probe", "-i", "a.hdc"]), Level::Warn);
        assert_eq!(level_for(&["hdc", "probe", "-i", "a.hdc", "--warn"]), Level::Warn);
    }

    #[test]
    fn verbose_flags() {
        assert_eq!(level_for(&["hdc", "probe", "-i", "a.hdc", "--info"]), Level::Info);
        assert_eq!(
            level_for(&["hdc", "--debug", "probe", "-i", "a.hdc", "--info"]),
            Level::Debug
        );
        assert_eq!(
            level_for(&["hdc", "probe", "--trace", "-i", "a.hdc", "--debug"]),
            Level::Trace
        );
    }
}
