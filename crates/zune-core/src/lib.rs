/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the hdc codec crates
//!
//! It currently contains
//!
//! - A bytestream reader and writer over pluggable sources and sinks
//! - Colorspace information shared by images
//! - Image decoder and encoder options
//! - A logging facade that compiles to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded bytes.
//!
//!
//! # Features
//!  - `std`: Implements the reader and writer traits for buffered files.
//!
//!  - `log`: Routes the logging macros to the [`log`](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod colorspace;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
mod serde;

#[cfg(feature = "log")]
pub use log;
