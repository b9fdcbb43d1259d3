/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and Encoder options
//!
//! This module exposes the structs through which decoders
//! and encoders get their configuration
//!
//! Both are builder style, every `set_` method consumes and returns
//! the options so that calls can be chained
pub use decoder::DecoderOptions;
pub use encoder::EncoderOptions;

mod decoder;
mod encoder;
