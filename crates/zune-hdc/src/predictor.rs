/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Horizontal differential prediction
//!
//! Samples are interleaved, `channels` values per pixel and `width`
//! pixels per row. The first pixel of a row is kept as is, every other
//! one is replaced by its difference to the pixel on its left.

/// Replace samples with the difference to their left neighbour, in place
///
/// Columns are processed right to left so every difference is taken
/// against an original value. A trailing partial row is left untouched.
pub fn forward(samples: &mut [i16], width: usize, channels: usize) {
    let stride = width * channels;

    if width < 2 || channels == 0 {
        return;
    }
    for row in samples.chunks_exact_mut(stride) {
        for pos in (channels..stride).rev() {
            row[pos] = row[pos].wrapping_sub(row[pos - channels]);
        }
    }
}

/// Undo [`forward`] in place by a running sum along each row
pub fn inverse(samples: &mut [i16], width: usize, channels: usize) {
    let stride = width * channels;

    if width < 2 || channels == 0 {
        return;
    }
    for row in samples.chunks_exact_mut(stride) {
        for pos in channels..stride {
            row[pos] = row[pos].wrapping_add(row[pos - channels]);
        }
    }
}
