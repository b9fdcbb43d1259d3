/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

/// Empirical distribution of the samples of one image
///
/// Only symbols that occur are kept, in ascending order, so every
/// entry has a strictly positive probability.
#[derive(Clone, Debug, Default)]
pub struct Histogram {
    symbols:       Vec<i16>,
    counts:        Vec<u64>,
    probabilities: Vec<f64>,
    total:         u64
}

impl Histogram {
    /// Count every sample over the range `min(samples)..=max(samples)`
    ///
    /// An empty input gives an empty histogram
    pub fn build(samples: &[i16]) -> Histogram {
        let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
            return Histogram::default();
        };
        let mut bins = vec![0_u64; (i32::from(max) - i32::from(min) + 1) as usize];

        for &sample in samples {
            bins[(i32::from(sample) - i32::from(min)) as usize] += 1;
        }
        let total = samples.len() as u64;

        let mut histogram = Histogram {
            total,
            ..Default::default()
        };

        for (offset, &count) in bins.iter().enumerate() {
            if count == 0 {
                continue;
            }
            histogram.symbols.push((i32::from(min) + offset as i32) as i16);
            histogram.counts.push(count);
            histogram.probabilities.push(count as f64 / total as f64);
        }
        histogram
    }
    /// Symbols that occur, ascending
    pub fn symbols(&self) -> &[i16] {
        &self.symbols
    }
    /// Probability of each entry in [`symbols`](Self::symbols)
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
    /// Occurrences of each entry in [`symbols`](Self::symbols)
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
    /// Number of samples counted
    pub const fn total(&self) -> u64 {
        self.total
    }
    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Shannon entropy of the distribution in bits per sample
    ///
    /// This is the lower bound on the average codeword length
    /// any prefix code can achieve for these samples
    #[cfg(feature = "std")]
    pub fn entropy(&self) -> f64 {
        self.probabilities
            .iter()
            .map(|&probability| -probability * probability.log2())
            .sum()
    }
}
