/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Huffman tree construction and code assignment
//!
//! The tree is kept in an arena, children are referred to by their index
//! in it. Nodes are created bottom up so a parent always sits after its children.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::codeword::Codeword;
use crate::constants::{
    HDC_ALPHABET_SIZE, HDC_CODE_LENGTH_BITS, HDC_MAX_CODE_LENGTH, HDC_MAX_SAMPLE, HDC_MIN_SAMPLE
};
use crate::errors::HdcEncodeErrors;

#[derive(Copy, Clone, Debug, PartialEq)]
enum HuffmanNode {
    Leaf {
        symbol:      i16,
        probability: f64
    },
    Internal {
        probability: f64,
        left:        usize,
        right:       usize
    }
}

impl HuffmanNode {
    fn probability(&self) -> f64 {
        match self {
            HuffmanNode::Leaf { probability, .. } | HuffmanNode::Internal { probability, .. } => {
                *probability
            }
        }
    }
}

/// A binary prefix code tree
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root:  Option<usize>
}

impl HuffmanTree {
    /// Build a tree from pairs of symbols and their probabilities
    ///
    /// On every round the live nodes are stable sorted by probability and the
    /// two first ones, `a` then `b`, are merged. If `a` is strictly less probable
    /// it becomes the left child, on a tie `b` goes left. The parent is appended
    /// after the remaining live nodes.
    ///
    /// # Errors
    /// [`HdcEncodeErrors::LengthMismatch`] if the inputs differ in length
    pub fn build(symbols: &[i16], probabilities: &[f64]) -> Result<HuffmanTree, HdcEncodeErrors> {
        if symbols.len() != probabilities.len() {
            return Err(HdcEncodeErrors::LengthMismatch(
                symbols.len(),
                probabilities.len()
            ));
        }
        let mut nodes: Vec<HuffmanNode> = symbols
            .iter()
            .zip(probabilities)
            .map(|(&symbol, &probability)| HuffmanNode::Leaf {
                symbol,
                probability
            })
            .collect();

        let mut live: Vec<usize> = (0..nodes.len()).collect();

        while live.len() > 1 {
            // sort_by is stable, ties keep the order of the previous round
            live.sort_by(|&x, &y| {
                nodes[x]
                    .probability()
                    .partial_cmp(&nodes[y].probability())
                    .unwrap_or(Ordering::Equal)
            });
            let a = live.remove(0);
            let b = live.remove(0);

            let (pa, pb) = (nodes[a].probability(), nodes[b].probability());

            let (left, right) = if pa < pb { (a, b) } else { (b, a) };

            nodes.push(HuffmanNode::Internal {
                probability: pa + pb,
                left,
                right
            });
            live.push(nodes.len() - 1);
        }

        Ok(HuffmanTree {
            root: live.first().copied(),
            nodes
        })
    }

    /// Assign a codeword to every leaf
    ///
    /// Walks the tree depth first, appending `0` when going left
    /// and `1` when going right. A tree holding a single symbol gives
    /// it the one bit codeword `0`.
    ///
    /// # Errors
    /// [`HdcEncodeErrors::RangeError`] if a leaf sits deeper than the
    /// longest codeword the stream can describe
    pub fn generate_codes(&self) -> Result<CodeTable, HdcEncodeErrors> {
        let mut table = CodeTable::new();

        let Some(root) = self.root else {
            return Ok(table);
        };

        if let HuffmanNode::Leaf { symbol, .. } = self.nodes[root] {
            table.insert(symbol, Codeword::EMPTY.with(false));
            return Ok(table);
        }

        // explicit stack, right pushed first so left is visited first
        let mut stack = vec![(root, Codeword::EMPTY)];

        while let Some((index, prefix)) = stack.pop() {
            match self.nodes[index] {
                HuffmanNode::Leaf { symbol, .. } => table.insert(symbol, prefix),
                HuffmanNode::Internal { left, right, .. } => {
                    if prefix.len() >= HDC_MAX_CODE_LENGTH {
                        return Err(HdcEncodeErrors::RangeError {
                            value: usize::from(prefix.len()) + 1,
                            width: HDC_CODE_LENGTH_BITS
                        });
                    }
                    stack.push((right, prefix.with(true)));
                    stack.push((left, prefix.with(false)));
                }
            }
        }
        Ok(table)
    }
}

/// Mapping from symbol to codeword
///
/// Iteration yields entries in ascending symbol order, which is also the
/// order in which they are serialized.
#[derive(Clone, Debug)]
pub struct CodeTable {
    // indexed by symbol - HDC_MIN_SAMPLE, empty codeword = absent
    codes: Vec<Codeword>,
    len:   usize
}

impl CodeTable {
    fn new() -> CodeTable {
        CodeTable {
            codes: vec![Codeword::EMPTY; HDC_ALPHABET_SIZE],
            len:   0
        }
    }

    fn insert(&mut self, symbol: i16, code: Codeword) {
        debug_assert!((HDC_MIN_SAMPLE..=HDC_MAX_SAMPLE).contains(&i32::from(symbol)));
        debug_assert!(!code.is_empty());

        let slot = &mut self.codes[(i32::from(symbol) - HDC_MIN_SAMPLE) as usize];
        if slot.is_empty() {
            self.len += 1;
        }
        *slot = code;
    }

    /// Codeword assigned to `symbol`, if any
    #[inline]
    pub fn get(&self, symbol: i16) -> Option<&Codeword> {
        let index = usize::try_from(i32::from(symbol) - HDC_MIN_SAMPLE).ok()?;

        self.codes.get(index).filter(|code| !code.is_empty())
    }

    /// Number of symbols with a codeword
    pub const fn len(&self) -> usize {
        self.len
    }
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (i16, &Codeword)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(index, code)| ((index as i32 + HDC_MIN_SAMPLE) as i16, code))
    }

    /// Total payload bits needed to code `counts[i]` occurrences of `symbols[i]`
    pub fn payload_bits(&self, symbols: &[i16], counts: &[u64]) -> u64 {
        symbols
            .iter()
            .zip(counts)
            .map(|(&symbol, &count)| {
                self.get(symbol).map_or(0, |code| u64::from(code.len()) * count)
            })
            .sum()
    }
}
