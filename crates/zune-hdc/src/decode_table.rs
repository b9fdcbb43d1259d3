/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit-by-bit codeword lookup used by the decoder
//!
//! Codewords are stored in a binary trie, each bit read moves one
//! node down. Reaching a leaf yields a symbol and restarts at the root.

use alloc::vec;
use alloc::vec::Vec;

use crate::codeword::Codeword;
use crate::errors::HdcErrors;

/// Index of the root node, no node can have the root as a child
const ROOT: u32 = 0;

#[derive(Copy, Clone, Default)]
struct TrieNode {
    // ROOT means no child
    children: [u32; 2],
    symbol:   Option<i16>
}

impl TrieNode {
    const fn is_interior(&self) -> bool {
        self.children[0] != ROOT || self.children[1] != ROOT
    }
}

/// Outcome of feeding one bit to a [`DecodeTable`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// More bits are needed, continue from this node
    Partial(u32),
    /// A complete codeword was read
    Symbol(i16),
    /// No codeword starts with the bits read so far
    Invalid
}

/// Prefix code lookup built from a transmitted code table
pub struct DecodeTable {
    nodes:   Vec<TrieNode>,
    symbols: usize
}

impl DecodeTable {
    pub fn new() -> DecodeTable {
        DecodeTable {
            nodes:   vec![TrieNode::default()],
            symbols: 0
        }
    }

    /// Add a codeword for `symbol`
    ///
    /// # Errors
    /// [`HdcErrors::InvalidCodeTable`] if `code` is empty, equal to a codeword
    /// already present, or a prefix of one (or has one as a prefix)
    pub fn insert(&mut self, code: &Codeword, symbol: i16) -> Result<(), HdcErrors> {
        if code.is_empty() {
            return Err(HdcErrors::InvalidCodeTable("empty codeword"));
        }
        let mut node = ROOT as usize;

        for bit in code.iter() {
            if self.nodes[node].symbol.is_some() {
                return Err(HdcErrors::InvalidCodeTable(
                    "a codeword is a prefix of another codeword"
                ));
            }
            let child = self.nodes[node].children[usize::from(bit)];

            node = if child == ROOT {
                let new_index = u32::try_from(self.nodes.len())
                    .map_err(|_| HdcErrors::GenericStatic("Too many codewords"))?;

                self.nodes.push(TrieNode::default());
                self.nodes[node].children[usize::from(bit)] = new_index;
                new_index as usize
            } else {
                child as usize
            };
        }
        let leaf = &mut self.nodes[node];

        if leaf.symbol.is_some() {
            return Err(HdcErrors::InvalidCodeTable("duplicate codeword"));
        }
        if leaf.is_interior() {
            return Err(HdcErrors::InvalidCodeTable(
                "a codeword is a prefix of another codeword"
            ));
        }
        leaf.symbol = Some(symbol);
        self.symbols += 1;

        Ok(())
    }

    /// Node every codeword starts from
    pub const fn root(&self) -> u32 {
        ROOT
    }

    /// Move from `node` along `bit`
    #[inline]
    pub fn step(&self, node: u32, bit: bool) -> Step {
        let child = self.nodes[node as usize].children[usize::from(bit)];

        if child == ROOT {
            return Step::Invalid;
        }
        match self.nodes[child as usize].symbol {
            Some(symbol) => Step::Symbol(symbol),
            None => Step::Partial(child)
        }
    }

    /// Number of codewords stored
    pub const fn len(&self) -> usize {
        self.symbols
    }
}

impl Default for DecodeTable {
    fn default() -> Self {
        DecodeTable::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::codeword::Codeword;
    use crate::decode_table::{DecodeTable, Step};
    use crate::errors::HdcErrors;

    fn code(bits: &str) -> Codeword {
        bits.bytes()
            .fold(Codeword::EMPTY, |code, bit| code.with(bit == b'1'))
    }

    fn decode_one(table: &DecodeTable, bits: &str) -> Step {
        let mut node = table.root();
        for bit in bits.bytes() {
            match table.step(node, bit == b'1') {
                Step::Partial(next) => node = next,
                other => return other
            }
        }
        Step::Partial(node)
    }

    #[test]
    fn walks_to_symbols() {
        let mut table = DecodeTable::new();
        table.insert(&code("00"), 3).unwrap();
        table.insert(&code("01"), 0).unwrap();
        table.insert(&code("1"), 10).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(decode_one(&table, "1"), Step::Symbol(10));
        assert_eq!(decode_one(&table, "01"), Step::Symbol(0));
        assert_eq!(decode_one(&table, "00"), Step::Symbol(3));
        assert!(matches!(decode_one(&table, "0"), Step::Partial(_)));
    }

    #[test]
    fn incomplete_tree_reports_invalid_paths() {
        let mut table = DecodeTable::new();
        table.insert(&code("10"), -7).unwrap();

        assert_eq!(decode_one(&table, "0"), Step::Invalid);
        assert_eq!(decode_one(&table, "11"), Step::Invalid);
        assert_eq!(decode_one(&table, "10"), Step::Symbol(-7));

        assert_eq!(DecodeTable::new().step(0, true), Step::Invalid);
    }

    #[test]
    fn conflicting_codewords_are_rejected() {
        let mut table = DecodeTable::new();
        table.insert(&code("01"), 1).unwrap();

        for bad in ["01", "0", "011"] {
            match table.insert(&code(bad), 2) {
                Err(HdcErrors::InvalidCodeTable(_)) => (),
                _ => panic!("{bad} conflicts with 01")
            }
        }
        assert!(matches!(
            table.insert(&Codeword::EMPTY, 2),
            Err(HdcErrors::InvalidCodeTable(_))
        ));
        assert_eq!(table.len(), 1);
    }
}
