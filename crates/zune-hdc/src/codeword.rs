/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit-packed codewords and fixed width unsigned fields

use core::fmt::{Display, Formatter};

use crate::errors::HdcEncodeErrors;

/// Longest bit sequence a [`Codeword`] can hold
pub const MAX_CODEWORD_BITS: u8 = 32;

/// A short sequence of bits, stored MSB-first
///
/// The first bit of the sequence is bit `len - 1` of `bits`,
/// the last one is bit `0`. Bits above `len` are always zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Codeword {
    bits: u32,
    len:  u8
}

impl Codeword {
    /// The empty sequence
    pub const EMPTY: Codeword = Codeword { bits: 0, len: 0 };

    /// Number of bits in the sequence
    pub const fn len(&self) -> u8 {
        self.len
    }
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// The bits, right aligned
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Append a bit at the end of the sequence
    ///
    /// # Panics
    /// If the codeword already holds [`MAX_CODEWORD_BITS`] bits
    pub fn push(&mut self, bit: bool) {
        assert!(self.len < MAX_CODEWORD_BITS, "Codeword overflow");
        self.bits = (self.bits << 1) | u32::from(bit);
        self.len += 1;
    }

    /// Return a copy with `bit` appended
    #[must_use]
    pub fn with(mut self, bit: bool) -> Codeword {
        self.push(bit);
        self
    }

    /// Bit at `position`, counting from the first bit sent
    pub const fn bit(&self, position: u8) -> bool {
        debug_assert!(position < self.len);
        (self.bits >> (self.len - 1 - position)) & 1 == 1
    }

    /// Iterate over the bits in transmission order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |position| self.bit(position))
    }

    /// Whether `self` is a prefix of `other`
    ///
    /// Every codeword is a prefix of itself
    pub const fn is_prefix_of(&self, other: &Codeword) -> bool {
        if self.len > other.len {
            return false;
        }
        if self.len == 0 {
            return true;
        }
        (other.bits >> (other.len - self.len)) == self.bits
    }
}

impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

/// Represent `value` as a `width` bit unsigned field
///
/// The result is MSB-first and zero padded on the left
///
/// # Errors
/// [`HdcEncodeErrors::RangeError`] if `value` needs more than `width` bits
///
/// # Example
/// ```
/// use zune_hdc::{decode_uint, encode_uint};
/// let field = encode_uint(5, 4).unwrap();
/// assert_eq!(field.to_string(), "0101");
/// assert_eq!(decode_uint(field), 5);
/// assert!(encode_uint(16, 4).is_err());
/// ```
pub fn encode_uint(value: usize, width: u8) -> Result<Codeword, HdcEncodeErrors> {
    debug_assert!(width > 0 && width < MAX_CODEWORD_BITS);

    let max_value = (1_usize << width) - 1;

    if value > max_value {
        return Err(HdcEncodeErrors::RangeError { value, width });
    }
    Ok(Codeword {
        bits: value as u32,
        len:  width
    })
}

/// Read an MSB-first unsigned field back into an integer
///
/// The width of the field is the length of `field`
pub const fn decode_uint(field: Codeword) -> u32 {
    field.bits
}
