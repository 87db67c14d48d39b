//! # Keys - Variable Identifiers
//!
//! A [`Key`] names one vector-valued variable of an estimation problem.
//! Keys are opaque integers, but the usual convention of labeling
//! variables as `x1`, `l3`, ... is supported by packing an ASCII
//! character into the top byte (see [`Key::symbol`]).

use std::fmt;

use serde::{Deserialize, Serialize};

const CHR_BITS: u32 = 8;
const INDEX_BITS: u32 = u64::BITS - CHR_BITS;
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;

/// An opaque, totally ordered identifier for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub u64);

impl Key {
    /// Create a key from its raw integer value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Create a symbol key such as `x1` from a character and an index.
    ///
    /// Indices wider than 56 bits are truncated.
    pub const fn symbol(chr: u8, index: u64) -> Self {
        Self(((chr as u64) << INDEX_BITS) | (index & INDEX_MASK))
    }

    /// The character byte of a symbol key (0 for plain integer keys).
    pub const fn chr(&self) -> u8 {
        (self.0 >> INDEX_BITS) as u8
    }

    /// The index part of a symbol key.
    pub const fn index(&self) -> u64 {
        self.0 & INDEX_MASK
    }

    /// The raw integer value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Key {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chr = self.chr();
        if chr.is_ascii_alphabetic() {
            write!(f, "{}{}", chr as char, self.index())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Renders a key as a human-readable label in debug output.
pub type KeyFormatter<'a> = &'a dyn Fn(Key) -> String;

/// The formatter used when no other is given: the `Display` form of the key.
pub fn default_formatter(key: Key) -> String {
    key.to_string()
}
