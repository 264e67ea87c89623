use crate::io::configuration::{ASCII_RANGE, DEFAULT_FEATURE_SYMBOLS};
use crate::io::error::{Result, invalid_parameter};
use bitvec::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Set of tile symbols counted as features in the level header
///
/// Symbols are stored in uppercase and matched case-insensitively. Only
/// printable 7-bit ASCII can be a feature, so membership is a 128-bit table
/// indexed by code point.
#[derive(Clone, PartialEq, Eq)]
pub struct FeatureSet {
    bits: BitArray<[u64; 2]>,
}

impl FeatureSet {
    /// Create a set with no symbols
    pub const fn empty() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Build a set from a string of symbols, e.g. `"grmwsc"`
    ///
    /// Duplicates and case differences collapse to a single symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if `symbols` is empty or contains whitespace, control
    /// or non-ASCII characters
    pub fn from_symbols(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(invalid_parameter(
                "features",
                &symbols,
                &"at least one feature symbol is required",
            ));
        }

        let mut set = Self::empty();
        for symbol in symbols.chars() {
            if !symbol.is_ascii_graphic() {
                return Err(invalid_parameter(
                    "features",
                    &symbols,
                    &format!("{symbol:?} is not a printable ASCII symbol"),
                ));
            }
            set.insert(symbol);
        }
        Ok(set)
    }

    /// Add a symbol, returning `false` if it cannot be represented
    ///
    /// Symbols outside 7-bit ASCII are rejected.
    pub fn insert(&mut self, symbol: char) -> bool {
        match Self::slot(symbol) {
            Some(index) => {
                self.bits.set(index, true);
                true
            }
            None => false,
        }
    }

    /// Test membership, ignoring case
    pub fn contains(&self, symbol: char) -> bool {
        Self::slot(symbol).is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test membership of a raw byte, ignoring case
    pub fn contains_byte(&self, byte: u8) -> bool {
        self.contains(char::from(byte))
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no symbols are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// All symbols in code point order
    pub fn symbols(&self) -> Vec<char> {
        self.bits
            .iter_ones()
            .filter_map(|index| u8::try_from(index).ok())
            .map(char::from)
            .collect()
    }

    /// Count feature tiles in a row
    pub fn count_in(&self, row: &str) -> usize {
        row.bytes().filter(|&byte| self.contains_byte(byte)).count()
    }

    /// Count feature tiles in a row per symbol, adding into `tally`
    ///
    /// Keys are the uppercase symbols.
    pub fn tally_into(&self, row: &str, tally: &mut BTreeMap<char, usize>) {
        for byte in row.bytes() {
            if self.contains_byte(byte) {
                *tally
                    .entry(char::from(byte.to_ascii_uppercase()))
                    .or_insert(0) += 1;
            }
        }
    }

    // Uppercase code point, or None outside the table
    fn slot(symbol: char) -> Option<usize> {
        let index = symbol.to_ascii_uppercase() as usize;
        (index < ASCII_RANGE).then_some(index)
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        let mut set = Self::empty();
        for symbol in DEFAULT_FEATURE_SYMBOLS.chars() {
            set.insert(symbol);
        }
        set
    }
}

impl FromStr for FeatureSet {
    type Err = crate::io::error::LevelError;

    fn from_str(symbols: &str) -> Result<Self> {
        Self::from_symbols(symbols)
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureSet({self})")
    }
}
