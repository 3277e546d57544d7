//! Code-generation options.

/// Code assigned when the tree is a single leaf.
///
/// A one-symbol alphabet has no branches, so there is no bit to emit. Both
/// conventions are prefix-free; they differ in the resulting average length
/// (0 vs 1 bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleSymbolCode {
    /// Zero-length code.
    #[default]
    Empty,
    /// The one-bit code `0`.
    OneBit,
}

/// Options for turning a tree into codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    single_symbol: SingleSymbolCode,
}

impl Config {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code used for a single-symbol alphabet.
    pub fn single_symbol(mut self, code: SingleSymbolCode) -> Self {
        self.single_symbol = code;
        self
    }

    /// Code used for a single-symbol alphabet.
    pub fn single_symbol_code(&self) -> SingleSymbolCode {
        self.single_symbol
    }
}
