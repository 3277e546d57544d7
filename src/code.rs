//! Code generation from a Huffman tree.
//!
//! Codes are read off the tree by a depth-first walk: `0` for every step to
//! a left child, `1` for every step to a right child. Distinct leaves have
//! distinct paths, so the resulting set of codes is prefix-free.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::config::{Config, SingleSymbolCode};
use crate::table::Symbol;
use crate::tree::Node;

/// A code word: one `0`/`1` value per element.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<u8>);

impl Code {
    /// The bits, root first.
    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` is a prefix of `other` (equal codes count).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<u8>> for Code {
    fn from(bits: Vec<u8>) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping, one entry per tree leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, Code>,
}

impl<S: Symbol> CodeTable<S> {
    /// Code for `symbol`, if it has one.
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> + '_ {
        self.codes.iter()
    }

    /// Longest code length, or 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Whether no code is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&Code> = self.codes.values().collect();
        sorted.sort();
        // After sorting, any prefix sits directly before a code it prefixes.
        sorted.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }

    /// Kraft sum `Σ 2^(-len)`; at most 1 for any prefix-free code.
    pub fn kraft_sum(&self) -> f64 {
        self.codes
            .values()
            .map(|c| 0.5f64.powi(c.len().min(i32::MAX as usize) as i32))
            .sum()
    }
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }
}

/// Generate codes from `root` with default options.
///
/// `None` yields an empty table.
pub fn generate_codes<S: Symbol>(root: Option<&Node<S>>) -> CodeTable<S> {
    generate_codes_with(root, &Config::default())
}

/// Generate codes from `root`.
///
/// `config` decides the code for a tree that is a single leaf.
pub fn generate_codes_with<S: Symbol>(root: Option<&Node<S>>, config: &Config) -> CodeTable<S> {
    let mut table = CodeTable::default();
    let Some(root) = root else {
        return table;
    };

    match root {
        Node::Leaf { symbol, .. } => {
            let bits = match config.single_symbol_code() {
                SingleSymbolCode::Empty => Vec::new(),
                SingleSymbolCode::OneBit => vec![0],
            };
            table.codes.insert(symbol.clone(), Code(bits));
        }
        Node::Internal { .. } => build_codes(root, Vec::new(), &mut table.codes),
    }

    debug!(
        "generated {} codes, longest {} bits",
        table.len(),
        table.max_len()
    );
    table
}

fn build_codes<S: Symbol>(node: &Node<S>, prefix: Vec<u8>, codes: &mut HashMap<S, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), Code(prefix));
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            build_codes(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            build_codes(right, right_prefix, codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ProbabilityTable;
    use crate::tree::build_tree;

    fn codes_for(pairs: &[(char, f64)]) -> CodeTable<char> {
        let table = ProbabilityTable::new(pairs.iter().copied()).unwrap();
        let root = build_tree(&table).unwrap();
        generate_codes(Some(&root))
    }

    #[test]
    fn test_three_symbols() {
        let codes = codes_for(&[('a', 0.5), ('b', 0.25), ('c', 0.25)]);
        assert_eq!(codes.len(), 3);
        assert_eq!(codes.get(&'a').unwrap().to_string(), "0");
        assert_eq!(codes.get(&'b').unwrap().to_string(), "10");
        assert_eq!(codes.get(&'c').unwrap().to_string(), "11");
        assert!(codes.is_prefix_free());
        assert_eq!(codes.kraft_sum(), 1.0);
        assert_eq!(codes.max_len(), 2);
    }

    #[test]
    fn test_absent_root() {
        let codes = generate_codes::<char>(None);
        assert!(codes.is_empty());
        assert_eq!(codes.max_len(), 0);
        assert_eq!(codes.kraft_sum(), 0.0);
    }

    #[test]
    fn test_single_leaf_conventions() {
        let table = ProbabilityTable::new([('a', 1.0)]).unwrap();
        let root = build_tree(&table).unwrap();

        let empty = generate_codes(Some(&root));
        assert!(empty.get(&'a').unwrap().is_empty());
        assert!(empty.is_prefix_free());

        let config = Config::new().single_symbol(SingleSymbolCode::OneBit);
        let one_bit = generate_codes_with(Some(&root), &config);
        assert_eq!(one_bit.get(&'a').unwrap().bits(), &[0]);
    }

    #[test]
    fn test_prefix_detection() {
        let mut table = CodeTable::default();
        table.codes.insert('a', Code::from(vec![0]));
        table.codes.insert('b', Code::from(vec![0, 1]));
        assert!(!table.is_prefix_free());

        table.codes.insert('b', Code::from(vec![1, 0]));
        table.codes.insert('c', Code::from(vec![1, 1]));
        assert!(table.is_prefix_free());

        table.codes.insert('d', Code::from(vec![1, 1]));
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_display() {
        assert_eq!(Code::from(vec![1, 0, 1, 1]).to_string(), "1011");
        assert_eq!(Code::default().to_string(), "");
    }
}
