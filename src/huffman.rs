//! One-call pipeline: table, tree, codes, metrics.
//!
//! [`HuffmanCode`] chains [`build_tree`], [`generate_codes_with`] and
//! [`Metrics::compute`]. The tree only lives inside the constructor.

use crate::code::{generate_codes_with, CodeTable};
use crate::config::Config;
use crate::error::Result;
use crate::metrics::Metrics;
use crate::table::{ProbabilityTable, Symbol};
use crate::tree::build_tree;

/// A Huffman code together with its quality metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanCode<S: Symbol> {
    codes: CodeTable<S>,
    metrics: Metrics,
}

impl<S: Symbol> HuffmanCode<S> {
    /// Build the code for `table` with default options.
    ///
    /// # Errors
    /// Returns `Error::EmptyTable` for an empty table.
    pub fn new(table: &ProbabilityTable<S>) -> Result<Self> {
        Self::with_config(table, &Config::default())
    }

    /// Build the code for `table`.
    ///
    /// The tree is dropped once the codes have been read off it.
    ///
    /// # Errors
    /// Returns `Error::EmptyTable` for an empty table.
    pub fn with_config(table: &ProbabilityTable<S>, config: &Config) -> Result<Self> {
        let codes = {
            let root = build_tree(table)?;
            generate_codes_with(Some(&root), config)
        };
        let metrics = Metrics::compute(table, &codes)?;
        Ok(Self { codes, metrics })
    }

    /// The code table.
    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    /// Entropy, average length and redundancy.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Split into the code table and metrics.
    pub fn into_parts(self) -> (CodeTable<S>, Metrics) {
        (self.codes, self.metrics)
    }
}
