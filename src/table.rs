//! Symbol probability tables.
//!
//! A [`ProbabilityTable`] is the input to everything else in the crate: an
//! ordered list of `(symbol, probability)` pairs, validated once when it is
//! built and read-only afterwards. Table order matters only for tie-breaking
//! during tree construction (see [`crate::tree`]).

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;

use crate::error::{Error, Result};

/// Tolerance on `Σp` before a table is reported as not summing to one.
const SUM_TOLERANCE: f64 = 1e-6;

/// An alphabet element.
///
/// Implemented for any type that can key a hash map and be printed for
/// diagnostics: `char`, `u8`, `String`, token ids and so on.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}

/// Ordered `(symbol, probability)` pairs with unique symbols.
///
/// Every probability is finite and in `(0, 1]`. The probabilities are
/// expected to sum to roughly one; entropy and redundancy are only
/// meaningful when they do.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable<S> {
    entries: Vec<(S, f64)>,
}

impl<S: Symbol> ProbabilityTable<S> {
    /// Build a table from `(symbol, probability)` pairs.
    ///
    /// # Errors
    /// Returns `Error::InvalidProbability` if a probability is not finite or
    /// falls outside `(0, 1]`, and `Error::DuplicateSymbol` if a symbol
    /// appears more than once.
    pub fn new<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
    {
        let entries: Vec<(S, f64)> = pairs.into_iter().collect();

        if let Some(&(_, p)) = entries
            .iter()
            .find(|(_, p)| !p.is_finite() || *p <= 0.0 || *p > 1.0)
        {
            return Err(Error::InvalidProbability(p));
        }
        check_unique(entries.iter().map(|(s, _)| s))?;

        let table = Self { entries };
        let total = table.total();
        if !table.is_empty() && (total - 1.0).abs() > SUM_TOLERANCE {
            warn!("probabilities sum to {total}, not 1; entropy and redundancy may be meaningless");
        }
        Ok(table)
    }

    /// Build a table from occurrence counts, normalised by their total.
    ///
    /// Symbols with a zero count are dropped. If every count is zero the
    /// result is an empty table.
    ///
    /// # Errors
    /// Returns `Error::DuplicateSymbol` if a symbol appears more than once.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let counts: Vec<(S, u64)> = counts.into_iter().collect();
        check_unique(counts.iter().map(|(s, _)| s))?;

        // Summed in u128 so large u64 counts cannot overflow.
        let total: u128 = counts.iter().map(|&(_, c)| u128::from(c)).sum();
        Self::new(
            counts
                .into_iter()
                .filter(|&(_, c)| c > 0)
                .map(|(s, c)| (s, c as f64 / total as f64)),
        )
    }

    /// Probability of `symbol`, if present.
    pub fn probability(&self, symbol: &S) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|&(_, p)| p)
    }
}

fn check_unique<'a, S: Symbol + 'a>(symbols: impl Iterator<Item = &'a S>) -> Result<()> {
    let mut seen = HashSet::new();
    for symbol in symbols {
        if !seen.insert(symbol) {
            return Err(Error::DuplicateSymbol(format!("{symbol:?}")));
        }
    }
    Ok(())
}

impl<S> ProbabilityTable<S> {
    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> + '_ {
        self.entries.iter().map(|(s, p)| (s, *p))
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, p)| p).sum()
    }
}

impl<S> Default for ProbabilityTable<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}
