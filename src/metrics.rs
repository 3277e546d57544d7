//! Information-theoretic quality metrics for a code.
//!
//! For a source with probabilities `p_s` and a code with lengths `l_s`:
//!
//! ```text
//! H = -Σ p_s · log2(p_s)      entropy, bits/symbol
//! L =  Σ p_s · l_s            average code length, bits/symbol
//! R =  L - H                  redundancy
//! ```
//!
//! Shannon's source coding theorem gives `H <= L` for any prefix code, and a
//! Huffman code also satisfies `L < H + 1`.
//!
//! Zero probabilities are rejected rather than treated as contributing 0:
//! [`ProbabilityTable`] never holds one, so seeing one here means the
//! caller broke an invariant.

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::table::{ProbabilityTable, Symbol};

/// Entropy of `table` in bits per symbol.
///
/// # Errors
/// Returns `Error::InvalidProbability` for a probability that is not finite
/// and positive.
pub fn entropy<S>(table: &ProbabilityTable<S>) -> Result<f64> {
    table.iter().try_fold(0.0, |h, (_, p)| {
        if !p.is_finite() || p <= 0.0 {
            return Err(Error::InvalidProbability(p));
        }
        Ok(h - p * p.log2())
    })
}

/// Probability-weighted mean code length in bits per symbol.
///
/// # Errors
/// Returns `Error::MissingCode` if a symbol of `table` has no code.
pub fn average_code_length<S: Symbol>(
    table: &ProbabilityTable<S>,
    codes: &CodeTable<S>,
) -> Result<f64> {
    table.iter().try_fold(0.0, |l, (symbol, p)| {
        let code = codes
            .get(symbol)
            .ok_or_else(|| Error::MissingCode(format!("{symbol:?}")))?;
        Ok(l + p * code.len() as f64)
    })
}

/// Redundancy `average_length - entropy`.
pub fn redundancy(average_length: f64, entropy: f64) -> f64 {
    average_length - entropy
}

/// Coding efficiency `entropy / average_length`.
///
/// A zero-length code for a zero-entropy source counts as fully efficient.
pub fn efficiency(average_length: f64, entropy: f64) -> f64 {
    if average_length == 0.0 {
        if entropy == 0.0 {
            1.0
        } else {
            f64::INFINITY
        }
    } else {
        entropy / average_length
    }
}

/// The three metrics for one table and code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Source entropy, bits/symbol.
    pub entropy: f64,
    /// Average code length, bits/symbol.
    pub average_length: f64,
    /// `average_length - entropy`.
    pub redundancy: f64,
}

impl Metrics {
    /// Compute all metrics for `table` coded with `codes`.
    ///
    /// # Errors
    /// Propagates the errors of [`entropy`] and [`average_code_length`].
    pub fn compute<S: Symbol>(table: &ProbabilityTable<S>, codes: &CodeTable<S>) -> Result<Self> {
        let entropy = entropy(table)?;
        let average_length = average_code_length(table, codes)?;
        Ok(Self {
            entropy,
            average_length,
            redundancy: redundancy(average_length, entropy),
        })
    }

    /// `entropy / average_length`.
    pub fn efficiency(&self) -> f64 {
        efficiency(self.average_length, self.entropy)
    }
}
