//! # Huffman Codes
//!
//! *Optimal prefix-free binary codes from symbol probabilities.*
//!
//! ## Intuition First
//!
//! Frequent symbols should get short code words and rare symbols long ones.
//! Huffman's trick is to build the code bottom-up: take the two least likely
//! symbols, glue them into one "super-symbol" whose probability is their sum,
//! and repeat. When a single node is left, the merge history is a binary
//! tree, and the path from the root to each leaf (left = `0`, right = `1`) is
//! that symbol's code word.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Kraft       Σ 2^-l <= 1 characterises prefix code lengths
//! 1952  Huffman     Optimal prefix codes by greedy merging
//! ```
//!
//! ## Mathematical Formulation
//!
//! Given probabilities `p_s`, the Huffman code minimises the average length
//! `L = Σ p_s · l_s` over all prefix-free binary codes, and satisfies
//!
//! ```text
//! H <= L < H + 1,    H = -Σ p_s · log2(p_s)
//! ```
//!
//! The gap `L - H` is the code's redundancy.
//!
//! ## Complexity Analysis
//!
//! - **Time**: `O(n log n)` to build the tree with a binary heap.
//! - **Space**: `O(n)` nodes; codes take `O(n · depth)` bits.
//!
//! ## Usage
//!
//! ```
//! use huffcode::{HuffmanCode, ProbabilityTable};
//!
//! let table = ProbabilityTable::new([('a', 0.5), ('b', 0.25), ('c', 0.25)])?;
//! let code = HuffmanCode::new(&table)?;
//!
//! assert_eq!(code.codes().get(&'a').map(|c| c.len()), Some(1));
//! assert!((code.metrics().entropy - 1.5).abs() < 1e-12);
//! assert!(code.metrics().redundancy.abs() < 1e-12);
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! The stages are also available separately: [`build_tree`],
//! [`generate_codes`] and the functions in [`metrics`].
//!
//! ## Failure Modes
//!
//! 1. **Empty alphabet**: there is no tree to build ([`Error::EmptyTable`]).
//! 2. **Malformed probabilities**: zero, negative or non-finite values are
//!    rejected when the table is built instead of producing `NaN` metrics.
//! 3. **Single symbol**: the tree has no branches; see [`SingleSymbolCode`].
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., Thomas, J. A. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod config;
pub mod error;
pub mod huffman;
pub mod metrics;
pub mod table;
pub mod tree;

pub use code::{generate_codes, generate_codes_with, Code, CodeTable};
pub use config::{Config, SingleSymbolCode};
pub use error::{Error, Result};
pub use huffman::HuffmanCode;
pub use metrics::{average_code_length, entropy, redundancy, Metrics};
pub use table::{ProbabilityTable, Symbol};
pub use tree::{build_tree, Node};
