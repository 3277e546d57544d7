//! Huffman tree construction.
//!
//! The builder keeps a min-priority queue of subtrees keyed by weight and
//! repeatedly merges the two lightest until one remains. Each round costs
//! `O(log n)`, so building a tree for `n` symbols is `O(n log n)`. (Re-sorting
//! the whole working set every round, the naive approach, is `O(n² log n)`.)
//!
//! # Tie-breaking
//!
//! Equal weights are ordered by creation sequence: leaves are numbered in
//! table order, and every merged node takes the next number when it is
//! created. The lower number pops first. In each round the first node popped
//! becomes the left child and the second the right child. Identical tables
//! therefore always produce identical trees.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::table::{ProbabilityTable, Symbol};

/// Huffman tree node.
///
/// Internal nodes own their children exclusively; dropping the root drops
/// the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<S> {
    /// A symbol and its probability.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Its probability.
        weight: f64,
    },
    /// Merged probability mass of two subtrees.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
        /// Sum of the children's weights.
        weight: f64,
    },
}

impl<S> Node<S> {
    /// Probability mass under this node.
    pub fn weight(&self) -> f64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of internal nodes in the subtree.
    pub fn internal_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.internal_count() + right.internal_count(),
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Queue entry: a subtree plus its creation sequence number.
struct Pending<S> {
    seq: usize,
    node: Node<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Pending<S> {}

impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue: lightest first, then oldest.
        other
            .node
            .weight()
            .total_cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for `table`.
///
/// A single-symbol table yields a lone leaf.
///
/// # Errors
/// Returns `Error::EmptyTable` if `table` has no entries.
pub fn build_tree<S: Symbol>(table: &ProbabilityTable<S>) -> Result<Node<S>> {
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }

    let mut pq: BinaryHeap<Pending<S>> = table
        .iter()
        .enumerate()
        .map(|(seq, (symbol, weight))| Pending {
            seq,
            node: Node::Leaf {
                symbol: symbol.clone(),
                weight,
            },
        })
        .collect();
    let mut next_seq = pq.len();

    while pq.len() > 1 {
        let (Some(left), Some(right)) = (pq.pop(), pq.pop()) else {
            break;
        };
        let weight = left.node.weight() + right.node.weight();
        trace!(
            "merge #{} (w={}) + #{} (w={}) -> #{next_seq} (w={weight})",
            left.seq,
            left.node.weight(),
            right.seq,
            right.node.weight(),
        );
        pq.push(Pending {
            seq: next_seq,
            node: Node::Internal {
                left: Box::new(left.node),
                right: Box::new(right.node),
                weight,
            },
        });
        next_seq += 1;
    }

    let root = pq.pop().map(|p| p.node).ok_or(Error::EmptyTable)?;
    debug!(
        "built huffman tree: {} symbols, {} merges, depth {}, root weight {}",
        table.len(),
        next_seq - table.len(),
        root.depth(),
        root.weight()
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf_symbols(node: &Node<char>, out: &mut Vec<char>) {
        match node {
            Node::Leaf { symbol, .. } => out.push(*symbol),
            Node::Internal { left, right, .. } => {
                leaf_symbols(left, out);
                leaf_symbols(right, out);
            }
        }
    }

    #[test]
    fn test_empty_table() {
        let table = ProbabilityTable::<char>::default();
        assert_eq!(build_tree(&table), Err(Error::EmptyTable));
    }

    #[test]
    fn test_single_symbol() {
        let table = ProbabilityTable::new([('a', 1.0)]).unwrap();
        let root = build_tree(&table).unwrap();
        assert_eq!(
            root,
            Node::Leaf {
                symbol: 'a',
                weight: 1.0
            }
        );
        assert_eq!(root.internal_count(), 0);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_three_symbols_shape() {
        let table = ProbabilityTable::new([('a', 0.5), ('b', 0.25), ('c', 0.25)]).unwrap();
        let root = build_tree(&table).unwrap();
        assert_eq!(root.leaf_count(), 3);
        assert_eq!(root.internal_count(), 2);
        assert_eq!(root.depth(), 2);
        assert!((root.weight() - 1.0).abs() < 1e-12);

        // b and c merge first; the merged node ties with a and is newer, so a goes left.
        let mut order = Vec::new();
        leaf_symbols(&root, &mut order);
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_ties_follow_table_order() {
        let table = ProbabilityTable::new([('x', 0.25), ('y', 0.25), ('z', 0.25), ('w', 0.25)])
            .unwrap();
        let root = build_tree(&table).unwrap();
        let mut order = Vec::new();
        leaf_symbols(&root, &mut order);
        assert_eq!(order, vec!['x', 'y', 'z', 'w']);
        assert_eq!(root.depth(), 2);
    }

    proptest! {
        #[test]
        fn prop_node_counts(weights in prop::collection::vec(1u64..1000, 1..64)) {
            let table = ProbabilityTable::from_counts(
                weights.iter().enumerate().map(|(i, &w)| (i, w)),
            ).unwrap();
            let root = build_tree(&table).unwrap();
            prop_assert_eq!(root.leaf_count(), weights.len());
            prop_assert_eq!(root.internal_count(), weights.len() - 1);
            prop_assert!((root.weight() - 1.0).abs() < 1e-9);
        }
    }
}
