use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;
use crate::Symbol;

/// A node of a Huffman tree.
///
/// Internal nodes always own exactly two children. Leaves hold one symbol;
/// trees assembled by hand should not repeat a symbol across leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        weight: usize,
        symbol: S,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S> HuffNode<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Join two subtrees; `a` becomes the left child.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry: a pending subtree keyed by weight, then by insertion order.
struct Pending<S> {
    weight: usize,
    seq: usize,
    node: HuffNode<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Pending<S> {}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

/// Build a Huffman tree from a frequency table.
///
/// Nodes are merged two at a time, lightest first. Among equal weights the
/// node inserted into the queue earlier is taken first: leaves in table
/// order, then merged nodes in the order they were created. The first node
/// taken becomes the left child.
///
/// A table with a single symbol yields a lone leaf as the root.
pub fn build_tree<S: Symbol>(table: &FrequencyTable<S>) -> Result<HuffNode<S>> {
    if table.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let leaves: Vec<Pending<S>> = table
        .iter()
        .enumerate()
        .map(|(seq, (symbol, weight))| Pending {
            weight,
            seq,
            node: HuffNode::leaf(symbol.clone(), weight),
        })
        .collect();
    let mut next_seq = leaves.len();
    let mut heap = MinHeap::build(leaves);

    while heap.heap_size() > 1 {
        let x = heap.extract_min()?;
        let y = heap.extract_min()?;
        trace!(left = x.weight, right = y.weight, "merging nodes");

        let node = HuffNode::merge(x.node, y.node);
        heap.insert(Pending {
            weight: node.weight(),
            seq: next_seq,
            node,
        });
        next_seq += 1;
    }

    let root = heap.extract_min()?.node;
    debug!(
        symbols = table.len(),
        weight = root.weight(),
        depth = root.depth(),
        "built Huffman tree"
    );
    Ok(root)
}

/// An owned Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn from_frequencies(table: &FrequencyTable<S>) -> Result<Self> {
        Ok(HuffmanTree {
            root: build_tree(table)?,
        })
    }

    pub fn from_symbols<I>(sequence: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_frequencies(&FrequencyTable::from_symbols(sequence))
    }

    /// Recover the frequency table from the leaves.
    ///
    /// Fails with `ZeroFrequency` only for hand-assembled trees holding a
    /// zero-weight leaf.
    pub fn frequencies(&self) -> Result<FrequencyTable<S>> {
        let mut counts = Vec::new();
        collect_leaves(&self.root, &mut counts);
        FrequencyTable::from_counts(counts)
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffNode<S> {
        &self.root
    }

    /// Total weight, equal to the length of the analyzed sequence.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

impl<S> From<HuffNode<S>> for HuffmanTree<S> {
    fn from(root: HuffNode<S>) -> Self {
        HuffmanTree { root }
    }
}

impl TryFrom<&str> for HuffmanTree<char> {
    type Error = HuffmanError;

    fn try_from(text: &str) -> Result<Self> {
        HuffmanTree::from_symbols(text.chars())
    }
}

fn collect_leaves<S: Clone>(node: &HuffNode<S>, out: &mut Vec<(S, usize)>) {
    match node {
        HuffNode::Leaf { symbol, weight } => out.push((symbol.clone(), *weight)),
        HuffNode::Internal { left, right, .. } => {
            collect_leaves(left, out);
            collect_leaves(right, out);
        }
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman Tree Structure:")?;
        write_node(f, &self.root, 0, "root")
    }
}

fn write_node<S: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    node: &HuffNode<S>,
    depth: usize,
    label: &str,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        HuffNode::Leaf { symbol, weight } => {
            writeln!(f, "{indent}{label}-> Leaf: {symbol:?} [weight: {weight}]")
        }
        HuffNode::Internal {
            weight,
            left,
            right,
        } => {
            writeln!(f, "{indent}{label}-> Internal [weight: {weight}]")?;
            write_node(f, left, depth + 1, "L")?;
            write_node(f, right, depth + 1, "R")
        }
    }
}
