//! Code assignment: walks a Huffman tree and records each leaf's path.

use std::collections::HashMap;

use tracing::debug;

use crate::bit_string::BitString;
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffNode;
use crate::Symbol;

/// Mapping from symbol to its bit code.
///
/// Entries are stored in traversal order, left subtree before right.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    entries: Vec<(S, BitString)>,
    index: HashMap<S, usize>,
}

/// Assign every leaf under `root` the bit string of its path from the root.
///
/// A left edge appends `0` and a right edge appends `1`. When the root is
/// itself a leaf its symbol gets the one-bit code `0`.
///
/// If a hand-assembled tree holds the same symbol in several leaves, only
/// the first one reached keeps a code.
pub fn generate_codes<S: Symbol>(root: &HuffNode<S>) -> CodeTable<S> {
    let mut table = CodeTable {
        entries: Vec::new(),
        index: HashMap::new(),
    };

    match root {
        HuffNode::Leaf { symbol, .. } => {
            table.insert(symbol.clone(), BitString::from_iter([false]));
        }
        HuffNode::Internal { .. } => {
            walk(root, &mut BitString::new(), &mut table);
        }
    }

    debug!(codes = table.len(), "generated code table");
    table
}

fn walk<S: Symbol>(node: &HuffNode<S>, path: &mut BitString, table: &mut CodeTable<S>) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            table.insert(symbol.clone(), path.clone());
        }
        HuffNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push(false);
            walk(left, &mut left_path, table);

            path.push(true);
            walk(right, path, table);
        }
    }
}

impl<S: Symbol> CodeTable<S> {
    fn insert(&mut self, symbol: S, code: BitString) {
        if self.index.contains_key(&symbol) {
            return;
        }
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, code));
    }

    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.index.get(symbol).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.entries.iter().map(|(symbol, code)| (symbol, code))
    }

    /// Code lengths, sorted ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.entries.iter().map(|(_, code)| code.len()).collect();
        lengths.sort_unstable();
        lengths
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&BitString> = self.entries.iter().map(|(_, code)| code).collect();
        codes.sort();
        // In lexicographic order a prefix sorts directly before some code
        // that extends it.
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Exact number of bits needed to encode a sequence with these counts.
    ///
    /// Symbols without a code are ignored.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }

    /// Average bits per symbol for a sequence with these counts.
    pub fn average_length(&self, frequencies: &FrequencyTable<S>) -> f64 {
        if frequencies.total() == 0 {
            return 0.0;
        }
        self.encoded_len(frequencies) as f64 / frequencies.total() as f64
    }
}

impl<S: Symbol> PartialEq for CodeTable<S> {
    /// Tables are equal when they hold the same codes in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Symbol> Eq for CodeTable<S> {}
