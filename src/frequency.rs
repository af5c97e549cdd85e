//! Frequency analysis for symbol sequences.
//!
//! Counts the occurrences of each distinct symbol and computes Shannon
//! entropy. Entries keep the order in which symbols were first seen, which
//! the tree builder relies on for deterministic tie-breaking.

use std::collections::HashMap;

use crate::error::{HuffmanError, Result};
use crate::Symbol;

/// Occurrence counts of every distinct symbol in a sequence.
///
/// Every count is at least 1 and each symbol appears exactly once.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    /// `(symbol, count)` in first-occurrence order.
    entries: Vec<(S, usize)>,
    /// Position of each symbol in `entries`.
    index: HashMap<S, usize>,
    /// Sum of all counts.
    total: usize,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count symbol frequencies in the input.
    ///
    /// Empty input yields an empty table.
    pub fn from_symbols<I>(sequence: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self::empty();
        for symbol in sequence {
            table.add(symbol, 1);
        }
        table
    }

    /// Build a table from caller-supplied counts.
    ///
    /// Repeated symbols have their counts summed. A zero count is rejected.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        let mut table = Self::empty();
        for (symbol, count) in counts {
            if count == 0 {
                return Err(HuffmanError::ZeroFrequency {
                    symbol: format!("{symbol:?}"),
                });
            }
            table.add(symbol, count);
        }
        Ok(table)
    }

    fn empty() -> Self {
        FrequencyTable {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }

    fn add(&mut self, symbol: S, count: usize) {
        match self.index.get(&symbol) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, count));
            }
        }
        self.total += count;
    }

    /// Count for `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the analyzed sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate over `(symbol, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }

    /// Compute the Shannon entropy of the distribution (in bits per symbol).
    ///
    /// Returns 0.0 if the table is empty.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.entries
            .iter()
            .map(|&(_, count)| {
                let prob = count as f64 / total;
                -prob * prob.log2()
            })
            .sum()
    }
}

impl<S: Symbol> PartialEq for FrequencyTable<S> {
    /// Tables are equal when they hold the same counts, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(symbol, count)| other.get(symbol) == Some(count))
    }
}

impl<S: Symbol> Eq for FrequencyTable<S> {}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
