//! Error types for Huffman coding operations.

use thiserror::Error;

use crate::min_heap::HeapError;

/// Result type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Errors that can occur while building codes, encoding or decoding.
///
/// None of these are transient: each one is an input or contract violation
/// surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// A tree was requested for an empty frequency table.
    ///
    /// Empty input has no tree; callers treat it as a terminal case with
    /// empty output.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// The encoder met a symbol that has no code in its table.
    #[error("symbol {symbol} at position {position} has no code in the table")]
    UnknownSymbol { symbol: String, position: usize },

    /// The bit string does not decode cleanly against the tree.
    #[error("malformed input at bit {position}: {reason}")]
    MalformedInput { position: usize, reason: &'static str },

    /// A textual bit string contained something other than `0` or `1`.
    #[error("invalid bit character {0:?}")]
    InvalidBit(char),

    /// A frequency table entry was given a count of zero.
    #[error("symbol {symbol} was given a frequency of zero")]
    ZeroFrequency { symbol: String },

    /// The tree builder's queue ran dry; cannot occur for a non-empty table.
    #[error("priority queue error: {0}")]
    Heap(#[from] HeapError),
}
