//! # huffcode
//!
//! In-memory Huffman coding over any hashable symbol type.
//!
//! The pipeline has four stages, each usable on its own:
//! [`analyze`] counts symbols, [`build_tree`] merges them into a Huffman
//! tree, [`generate_codes`] assigns each symbol its path, and
//! [`encode`]/[`decode`] translate between sequences and bit strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffcode::{analyze, build_tree, decode, encode, generate_codes};
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//! let table = analyze(text.iter().copied());
//! let root = build_tree(&table)?;
//! let codes = generate_codes(&root);
//!
//! let bits = encode(&text, &codes)?;
//! assert_eq!(bits.len(), 23);
//! assert_eq!(decode(&bits, &root)?, text);
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```
//!
//! [`compress`] and [`decompress`] run the whole cycle in one call.

pub mod bit_string;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;

// Internal modules - not part of public API
mod min_heap;

use std::fmt::Debug;
use std::hash::Hash;

// Re-export main types for convenience
pub use bit_string::BitString;
pub use codes::{generate_codes, CodeTable};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::{compress, decode, decompress, encode, Encoded, HuffmanCodec};
pub use hufftree::{build_tree, HuffNode, HuffmanTree};
pub use min_heap::HeapError;

/// Anything that can be Huffman coded.
///
/// `Debug` lets error messages name the offending symbol.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

/// Count the occurrences of each distinct symbol in `sequence`.
pub fn analyze<S, I>(sequence: I) -> FrequencyTable<S>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    FrequencyTable::from_symbols(sequence)
}
