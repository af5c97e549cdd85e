use tracing::{debug, warn};

use crate::bit_string::BitString;
use crate::codes::{generate_codes, CodeTable};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::{HuffNode, HuffmanTree};
use crate::Symbol;

/// Concatenate the code of every symbol in `sequence`, in order.
///
/// Fails on the first symbol the table has no code for.
pub fn encode<S: Symbol>(sequence: &[S], codes: &CodeTable<S>) -> Result<BitString> {
    let mut bits = BitString::new();
    for (position, symbol) in sequence.iter().enumerate() {
        let Some(code) = codes.get(symbol) else {
            return Err(HuffmanError::UnknownSymbol {
                symbol: format!("{symbol:?}"),
                position,
            });
        };
        bits.extend_from(code);
    }
    debug!(symbols = sequence.len(), bits = bits.len(), "encoded sequence");
    Ok(bits)
}

/// Walk the tree bit by bit, emitting a symbol at every leaf.
///
/// The bit string must end exactly on a symbol boundary. A lone-leaf root
/// reads `0` as its symbol and rejects `1`.
pub fn decode<S: Symbol>(bits: &BitString, root: &HuffNode<S>) -> Result<Vec<S>> {
    let mut result = Vec::new();

    if let HuffNode::Leaf { symbol, .. } = root {
        for (position, bit) in bits.iter().enumerate() {
            if bit {
                warn!(position, "bit 1 under a single-symbol tree");
                return Err(HuffmanError::MalformedInput {
                    position,
                    reason: "no code starts with this bit",
                });
            }
            result.push(symbol.clone());
        }
        return Ok(result);
    }

    let mut current_node = root;
    for bit in bits.iter() {
        if let HuffNode::Internal { left, right, .. } = current_node {
            current_node = if bit { right } else { left };
        }
        if let HuffNode::Leaf { symbol, .. } = current_node {
            result.push(symbol.clone());
            current_node = root;
        }
    }

    if !std::ptr::eq(current_node, root) {
        warn!(bits = bits.len(), decoded = result.len(), "bit string ends mid-code");
        return Err(HuffmanError::MalformedInput {
            position: bits.len(),
            reason: "bit string ends in the middle of a code",
        });
    }

    debug!(bits = bits.len(), symbols = result.len(), "decoded sequence");
    Ok(result)
}

/// A Huffman tree paired with the code table derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    pub fn new(tree: HuffmanTree<S>) -> Self {
        let codes = generate_codes(tree.root());
        HuffmanCodec { tree, codes }
    }

    /// Analyze `data` and build a codec fitted to it.
    pub fn from_symbols(data: &[S]) -> Result<Self> {
        let table = FrequencyTable::from_symbols(data.iter().cloned());
        let tree = HuffmanTree::from_frequencies(&table)?;
        Ok(Self::new(tree))
    }

    pub fn encode(&self, data: &[S]) -> Result<BitString> {
        encode(data, &self.codes)
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        decode(bits, self.tree.root())
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }
}

/// Output of one compress cycle: the payload plus the tree needed to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<S> {
    pub bits: BitString,
    /// `None` only for empty input.
    pub tree: Option<HuffmanTree<S>>,
    pub original_length: usize,
}

impl<S> Encoded<S> {
    /// Payload size relative to 8 bits per symbol.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.bits.len() as f64 / (self.original_length * 8) as f64
    }
}

/// Run the whole pipeline over `data`.
///
/// Empty input produces an empty payload and no tree.
pub fn compress<S: Symbol>(data: &[S]) -> Result<Encoded<S>> {
    if data.is_empty() {
        debug!("empty input, nothing to compress");
        return Ok(Encoded {
            bits: BitString::new(),
            tree: None,
            original_length: 0,
        });
    }

    let codec = HuffmanCodec::from_symbols(data)?;
    let bits = codec.encode(data)?;
    Ok(Encoded {
        bits,
        tree: Some(codec.tree),
        original_length: data.len(),
    })
}

/// Recover the sequence from the output of [`compress`].
pub fn decompress<S: Symbol>(encoded: &Encoded<S>) -> Result<Vec<S>> {
    let result = match &encoded.tree {
        Some(tree) => decode(&encoded.bits, tree.root())?,
        None if encoded.bits.is_empty() => Vec::new(),
        None => {
            return Err(HuffmanError::MalformedInput {
                position: 0,
                reason: "payload present without a tree",
            })
        }
    };

    // Validate we decoded the expected amount
    if result.len() != encoded.original_length {
        warn!(
            expected = encoded.original_length,
            decoded = result.len(),
            "decoded length mismatch"
        );
        return Err(HuffmanError::MalformedInput {
            position: encoded.bits.len(),
            reason: "decoded length differs from original length",
        });
    }

    Ok(result)
}
