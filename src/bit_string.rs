use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::HuffmanError;

/// An ordered sequence of bits, packed MSB-first into bytes.
///
/// Padding bits in the last byte are always zero, so two bit strings with
/// the same bits compare equal.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitString {
    pub fn new() -> Self {
        BitString {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    /// Empty bit string with room for `bit_count` bits.
    pub fn with_capacity(bit_count: usize) -> Self {
        BitString {
            bits: Vec::with_capacity(bit_count.div_ceil(8)),
            bit_count: 0,
        }
    }

    /// Wrap packed bytes holding `bit_count` bits.
    ///
    /// Extra bytes are dropped and padding bits are cleared.
    pub fn from_bytes(bytes: &[u8], bit_count: usize) -> Result<Self, HuffmanError> {
        let byte_len = bit_count.div_ceil(8);
        if bytes.len() < byte_len {
            return Err(HuffmanError::MalformedInput {
                position: bytes.len() * 8,
                reason: "byte buffer shorter than declared bit count",
            });
        }
        let mut bits = bytes[..byte_len].to_vec();
        let used = bit_count % 8;
        if used != 0 {
            if let Some(last) = bits.last_mut() {
                *last &= 0xffu8 << (8 - used);
            }
        }
        Ok(BitString { bits, bit_count })
    }

    /// Packed bytes; the last byte is zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        if self.bit_count % 8 == 0 {
            // byte aligned, copy whole bytes
            self.bits.truncate(self.bit_count / 8);
            self.bits.extend_from_slice(&other.bits);
            self.bit_count += other.bit_count;
            return;
        }
        for bit in other.iter() {
            self.push(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some((self.bits[index / 8] >> (7 - index % 8)) & 1 == 1)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            source: self,
            index: 0,
        }
    }

    /// True if `prefix` is a (not necessarily proper) prefix of `self`.
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        prefix.len() <= self.len() && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }
}

/// Iterator over the bits of a [`BitString`].
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    source: &'a BitString,
    index: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.source.get(self.index)?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut out = BitString::new();
        for bit in iter {
            out.push(bit);
        }
        out
    }
}

impl Ord for BitString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl PartialOrd for BitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = BitString::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => out.push(false),
                '1' => out.push(true),
                other => return Err(HuffmanError::InvalidBit(other)),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bits(s: &str) -> BitString {
        s.parse().unwrap()
    }

    #[test]
    fn test_push_packs_msb_first() {
        let b = bits("1010000011");
        assert_eq!(b.len(), 10);
        assert_eq!(b.as_bytes(), &[0b1010_0000, 0b1100_0000]);
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(bits("0110100").to_string(), "0110100");
        assert_eq!(BitString::new().to_string(), "");
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!("01x1".parse::<BitString>(), Err(HuffmanError::InvalidBit('x')));
    }

    #[test]
    fn test_get_and_iter() {
        let b = bits("101");
        assert_eq!(b.get(0), Some(true));
        assert_eq!(b.get(1), Some(false));
        assert_eq!(b.get(3), None);
        assert_eq!(b.iter().len(), 3);
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![true, false, true]);
    }

    #[test]
    fn test_extend_aligned_and_unaligned() {
        let mut aligned = bits("11110000");
        aligned.extend_from(&bits("101"));
        assert_eq!(aligned.to_string(), "11110000101");

        let mut unaligned = bits("1");
        unaligned.extend_from(&bits("0110011001"));
        assert_eq!(unaligned.to_string(), "10110011001");
        assert_eq!(unaligned, bits("10110011001"));
    }

    #[test]
    fn test_from_bytes_clears_padding() {
        let b = BitString::from_bytes(&[0b1011_1111, 0xaa], 3).unwrap();
        assert_eq!(b, bits("101"));
        assert_eq!(b.as_bytes(), &[0b1010_0000]);
    }

    #[test]
    fn test_from_bytes_too_short() {
        assert!(matches!(
            BitString::from_bytes(&[0xff], 9),
            Err(HuffmanError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_starts_with() {
        let b = bits("10110");
        assert!(b.starts_with(&bits("")));
        assert!(b.starts_with(&bits("101")));
        assert!(b.starts_with(&bits("10110")));
        assert!(!b.starts_with(&bits("11")));
        assert!(!b.starts_with(&bits("101100")));
    }

    #[test]
    fn test_lexicographic_order() {
        let mut codes = vec![bits("11"), bits("0"), bits("101"), bits("10"), bits("100")];
        codes.sort();
        let rendered: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["0", "10", "100", "101", "11"]);
    }
}
