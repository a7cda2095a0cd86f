//! Byte/word order conventions and the group transform
//!
//! Provides the four ordering conventions used by field devices and the
//! pure transform that reorders a big-endian byte stream into (or out of)
//! a device's order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Byte/word order of a multi-register value
///
/// # Naming Convention
/// Uses ABCD notation where:
/// - A = Most significant byte (MSB)
/// - B = Second byte
/// - C = Third byte
/// - D = Least significant byte (LSB)
///
/// For 32-bit value `0x12345678`:
/// - `ABCD`: [0x12, 0x34, 0x56, 0x78]
/// - `BADC`: [0x34, 0x12, 0x78, 0x56]
/// - `CDAB`: [0x56, 0x78, 0x12, 0x34] (Modbus common)
/// - `DCBA`: [0x78, 0x56, 0x34, 0x12]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ByteOrder {
    /// Big-endian words, big-endian bytes. No transform.
    #[default]
    ABCD,

    /// Byte swap within each word.
    BADC,

    /// Word swap within each 4-byte group.
    CDAB,

    /// Byte swap and word swap, i.e. full reversal of each 4-byte group.
    DCBA,
}

/// Size of the byte group a transform works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupSize {
    /// One register (2 bytes)
    Word,
    /// Two registers (4 bytes)
    DoubleWord,
}

impl GroupSize {
    /// Number of bytes in one group
    pub fn bytes(self) -> usize {
        match self {
            Self::Word => 2,
            Self::DoubleWord => 4,
        }
    }

    /// Group used for a value of `width` bytes
    ///
    /// 2-byte values live in a single register; 4- and 8-byte values are
    /// transformed in 4-byte groups.
    pub fn for_width(width: usize) -> Self {
        if width <= 2 {
            Self::Word
        } else {
            Self::DoubleWord
        }
    }
}

impl ByteOrder {
    pub const ALL: [ByteOrder; 4] = [Self::ABCD, Self::BADC, Self::CDAB, Self::DCBA];

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ABCD => "ABCD",
            Self::BADC => "BADC",
            Self::CDAB => "CDAB",
            Self::DCBA => "DCBA",
        }
    }

    /// Group size used when regrouping a raw byte stream into registers
    pub fn group_size(&self) -> GroupSize {
        match self {
            Self::ABCD | Self::BADC => GroupSize::Word,
            Self::CDAB | Self::DCBA => GroupSize::DoubleWord,
        }
    }

    /// Check if bytes within a word are swapped
    pub fn has_byte_swap(&self) -> bool {
        matches!(self, Self::BADC | Self::DCBA)
    }

    /// Check if words are swapped (for 32/64-bit values)
    pub fn has_word_swap(&self) -> bool {
        matches!(self, Self::CDAB | Self::DCBA)
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = String;

    /// Supports various common string representations:
    /// - "ABCD", "AB-CD", "BE", "BIG_ENDIAN" → ABCD
    /// - "DCBA", "DC-BA", "LE", "LITTLE_ENDIAN" → DCBA
    /// - "CDAB", "CD-AB", "BIG_ENDIAN_SWAP" → CDAB
    /// - "BADC", "BA-DC", "LITTLE_ENDIAN_SWAP" → BADC
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Ok(Self::ABCD),
            "DCBA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Ok(Self::DCBA),
            "CDAB" | "BIG_ENDIAN_SWAP" | "BIGENDIANSWAP" => Ok(Self::CDAB),
            "BADC" | "LITTLE_ENDIAN_SWAP" | "LITTLEENDIANSWAP" => Ok(Self::BADC),
            _ => Err(format!("Unknown byte order: {}", s)),
        }
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Reorder `bytes` according to `order`, working in groups of `group`
///
/// Returns a fresh buffer; the input is never modified. Trailing bytes that
/// do not fill a complete group are copied through unchanged.
pub fn apply_word_order(bytes: &[u8], order: ByteOrder, group: GroupSize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    let n = group.bytes();

    match order {
        ByteOrder::ABCD => {},
        ByteOrder::BADC => {
            for pair in out.chunks_exact_mut(2) {
                pair.swap(0, 1);
            }
        },
        ByteOrder::CDAB => {
            // A single-word group has no word order
            if n == 4 {
                for quad in out.chunks_exact_mut(4) {
                    quad.rotate_left(2);
                }
            }
        },
        ByteOrder::DCBA => {
            for chunk in out.chunks_exact_mut(n) {
                chunk.reverse();
            }
        },
    }

    tracing::trace!(%order, group = n, len = bytes.len(), "Applied word order");
    out
}
