//! Register word ⇄ byte conversions
//!
//! Registers travel as big-endian 16-bit words. These helpers move between
//! register arrays and the byte streams the typed codec works on.

use crate::byte_order::{apply_word_order, ByteOrder};

/// Emit every word as two big-endian bytes, in input order
///
/// Example: `[0x1234, 0xABCD]` → `[0x12, 0x34, 0xAB, 0xCD]`
pub fn words_to_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Emit words as big-endian bytes, then reorder them for `order`
///
/// For registers `[0x1234, 0x5678]` under `CDAB` this yields
/// `[0x56, 0x78, 0x12, 0x34]`.
pub fn registers_to_bytes(words: &[u16], order: ByteOrder) -> Vec<u8> {
    apply_word_order(&words_to_bytes(words), order, order.group_size())
}

/// Regroup a byte stream into register words under `order`
///
/// An odd-length input is padded with one trailing zero byte. The transform
/// uses the order's own group size (`ABCD`/`BADC` per word, `CDAB`/`DCBA`
/// per register pair); a trailing partial group is left as is.
pub fn bytes_to_words(bytes: &[u8], order: ByteOrder) -> Vec<u16> {
    let mut padded = bytes.to_vec();
    if padded.len() % 2 != 0 {
        padded.push(0);
    }

    let ordered = apply_word_order(&padded, order, order.group_size());
    be_pairs_to_words(&ordered)
}

/// Read each 2-byte pair as a big-endian word
///
/// `bytes` must be even-length; a trailing odd byte is dropped.
pub(crate) fn be_pairs_to_words(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}
