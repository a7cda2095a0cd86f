//! Hex dump formatting for diagnostics

use std::fmt::Write;

/// Format bytes as dash-separated uppercase hex
/// Example: [0x0A, 0xFF] -> "0A-FF"
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            result.push('-');
        }
        // Writing to String buffer is infallible
        let _ = write!(&mut result, "{:02X}", byte);
    }
    result
}

/// Format words as dash-separated uppercase hex, one dash between the two
/// bytes of every word
/// Example: [0x1234, 0xABCD] -> "12-34-AB-CD"
pub fn words_to_hex(words: &[u16]) -> String {
    let mut result = String::with_capacity(words.len() * 6);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push('-');
        }
        let [hi, lo] = word.to_be_bytes();
        let _ = write!(&mut result, "{:02X}-{:02X}", hi, lo);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_hex_basic() {
        assert_eq!(bytes_to_hex(&[0x0A, 0xFF]), "0A-FF");
        assert_eq!(bytes_to_hex(&[0x00]), "00");
    }

    #[test]
    fn test_words_to_hex_basic() {
        assert_eq!(words_to_hex(&[0x1234, 0xABCD]), "12-34-AB-CD");
        assert_eq!(words_to_hex(&[0x000F]), "00-0F");
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(bytes_to_hex(&[]), "");
        assert_eq!(words_to_hex(&[]), "");
    }

    #[test]
    fn test_word_and_byte_dumps_agree() {
        let words = [0x41C8, 0x0000, 0xBEEF];
        let bytes = crate::words::words_to_bytes(&words);
        assert_eq!(words_to_hex(&words), bytes_to_hex(&bytes));
    }
}
