//! Register word parsing for command-line input

use anyhow::{bail, Context, Result};

/// Parse one register word: decimal, or hex with a `0x` prefix
pub fn parse_word(s: &str) -> Result<u16> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.with_context(|| format!("Invalid register word '{}'", s))
}

/// Parse a list of register words
///
/// Each argument may also hold a dash-separated hex dump such as
/// `12-34-AB-CD`, as printed by `regtool hex`.
pub fn parse_words(args: &[String]) -> Result<Vec<u16>> {
    let mut words = Vec::with_capacity(args.len());
    for arg in args {
        if arg.contains('-') && !arg.starts_with('-') {
            words.extend(parse_hex_dump(arg)?);
        } else {
            words.push(parse_word(arg)?);
        }
    }
    Ok(words)
}

fn parse_hex_dump(dump: &str) -> Result<Vec<u16>> {
    let bytes = dump
        .split('-')
        .map(|b| u8::from_str_radix(b, 16).with_context(|| format!("Invalid hex byte '{}'", b)))
        .collect::<Result<Vec<u8>>>()?;
    if bytes.len() % 2 != 0 {
        bail!("Hex dump '{}' has an odd number of bytes", dump);
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect())
}
