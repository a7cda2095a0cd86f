//! Typed encode: operator text → canonical bytes → device-ordered words
//!
//! Numeric text is parsed into the target type and emitted in canonical
//! big-endian form. Decimal input accepts both `,` and `.` so operators on
//! mixed-locale consoles can type either.

use crate::byte_order::{apply_word_order, ByteOrder, GroupSize};
use crate::data_type::{DataType, RegisterValue, TypedValue};
use crate::error::EncodeError;
use crate::words::be_pairs_to_words;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Active numeric-parsing locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Decimal separator of the locale, `.` or `,`
    pub decimal_separator: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}

impl NumberLocale {
    pub const COMMA: NumberLocale = NumberLocale {
        decimal_separator: ',',
    };

    /// Normalize both `,` and `.` to this locale's separator
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                ',' | '.' => self.decimal_separator,
                c => c,
            })
            .collect()
    }

    /// Parse a decimal number written in this locale
    pub fn parse_float<F: FromStr>(&self, text: &str) -> Result<F, F::Err> {
        let localized = self.normalize(text.trim());
        // Rust's float grammar only knows `.`
        let canonical = if self.decimal_separator == '.' {
            localized
        } else {
            localized.replace(self.decimal_separator, ".")
        };
        canonical.parse::<F>()
    }
}

/// Parse `value_text` as `data_type` and emit its canonical bytes
///
/// Uses the default (`.`) locale; `,` is still accepted as a decimal
/// separator.
pub fn encode(value_text: &str, data_type: DataType) -> Result<Vec<u8>, EncodeError> {
    encode_with_locale(value_text, data_type, &NumberLocale::default())
}

/// Parse `value_text` as `data_type` under `locale` and emit canonical bytes
///
/// Integers are emitted big-endian at the type's width, floats as big-endian
/// IEEE-754, strings as their raw UTF-8 bytes.
pub fn encode_with_locale(
    value_text: &str,
    data_type: DataType,
    locale: &NumberLocale,
) -> Result<Vec<u8>, EncodeError> {
    parse_value(value_text, data_type, locale).map(|value| encode_value(&value))
}

/// Parse `value_text` into a typed value
pub fn parse_value(
    value_text: &str,
    data_type: DataType,
    locale: &NumberLocale,
) -> Result<TypedValue, EncodeError> {
    match data_type {
        DataType::Int16 => parse_int::<i16>(value_text).map(TypedValue::Int16),
        DataType::UInt16 => parse_int::<u16>(value_text).map(TypedValue::UInt16),
        DataType::Int32 => parse_int::<i32>(value_text).map(TypedValue::Int32),
        DataType::UInt32 => parse_int::<u32>(value_text).map(TypedValue::UInt32),
        DataType::Int64 => parse_int::<i64>(value_text).map(TypedValue::Int64),
        DataType::UInt64 => parse_int::<u64>(value_text).map(TypedValue::UInt64),
        DataType::Float => parse_decimal::<f32>(value_text, locale).map(TypedValue::Float),
        DataType::Double => parse_decimal::<f64>(value_text, locale).map(TypedValue::Double),
        DataType::String => Ok(TypedValue::String(value_text.to_owned())),
    }
}

/// Canonical bytes of an already typed value
pub fn encode_value(value: &TypedValue) -> Vec<u8> {
    match value {
        TypedValue::Int16(v) => v.to_canonical_bytes(),
        TypedValue::UInt16(v) => v.to_canonical_bytes(),
        TypedValue::Int32(v) => v.to_canonical_bytes(),
        TypedValue::UInt32(v) => v.to_canonical_bytes(),
        TypedValue::Int64(v) => v.to_canonical_bytes(),
        TypedValue::UInt64(v) => v.to_canonical_bytes(),
        TypedValue::Float(v) => v.to_canonical_bytes(),
        TypedValue::Double(v) => v.to_canonical_bytes(),
        TypedValue::String(v) => v.to_canonical_bytes(),
    }
}

/// Encode and reorder into the device's byte order
///
/// The transform groups by the value's width, the same way
/// [`decode_value`](crate::decode::decode_value) does, so decoding the
/// result under `order` gives the value back. Strings are not reordered.
pub fn encode_ordered(
    value_text: &str,
    data_type: DataType,
    order: ByteOrder,
) -> Result<Vec<u8>, EncodeError> {
    let bytes = encode(value_text, data_type)?;
    Ok(reorder_for(&bytes, data_type, order))
}

/// Encode operator text into the register words to write
///
/// An odd-length string is padded with a trailing zero byte.
pub fn encode_to_words(
    value_text: &str,
    data_type: DataType,
    order: ByteOrder,
    locale: &NumberLocale,
) -> Result<Vec<u16>, EncodeError> {
    let bytes = encode_with_locale(value_text, data_type, locale)?;
    let mut ordered = reorder_for(&bytes, data_type, order);
    if ordered.len() % 2 != 0 {
        ordered.push(0);
    }
    Ok(be_pairs_to_words(&ordered))
}

fn reorder_for(bytes: &[u8], data_type: DataType, order: ByteOrder) -> Vec<u8> {
    match data_type.byte_width() {
        Some(width) => apply_word_order(bytes, order, GroupSize::for_width(width)),
        None => bytes.to_vec(),
    }
}

fn parse_int<T>(text: &str) -> Result<T, EncodeError>
where
    T: RegisterValue + FromStr,
    T::Err: std::fmt::Display,
{
    text.trim().parse::<T>().map_err(|e| {
        debug!(data_type = %T::DATA_TYPE, text, error = %e, "Integer parse failed");
        EncodeError::parse(T::DATA_TYPE, text, e)
    })
}

fn parse_decimal<T>(text: &str, locale: &NumberLocale) -> Result<T, EncodeError>
where
    T: RegisterValue + FromStr,
    T::Err: std::fmt::Display,
{
    locale.parse_float::<T>(text).map_err(|e| {
        debug!(
            data_type = %T::DATA_TYPE,
            text,
            separator = %locale.decimal_separator,
            error = %e,
            "Decimal parse failed"
        );
        EncodeError::parse(T::DATA_TYPE, text, e)
    })
}
