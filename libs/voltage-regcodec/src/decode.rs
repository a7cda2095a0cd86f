//! Typed decode: device-ordered bytes → typed values
//!
//! Fixed-width values are reordered by the group transform matching their
//! width, then read big-endian. Strings are plain UTF-8 and never reordered.

use crate::byte_order::{apply_word_order, ByteOrder, GroupSize};
use crate::data_type::{DataType, RegisterValue, TypedValue};
use crate::error::DecodeError;
use crate::words::words_to_bytes;
use tracing::debug;

/// Decode a value of `data_type` from the start of `bytes`
///
/// Bytes past the type's width are ignored. The input is not modified.
pub fn decode_value(
    bytes: &[u8],
    data_type: DataType,
    order: ByteOrder,
) -> Result<TypedValue, DecodeError> {
    match data_type {
        DataType::Int16 => decode::<i16>(bytes, order).map(TypedValue::Int16),
        DataType::UInt16 => decode::<u16>(bytes, order).map(TypedValue::UInt16),
        DataType::Int32 => decode::<i32>(bytes, order).map(TypedValue::Int32),
        DataType::UInt32 => decode::<u32>(bytes, order).map(TypedValue::UInt32),
        DataType::Int64 => decode::<i64>(bytes, order).map(TypedValue::Int64),
        DataType::UInt64 => decode::<u64>(bytes, order).map(TypedValue::UInt64),
        DataType::Float => decode::<f32>(bytes, order).map(TypedValue::Float),
        DataType::Double => decode::<f64>(bytes, order).map(TypedValue::Double),
        DataType::String => decode::<String>(bytes, order).map(TypedValue::String),
    }
}

/// Decode straight into a concrete Rust type
///
/// ```
/// use voltage_regcodec::{decode, ByteOrder};
///
/// let value: i32 = decode(&[0x56, 0x78, 0x12, 0x34], ByteOrder::CDAB).unwrap();
/// assert_eq!(value, 0x12345678);
/// ```
pub fn decode<T: RegisterValue>(bytes: &[u8], order: ByteOrder) -> Result<T, DecodeError> {
    T::from_register_bytes(bytes, order)
}

/// Decode a value from polled registers
pub fn decode_registers(
    registers: &[u16],
    data_type: DataType,
    order: ByteOrder,
) -> Result<TypedValue, DecodeError> {
    decode_value(&words_to_bytes(registers), data_type, order)
}

/// First `N` bytes of `bytes`, reordered from `order` to big-endian
pub(crate) fn fixed_width<const N: usize>(
    bytes: &[u8],
    data_type: DataType,
    order: ByteOrder,
) -> Result<[u8; N], DecodeError> {
    let Some(head) = bytes.get(..N) else {
        debug!(%data_type, %order, len = bytes.len(), "Buffer too short for decode");
        return Err(DecodeError::BufferTooShort {
            data_type,
            required: N,
            actual: bytes.len(),
        });
    };

    let ordered = apply_word_order(head, order, GroupSize::for_width(N));
    let mut out = [0u8; N];
    out.copy_from_slice(&ordered);
    Ok(out)
}

pub(crate) fn utf8_text(bytes: &[u8]) -> Result<String, DecodeError> {
    std::str::from_utf8(bytes).map(str::to_owned).map_err(|e| {
        debug!(
            len = bytes.len(),
            valid_up_to = e.valid_up_to(),
            "Invalid UTF-8 in string register"
        );
        DecodeError::from(e)
    })
}
