//! Register Codec Property Tests
//!
//! End-to-end checks of the public API:
//! - Round-trip law for every numeric type and byte order
//! - Register-level pipeline (text → words → bytes → value)
//! - Device scenarios and failure cases

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use proptest::prelude::*;
use voltage_regcodec::{
    decode, decode_registers, decode_value, encode, encode_ordered, encode_to_words,
    registers_to_bytes, words_to_bytes, words_to_hex, ByteOrder, CodecError, DataType,
    DecodeError, EncodeError, NumberLocale, RegisterField, TypedValue,
};

fn any_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![
        Just(ByteOrder::ABCD),
        Just(ByteOrder::BADC),
        Just(ByteOrder::CDAB),
        Just(ByteOrder::DCBA),
    ]
}

fn any_numeric_value() -> impl Strategy<Value = TypedValue> {
    prop_oneof![
        any::<i16>().prop_map(TypedValue::Int16),
        any::<u16>().prop_map(TypedValue::UInt16),
        any::<i32>().prop_map(TypedValue::Int32),
        any::<u32>().prop_map(TypedValue::UInt32),
        any::<i64>().prop_map(TypedValue::Int64),
        any::<u64>().prop_map(TypedValue::UInt64),
        proptest::num::f32::NORMAL.prop_map(TypedValue::Float),
        proptest::num::f64::NORMAL.prop_map(TypedValue::Double),
    ]
}

// ============================================================================
// Round-trip Law
// ============================================================================

proptest! {
    #[test]
    fn prop_decode_encode_roundtrip(value in any_numeric_value(), order in any_order()) {
        let text = value.to_string();
        let bytes = encode_ordered(&text, value.data_type(), order).unwrap();
        prop_assert_eq!(decode_value(&bytes, value.data_type(), order).unwrap(), value);
    }

    #[test]
    fn prop_register_pipeline_roundtrip(value in any_numeric_value(), order in any_order()) {
        let words = encode_to_words(
            &value.to_string(),
            value.data_type(),
            order,
            &NumberLocale::default(),
        )
        .unwrap();
        prop_assert_eq!(Some(words.len()), value.data_type().register_count());
        prop_assert_eq!(decode_registers(&words, value.data_type(), order).unwrap(), value);
    }

    #[test]
    fn prop_comma_locale_roundtrip(value in proptest::num::f64::NORMAL, order in any_order()) {
        let text = value.to_string().replace('.', ",");
        let words = encode_to_words(&text, DataType::Double, order, &NumberLocale::COMMA).unwrap();
        prop_assert_eq!(decode::<f64>(&words_to_bytes(&words), order).unwrap(), value);
    }

    #[test]
    fn prop_string_roundtrip(text in "\\PC{0,32}", order in any_order()) {
        let bytes = encode(&text, DataType::String).unwrap();
        prop_assert_eq!(bytes.as_slice(), text.as_bytes());
        prop_assert_eq!(decode::<String>(&bytes, order).unwrap(), text);
    }
}

#[test]
fn test_roundtrip_extremes() {
    let values = [
        TypedValue::Int16(i16::MIN),
        TypedValue::UInt16(u16::MAX),
        TypedValue::Int32(i32::MIN),
        TypedValue::UInt32(u32::MAX),
        TypedValue::Int64(i64::MIN),
        TypedValue::UInt64(u64::MAX),
        TypedValue::Float(f32::MAX),
        TypedValue::Float(f32::MIN_POSITIVE),
        TypedValue::Double(f64::MIN),
        TypedValue::Double(-0.0),
        TypedValue::Float(f32::INFINITY),
    ];
    for value in values {
        for order in ByteOrder::ALL {
            let bytes = encode_ordered(&value.to_string(), value.data_type(), order).unwrap();
            assert_eq!(
                decode_value(&bytes, value.data_type(), order).unwrap(),
                value,
                "{:?} under {}",
                value,
                order
            );
        }
    }
}

// ============================================================================
// Device Scenarios
// ============================================================================

#[test]
fn test_32bit_value_split_across_two_registers() {
    let registers = [0x1234, 0x5678];
    let bytes = registers_to_bytes(&registers, ByteOrder::CDAB);
    assert_eq!(bytes, vec![0x56, 0x78, 0x12, 0x34]);

    let value: i32 = decode(&bytes, ByteOrder::CDAB).unwrap();
    assert_eq!(value, 0x12345678);
}

#[test]
fn test_float_written_word_swapped() {
    let words = encode_to_words("3,14", DataType::Float, ByteOrder::CDAB, &NumberLocale::COMMA)
        .unwrap();
    let [hi, lo] = [
        u16::from_be_bytes([0x40, 0x48]),
        u16::from_be_bytes([0xF5, 0xC3]),
    ];
    assert_eq!(words, vec![lo, hi]);
    assert_eq!(words_to_hex(&words), "F5-C3-40-48");
}

#[test]
fn test_field_map_read_and_write() {
    let field = RegisterField::new("active_power", 40, DataType::Double)
        .with_byte_order(ByteOrder::DCBA);
    let words = field.write("-1234.5", &NumberLocale::default()).unwrap();
    assert_eq!(words.len(), 4);

    let mut block = vec![0u16; 10];
    block[2..6].copy_from_slice(&words);
    assert_eq!(
        field.read(38, &block).unwrap(),
        TypedValue::Double(-1234.5)
    );
}

// ============================================================================
// Failure Cases
// ============================================================================

#[test]
fn test_decode_int32_from_two_bytes_fails() {
    assert!(matches!(
        decode_value(&[0x00, 0x01], DataType::Int32, ByteOrder::ABCD),
        Err(DecodeError::BufferTooShort { .. })
    ));
}

#[test]
fn test_encode_abc_as_uint16_fails() {
    assert!(matches!(
        encode("abc", DataType::UInt16),
        Err(EncodeError::Parse { .. })
    ));
}

#[test]
fn test_field_errors_are_codec_errors() {
    let field = RegisterField::new("state", 0, DataType::UInt16);
    assert!(matches!(
        field.write("abc", &NumberLocale::default()),
        Err(CodecError::Encode(_))
    ));
    assert!(matches!(
        field.read(0, &[]),
        Err(CodecError::InvalidField { .. })
    ));
}
