//! Voltage Register Codec Library
//!
//! Converts between raw 16-bit register words and typed application values
//! for field-bus protocols such as Modbus.
//!
//! # Architecture
//!
//! This library provides:
//! - **Byte Order**: `ABCD`/`BADC`/`CDAB`/`DCBA` conventions and the group transform
//! - **Words**: register ⇄ byte conversions
//! - **Typed Codec**: tag-driven decode/encode over the closed `DataType` set
//! - **Fields**: named register spans driven by device configuration
//! - **Hex**: diagnostic dumps of byte and word sequences
//!
//! Every conversion is a pure function over borrowed input that returns a
//! freshly allocated result, so callers' buffers are never modified.
//!
//! # Example
//!
//! ```
//! use voltage_regcodec::{decode_registers, encode_to_words, ByteOrder, DataType, NumberLocale, TypedValue};
//!
//! let words = encode_to_words("25", DataType::Float, ByteOrder::CDAB, &NumberLocale::default()).unwrap();
//! assert_eq!(words, vec![0x0000, 0x41C8]);
//!
//! let value = decode_registers(&words, DataType::Float, ByteOrder::CDAB).unwrap();
//! assert_eq!(value, TypedValue::Float(25.0));
//! ```

pub mod byte_order;
pub mod config;
pub mod data_type;
pub mod decode;
pub mod encode;
pub mod error;
pub mod field;
pub mod hex;
pub mod words;

// Re-export core types
pub use byte_order::{apply_word_order, ByteOrder, GroupSize};
pub use config::{load_config, load_config_from_file, CodecConfig};
pub use data_type::{DataType, RegisterValue, TypedValue};
pub use decode::{decode, decode_registers, decode_value};
pub use encode::{
    encode, encode_ordered, encode_to_words, encode_value, encode_with_locale, parse_value,
    NumberLocale,
};
pub use error::{CodecError, DecodeError, EncodeError, Result};
pub use field::RegisterField;
pub use hex::{bytes_to_hex, words_to_hex};
pub use words::{bytes_to_words, registers_to_bytes, words_to_bytes};
