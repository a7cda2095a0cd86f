//! Register field definitions
//!
//! A field is a named, typed span of registers in a device register map.
//! It ties an address to the `DataType` and `ByteOrder` the device uses,
//! so polled blocks can be decoded and operator writes encoded per field.

use crate::byte_order::ByteOrder;
use crate::data_type::{DataType, TypedValue};
use crate::decode::decode_registers;
use crate::encode::{encode_to_words, NumberLocale};
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One logical field of a register map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterField {
    /// Field name, unique within a map
    pub name: String,

    /// Address of the first register
    pub address: u16,

    pub data_type: DataType,

    /// Device byte order; `None` falls back to the map default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_order: Option<ByteOrder>,

    /// Length in registers (string fields only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u16>,
}

impl RegisterField {
    pub fn new(name: impl Into<String>, address: u16, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            address,
            data_type,
            byte_order: None,
            length: None,
        }
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = Some(order);
        self
    }

    pub fn with_length(mut self, registers: u16) -> Self {
        self.length = Some(registers);
        self
    }

    /// Effective byte order
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order.unwrap_or_default()
    }

    /// Number of registers the field spans
    pub fn register_count(&self) -> Result<usize> {
        match (self.data_type.register_count(), self.length) {
            (Some(count), _) => Ok(count),
            (None, Some(len)) if len > 0 => Ok(len as usize),
            (None, _) => Err(CodecError::invalid_field(
                &self.name,
                "string field requires a non-zero length",
            )),
        }
    }

    /// One past the last register address
    pub fn end_address(&self) -> Result<u32> {
        Ok(self.address as u32 + self.register_count()? as u32)
    }

    /// Decode the field from a polled block starting at `block_start`
    ///
    /// String fields drop the trailing zero padding devices use to fill
    /// the field.
    pub fn read(&self, block_start: u16, registers: &[u16]) -> Result<TypedValue> {
        let count = self.register_count()?;
        let offset = self.address.checked_sub(block_start).ok_or_else(|| {
            CodecError::invalid_field(
                &self.name,
                format!("address {} before block start {}", self.address, block_start),
            )
        })? as usize;

        let Some(span) = registers.get(offset..offset + count) else {
            debug!(
                field = %self.name,
                offset,
                count,
                block_len = registers.len(),
                "Field outside polled block"
            );
            return Err(CodecError::invalid_field(
                &self.name,
                format!(
                    "registers {}..{} not in block of {} starting at {}",
                    self.address,
                    self.address as usize + count,
                    registers.len(),
                    block_start
                ),
            ));
        };

        match decode_registers(span, self.data_type, self.byte_order())? {
            TypedValue::String(text) => {
                Ok(TypedValue::String(text.trim_end_matches('\0').to_owned()))
            },
            value => Ok(value),
        }
    }

    /// Encode operator text into the words to write at `address`
    ///
    /// String values are zero-padded to the field length.
    pub fn write(&self, value_text: &str, locale: &NumberLocale) -> Result<Vec<u16>> {
        let count = self.register_count()?;
        let mut words = encode_to_words(value_text, self.data_type, self.byte_order(), locale)?;

        if words.len() > count {
            return Err(CodecError::invalid_field(
                &self.name,
                format!(
                    "value needs {} registers, field holds {}",
                    words.len(),
                    count
                ),
            ));
        }
        words.resize(count, 0);
        Ok(words)
    }
}
