//! Data type tags and typed register values

use crate::byte_order::ByteOrder;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of value types a register field can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DataType {
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
}

impl DataType {
    pub const ALL: [DataType; 9] = [
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float,
        Self::Double,
        Self::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
        }
    }

    /// Fixed width in bytes, `None` for `String`
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float => Some(4),
            Self::Int64 | Self::UInt64 | Self::Double => Some(8),
            Self::String => None,
        }
    }

    /// Number of registers a value occupies, `None` for `String`
    pub fn register_count(&self) -> Option<usize> {
        self.byte_width().map(|w| w / 2)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "int16" | "i16" | "int" => Ok(Self::Int16),
            "uint16" | "u16" | "uint" => Ok(Self::UInt16),
            "int32" | "i32" => Ok(Self::Int32),
            "uint32" | "u32" => Ok(Self::UInt32),
            "int64" | "i64" => Ok(Self::Int64),
            "uint64" | "u64" => Ok(Self::UInt64),
            "float" | "float32" | "f32" | "single" => Ok(Self::Float),
            "double" | "float64" | "f64" => Ok(Self::Double),
            "string" | "str" | "text" => Ok(Self::String),
            _ => Err(format!("Unknown data type: {}", s)),
        }
    }
}

impl TryFrom<String> for DataType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A decoded (or to-be-encoded) application value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypedValue {
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
}

impl TypedValue {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Int16(_) => DataType::Int16,
            Self::UInt16(_) => DataType::UInt16,
            Self::Int32(_) => DataType::Int32,
            Self::UInt32(_) => DataType::UInt32,
            Self::Int64(_) => DataType::Int64,
            Self::UInt64(_) => DataType::UInt64,
            Self::Float(_) => DataType::Float,
            Self::Double(_) => DataType::Double,
            Self::String(_) => DataType::String,
        }
    }
}

/// Text form that parses back to the same value
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int16(v) => write!(f, "{}", v),
            Self::UInt16(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::UInt64(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
        }
    }
}

/// Rust types that map onto one `DataType`
///
/// Lets callers decode straight into a concrete type with
/// [`decode`](crate::decode::decode) instead of matching on `TypedValue`.
pub trait RegisterValue: Sized {
    const DATA_TYPE: DataType;

    /// Decode from the start of device-ordered `bytes`
    fn from_register_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, DecodeError>;

    /// Canonical (big-endian) byte form, before any order transform
    fn to_canonical_bytes(&self) -> Vec<u8>;

    /// Extract the concrete value; `None` if the variant does not match
    fn from_typed(value: TypedValue) -> Option<Self>;
}

macro_rules! impl_register_value {
    ($ty:ty, $variant:ident) => {
        impl RegisterValue for $ty {
            const DATA_TYPE: DataType = DataType::$variant;

            fn from_register_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, DecodeError> {
                crate::decode::fixed_width(bytes, Self::DATA_TYPE, order).map(<$ty>::from_be_bytes)
            }

            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_be_bytes().to_vec()
            }

            fn from_typed(value: TypedValue) -> Option<Self> {
                match value {
                    TypedValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for TypedValue {
            fn from(v: $ty) -> Self {
                TypedValue::$variant(v)
            }
        }
    };
}

impl_register_value!(i16, Int16);
impl_register_value!(u16, UInt16);
impl_register_value!(i32, Int32);
impl_register_value!(u32, UInt32);
impl_register_value!(i64, Int64);
impl_register_value!(u64, UInt64);
impl_register_value!(f32, Float);
impl_register_value!(f64, Double);

/// Text is stored as raw UTF-8 and never reordered
impl RegisterValue for String {
    const DATA_TYPE: DataType = DataType::String;

    fn from_register_bytes(bytes: &[u8], _order: ByteOrder) -> Result<Self, DecodeError> {
        crate::decode::utf8_text(bytes)
    }

    fn to_canonical_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<String> for TypedValue {
    fn from(v: String) -> Self {
        TypedValue::String(v)
    }
}

impl From<&str> for TypedValue {
    fn from(v: &str) -> Self {
        TypedValue::String(v.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(DataType::Int16.byte_width(), Some(2));
        assert_eq!(DataType::Float.byte_width(), Some(4));
        assert_eq!(DataType::UInt64.byte_width(), Some(8));
        assert_eq!(DataType::String.byte_width(), None);
        assert_eq!(DataType::Double.register_count(), Some(4));
        assert_eq!(DataType::String.register_count(), None);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("Float".parse::<DataType>(), Ok(DataType::Float));
        assert_eq!("single".parse::<DataType>(), Ok(DataType::Float));
        assert_eq!("F64".parse::<DataType>(), Ok(DataType::Double));
        assert_eq!(" uint16 ".parse::<DataType>(), Ok(DataType::UInt16));
        assert_eq!("text".parse::<DataType>(), Ok(DataType::String));
        assert!("decimal".parse::<DataType>().is_err());

        for dt in DataType::ALL {
            assert_eq!(dt.to_string().parse::<DataType>(), Ok(dt));
        }
    }

    #[test]
    fn test_typed_value_tags() {
        assert_eq!(TypedValue::from(7u32).data_type(), DataType::UInt32);
        assert_eq!(TypedValue::from(-1.5f64).data_type(), DataType::Double);
        assert_eq!(
            TypedValue::from("abc".to_string()).data_type(),
            DataType::String
        );
        assert_eq!(i64::from_typed(TypedValue::Int64(-9)), Some(-9));
        assert_eq!(i64::from_typed(TypedValue::Int32(-9)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TypedValue::Float(2.75).to_string(), "2.75");
        assert_eq!(TypedValue::Int16(-42).to_string(), "-42");
        assert_eq!(TypedValue::String("pump 1".into()).to_string(), "pump 1");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&TypedValue::UInt16(5)).unwrap();
        assert_eq!(json, r#"{"type":"UInt16","value":5}"#);
        let dt: DataType = serde_json::from_str(r#""f32""#).unwrap();
        assert_eq!(dt, DataType::Float);
        assert_eq!(serde_json::to_string(&DataType::UInt16).unwrap(), r#""UInt16""#);
    }

    #[test]
    fn test_deserialize_accepts_from_str_aliases() {
        for (text, dt) in [
            ("single", DataType::Float),
            ("int", DataType::Int16),
            ("text", DataType::String),
            ("INT16", DataType::Int16),
            ("Uint16", DataType::UInt16),
        ] {
            let parsed: DataType = serde_json::from_value(serde_json::json!(text)).unwrap();
            assert_eq!(parsed, dt, "alias {}", text);
        }
        assert!(serde_json::from_str::<DataType>(r#""decimal""#).is_err());
    }
}
