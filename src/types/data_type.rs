//! # Decodable Data Types
//!
//! This module provides the canonical `DataType` enum for textrow: the closed
//! set of target types a text field can be decoded into.
//!
//! ## Type Categories
//!
//! | Category | Types | Slot Storage |
//! |----------|-------|--------------|
//! | **Boolean** | Bool | 1 byte |
//! | **Integer** | Int1, Int2, Int4, Int8 | 1, 2, 4, 8 bytes |
//! | **Float** | Float4, Float8 | 4, 8 bytes |
//! | **Date/Time** | Timestamp | 8 bytes (microseconds since epoch) |
//! | **String** | Text, Varchar | 16-byte (pointer, length) view |
//! | **String** | Char | declared width, in-row, space-padded |
//! | **Numeric** | Decimal | 4/8/16 bytes, scaled integer |
//!
//! ## Discriminant Values
//!
//! Discriminants are grouped by category:
//! - 0-7: fixed-width primitives (bool, int, float, timestamp)
//! - 20-22: string family
//! - 30: decimal
//!
//! The `#[repr(u8)]` ensures the discriminant fits in a single byte for
//! compact schema metadata.

/// Canonical target type for field decoding.
///
/// Uses `#[repr(u8)]` for efficient single-byte storage encoding. Type
/// metadata (CHAR/VARCHAR width, DECIMAL precision/scale) is stored in
/// `ColumnSpec`, not in the enum.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool = 0,
    Int1 = 1,
    Int2 = 2,
    Int4 = 3,
    Int8 = 4,
    Float4 = 5,
    Float8 = 6,
    Timestamp = 7,

    Text = 20,
    Varchar = 21,
    Char = 22,

    Decimal = 30,
}

impl DataType {
    /// Returns the fixed slot size for this type, or None when the size
    /// depends on column metadata (string family, decimal).
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            DataType::Bool => Some(1),
            DataType::Int1 => Some(1),
            DataType::Int2 => Some(2),
            DataType::Int4 => Some(4),
            DataType::Int8 => Some(8),
            DataType::Float4 => Some(4),
            DataType::Float8 => Some(8),
            DataType::Timestamp => Some(8),
            DataType::Text | DataType::Varchar | DataType::Char | DataType::Decimal => None,
        }
    }

    /// Returns true for the string family (text, varchar, char).
    ///
    /// An empty field is a valid non-null value only for these types.
    pub fn is_string(&self) -> bool {
        matches!(self, DataType::Text | DataType::Varchar | DataType::Char)
    }

    /// Returns true if the slot stores a (pointer, length) view rather than
    /// the value bytes themselves. Char is fixed-width in-row and therefore
    /// not variable-length even though it is a string type.
    pub fn is_var_len(&self) -> bool {
        matches!(self, DataType::Text | DataType::Varchar)
    }

    /// Returns true if this is a numeric type.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Int1
                | DataType::Int2
                | DataType::Int4
                | DataType::Int8
                | DataType::Float4
                | DataType::Float8
                | DataType::Decimal
        )
    }
}

impl TryFrom<u8> for DataType {
    type Error = eyre::Report;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DataType::Bool),
            1 => Ok(DataType::Int1),
            2 => Ok(DataType::Int2),
            3 => Ok(DataType::Int4),
            4 => Ok(DataType::Int8),
            5 => Ok(DataType::Float4),
            6 => Ok(DataType::Float8),
            7 => Ok(DataType::Timestamp),
            20 => Ok(DataType::Text),
            21 => Ok(DataType::Varchar),
            22 => Ok(DataType::Char),
            30 => Ok(DataType::Decimal),
            _ => eyre::bail!("invalid DataType discriminant: {}", value),
        }
    }
}
