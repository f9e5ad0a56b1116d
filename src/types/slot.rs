//! # Column Specs and Slot Descriptors
//!
//! `ColumnSpec` is the schema-level description of one column: its data type
//! plus declared metadata (CHAR/VARCHAR byte width, DECIMAL precision and
//! scale). `SlotDescriptor` is the resolved physical description produced by
//! layout building: where the slot and its null-indicator bit live inside a
//! row, and how many bytes the slot occupies.
//!
//! ## Decimal Storage Width
//!
//! The physical backing width of a decimal slot is derived from its declared
//! precision:
//!
//! | Precision | Slot size | Backing integer |
//! |-----------|-----------|-----------------|
//! | 1..=9     | 4 bytes   | i32 |
//! | 10..=18   | 8 bytes   | i64 |
//! | 19..=38   | 16 bytes  | i128 |

use crate::types::DataType;

/// Maximum supported decimal precision (fits a 16-byte backing integer).
pub const MAX_DECIMAL_PRECISION: u8 = 38;

/// Returns the physical slot size backing a decimal of the given precision.
pub fn decimal_slot_size(precision: u8) -> usize {
    if precision <= 9 {
        4
    } else if precision <= 18 {
        8
    } else {
        16
    }
}

/// Schema-level description of one column.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: String,
    pub data_type: DataType,
    declared_len: Option<u32>,
    precision: Option<u8>,
    scale: Option<u8>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            declared_len: None,
            precision: None,
            scale: None,
        }
    }

    pub fn new_char(name: impl Into<String>, len: u32) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::Char,
            declared_len: Some(len),
            precision: None,
            scale: None,
        }
    }

    pub fn new_varchar(name: impl Into<String>, len: u32) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::Varchar,
            declared_len: Some(len),
            precision: None,
            scale: None,
        }
    }

    pub fn new_decimal(name: impl Into<String>, precision: u8, scale: u8) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::Decimal,
            declared_len: None,
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    pub fn declared_len(&self) -> Option<u32> {
        self.declared_len
    }

    pub fn precision(&self) -> Option<u8> {
        self.precision
    }

    pub fn scale(&self) -> Option<u8> {
        self.scale
    }
}

/// Location of a slot's null-indicator bit within the row's null bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullIndicator {
    pub byte_offset: usize,
    pub bit_mask: u8,
}

/// Resolved physical description of one slot inside a row.
///
/// Produced by `RowLayout`; consumed by the decoder and the row accessors.
/// Offsets are only meaningful for rows built from the same layout.
#[derive(Debug, Clone)]
pub struct SlotDescriptor {
    data_type: DataType,
    declared_len: usize,
    precision: u8,
    scale: u8,
    slot_size: usize,
    tuple_offset: usize,
    null_indicator: NullIndicator,
}

impl SlotDescriptor {
    pub(crate) fn new(
        data_type: DataType,
        declared_len: usize,
        precision: u8,
        scale: u8,
        slot_size: usize,
        tuple_offset: usize,
        null_indicator: NullIndicator,
    ) -> Self {
        Self {
            data_type,
            declared_len,
            precision,
            scale,
            slot_size,
            tuple_offset,
            null_indicator,
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Declared byte width for Char/Varchar; 0 for other types.
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Physical byte size of the slot's storage within the row.
    pub fn slot_size(&self) -> usize {
        self.slot_size
    }

    /// Byte offset of the slot's storage within the row.
    pub fn tuple_offset(&self) -> usize {
        self.tuple_offset
    }

    pub fn null_indicator(&self) -> NullIndicator {
        self.null_indicator
    }
}
