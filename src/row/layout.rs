//! # Row Layout
//!
//! `RowLayout` resolves a list of `ColumnSpec`s into physical slot placement:
//! a null bitmap packed at the front of the row (one bit per slot), followed
//! by byte-packed slot storage in declaration order.
//!
//! ## Row Binary Layout
//!
//! ```text
//! +------------------+------------------+------------------+
//! | Null Bitmap      | Slot 0           | Slot 1 ...       |
//! | [u8; (N+7)/8]    | [u8; slot_size]  | [u8; slot_size]  |
//! +------------------+------------------+------------------+
//! ```
//!
//! Slots are byte-packed without alignment padding; all slot access goes
//! through `Row`'s typed accessors, which copy to/from little-endian byte
//! arrays and never reinterpret row memory in place.
//!
//! Layout building is where schema metadata is validated: Char/Varchar need a
//! nonzero declared width, Decimal needs a precision in `1..=38` with
//! `scale <= precision`. Bad metadata is a construction-time `eyre` error,
//! never a per-row decode outcome.

use eyre::Result;

use crate::row::tuple::StrView;
use crate::types::{
    decimal_slot_size, ColumnSpec, DataType, NullIndicator, SlotDescriptor, MAX_DECIMAL_PRECISION,
};

#[derive(Debug, Clone)]
pub struct RowLayout {
    slots: Vec<SlotDescriptor>,
    null_bytes: usize,
    row_size: usize,
}

impl RowLayout {
    pub fn new(columns: &[ColumnSpec]) -> Result<Self> {
        let null_bytes = columns.len().div_ceil(8);
        let mut slots = Vec::with_capacity(columns.len());
        let mut offset = null_bytes;

        for (idx, col) in columns.iter().enumerate() {
            let (declared_len, precision, scale, slot_size) = match col.data_type {
                DataType::Char | DataType::Varchar => {
                    let len = col.declared_len().unwrap_or(0) as usize;
                    eyre::ensure!(
                        len > 0,
                        "column '{}': {:?} requires a nonzero declared width",
                        col.name,
                        col.data_type
                    );
                    let slot_size = if col.data_type == DataType::Char {
                        len
                    } else {
                        StrView::SIZE
                    };
                    (len, 0, 0, slot_size)
                }
                DataType::Text => (0, 0, 0, StrView::SIZE),
                DataType::Decimal => {
                    let precision = col.precision().unwrap_or(0);
                    let scale = col.scale().unwrap_or(0);
                    eyre::ensure!(
                        (1..=MAX_DECIMAL_PRECISION).contains(&precision),
                        "column '{}': decimal precision {} out of range 1..=38",
                        col.name,
                        precision
                    );
                    eyre::ensure!(
                        scale <= precision,
                        "column '{}': decimal scale {} exceeds precision {}",
                        col.name,
                        scale,
                        precision
                    );
                    (0, precision, scale, decimal_slot_size(precision))
                }
                other => (0, 0, 0, other.fixed_size().expect("fixed-size type")),
            };

            slots.push(SlotDescriptor::new(
                col.data_type,
                declared_len,
                precision,
                scale,
                slot_size,
                offset,
                NullIndicator {
                    byte_offset: idx / 8,
                    bit_mask: 1 << (idx % 8),
                },
            ));
            offset += slot_size;
        }

        Ok(Self {
            slots,
            null_bytes,
            row_size: offset,
        })
    }

    pub fn slot(&self, idx: usize) -> &SlotDescriptor {
        &self.slots[idx]
    }

    pub fn slots(&self) -> &[SlotDescriptor] {
        &self.slots
    }

    pub fn column_count(&self) -> usize {
        self.slots.len()
    }

    /// Size of the null bitmap at the front of the row.
    pub fn null_bitmap_size(&self) -> usize {
        self.null_bytes
    }

    /// Total row size in bytes: null bitmap plus all slot storage.
    pub fn row_size(&self) -> usize {
        self.row_size
    }
}
