//! # Type System
//!
//! The closed set of decodable target types and the schema/slot metadata that
//! drives field decoding.
//!
//! - `data_type`: the `DataType` enum (exhaustive, `#[repr(u8)]`)
//! - `slot`: `ColumnSpec` (declared metadata) and `SlotDescriptor` (resolved
//!   physical layout of one slot)

mod data_type;
mod slot;

pub use data_type::DataType;
pub use slot::{
    decimal_slot_size, ColumnSpec, NullIndicator, SlotDescriptor, MAX_DECIMAL_PRECISION,
};
