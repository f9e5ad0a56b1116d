//! # Destination Rows
//!
//! Fixed-layout, pre-allocated records the decoder writes into.
//!
//! - `layout`: `RowLayout` resolves column specs into slot offsets and the
//!   null bitmap
//! - `tuple`: `Row` with typed slot accessors, plus the `StrView` slot
//!   representation for variable-length strings

mod layout;
mod tuple;


pub use layout::RowLayout;
pub use tuple::{Row, StrView};
