//! # textrow - Text Field Decoding for Row-Oriented Scans
//!
//! textrow converts raw fields of delimited text into the typed, fixed-layout
//! in-memory rows a query-execution engine scans. It is the per-field hot
//! path of a text scanner: called once per (field bytes, target slot) pair
//! across potentially billions of rows, so it stays allocation-frugal and
//! branch-predictable.
//!
//! - **Zero-copy strings**: variable-length values borrow the input span
//!   whenever no copy or unescape is required
//! - **Arena-backed payloads**: copied/unescaped string buffers come from a
//!   caller-supplied `bumpalo` arena scoped to the row batch
//! - **NULL-safe failure**: a field that fails its type's grammar leaves the
//!   slot NULL and reports failure, never garbage bytes
//!
//! ## Quick Start
//!
//! ```ignore
//! use bumpalo::Bump;
//! use textrow::{ColumnSpec, DataType, FieldDecoder, Row, RowLayout};
//!
//! let layout = RowLayout::new(&[
//!     ColumnSpec::new("id", DataType::Int8),
//!     ColumnSpec::new("name", DataType::Text),
//! ])?;
//!
//! let decoder = FieldDecoder::new().with_null_sentinel(b"\\N");
//! let pool = Bump::new();
//! let mut row = Row::new(&layout);
//!
//! decoder.decode_field(layout.slot(0), &mut row, Some(b"42"), false, false, &pool);
//! decoder.decode_field(layout.slot(1), &mut row, Some(b"alice"), false, false, &pool);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------+
//! |      FieldDecoder (decode)          |
//! +-------------------------------------+
//! |  Primitive parsers (parse)          |
//! |  bool / int / float / decimal /     |
//! |  timestamp / unescape               |
//! +-------------------------------------+
//! |  RowLayout + Row accessors (row)    |
//! +-------------------------------------+
//! |  DataType / SlotDescriptor (types)  |
//! +-------------------------------------+
//! ```
//!
//! Upstream collaborators not owned here: the row splitter that produces
//! field spans, the schema catalog that produces column specs, and the arena
//! lifecycle for variable-length payloads.
//!
//! ## Module Overview
//!
//! - [`decode`]: the `FieldDecoder` and its per-type dispatch
//! - [`parse`]: primitive text-to-value parsers with explicit results
//! - [`row`]: `RowLayout` and the `Row` destination record
//! - [`types`]: the closed `DataType` set and slot metadata

pub mod decode;
pub mod parse;
pub mod row;
pub mod types;

pub use decode::{FieldDecoder, DEFAULT_ESCAPE_CHAR};
pub use parse::{ParseResult, TimestampValue};
pub use row::{Row, RowLayout, StrView};
pub use types::{ColumnSpec, DataType, SlotDescriptor};
