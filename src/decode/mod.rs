//! # FieldDecoder - Text Field to Typed Slot
//!
//! The single choke point of the text scan path: one call per (field bytes,
//! target slot) pair, writing the decoded value directly into a pre-allocated
//! row slot. Variable-length string payloads either borrow the input span
//! (zero-copy) or come out of a caller-supplied `bumpalo` arena.
//!
//! ## Decode Pipeline
//!
//! ```text
//! +------------+    +----------------+    +--------------------+
//! | Field span |--->| Null detection |--->| Type-tag dispatch  |
//! +------------+    +----------------+    +--------------------+
//!                      absent span /          string family -> view or copy
//!                      empty non-string /     bool/int/float -> bit pattern
//!                      sentinel match         timestamp/decimal -> parse
//! ```
//!
//! ## Contract
//!
//! `decode_field` returns `true` on success (value stored or slot NULL) and
//! `false` when the text fails the target type's grammar, in which case the
//! slot is left NULL: failure degrades to NULL, never to garbage bytes. The
//! caller is expected to tally failures as per-field conversion warnings, not
//! abort the scan. After every call exactly one of {valid slot bytes, null
//! bit set} holds.
//!
//! An internally inconsistent slot width (an unsupported decimal storage
//! size) is a schema/decoder drift defect, not a data-quality outcome, and
//! panics instead of degrading.
//!
//! ## Concurrency
//!
//! The decoder is immutable after construction and safe to share across scan
//! threads; each invocation must use its own row, its own field span, and an
//! arena whose buffers outlive the row.


use bumpalo::Bump;
use smallvec::SmallVec;

use crate::parse::{
    parse_bool, parse_decimal, parse_float, parse_int, unescape_into, ParseResult, TimestampValue,
};
use crate::row::Row;
use crate::types::{DataType, SlotDescriptor};

/// Default escape character for unescaping string fields.
pub const DEFAULT_ESCAPE_CHAR: u8 = b'\\';

/// Decodes raw text fields into typed row slots.
///
/// Configuration is immutable for the decoder's lifetime: an optional NULL
/// sentinel (the dataset-level spelling of NULL, e.g. `\N`) and the escape
/// character used when a field still needs unescaping.
#[derive(Debug, Clone)]
pub struct FieldDecoder {
    null_sentinel: Option<SmallVec<[u8; 8]>>,
    escape_char: u8,
}

impl FieldDecoder {
    /// A decoder with no NULL sentinel and the default escape character.
    pub fn new() -> Self {
        Self {
            null_sentinel: None,
            escape_char: DEFAULT_ESCAPE_CHAR,
        }
    }

    /// Enables sentinel checking: fields byte-for-byte equal to `sentinel`
    /// decode to NULL before any type-specific parsing.
    pub fn with_null_sentinel(mut self, sentinel: impl AsRef<[u8]>) -> Self {
        self.null_sentinel = Some(SmallVec::from_slice(sentinel.as_ref()));
        self
    }

    pub fn with_escape_char(mut self, escape_char: u8) -> Self {
        self.escape_char = escape_char;
        self
    }

    /// True when a NULL sentinel is configured.
    pub fn checks_null(&self) -> bool {
        self.null_sentinel.is_some()
    }

    /// Decodes one field into its slot.
    ///
    /// `field` is `None` when the scanner produced no span at all (always
    /// NULL); an empty span is NULL for non-string targets and an empty
    /// string for string targets. `copy_string` forces materialization even
    /// when a zero-copy view would be valid; `needs_unescape` runs escape
    /// removal during the copy (the upstream splitter must not have
    /// unescaped already). Variable-length buffers come from `pool` and stay
    /// valid as long as the arena, which the row's lifetime is tied to.
    ///
    /// Returns `false` on malformed values, leaving the slot NULL.
    pub fn decode_field<'a>(
        &self,
        desc: &SlotDescriptor,
        row: &mut Row<'a>,
        field: Option<&'a [u8]>,
        copy_string: bool,
        needs_unescape: bool,
        pool: &'a Bump,
    ) -> bool {
        let Some(data) = field else {
            row.set_null(desc);
            return true;
        };
        if data.is_empty() && !desc.data_type().is_string() {
            row.set_null(desc);
            return true;
        }
        if let Some(sentinel) = &self.null_sentinel {
            if data == &sentinel[..] {
                // Matched the special NULL indicator.
                row.set_null(desc);
                return true;
            }
        }

        let result = match desc.data_type() {
            DataType::Text | DataType::Varchar | DataType::Char => {
                self.write_string(desc, row, data, copy_string, needs_unescape, pool);
                ParseResult::Success
            }
            DataType::Bool => {
                let (v, result) = parse_bool(data);
                if result.is_success() {
                    row.set_bool(desc, v);
                }
                result
            }
            DataType::Int1 => {
                let (v, result) = parse_int::<i8>(data);
                if result.is_success() {
                    row.set_i8(desc, v);
                }
                result
            }
            DataType::Int2 => {
                let (v, result) = parse_int::<i16>(data);
                if result.is_success() {
                    row.set_i16(desc, v);
                }
                result
            }
            DataType::Int4 => {
                let (v, result) = parse_int::<i32>(data);
                if result.is_success() {
                    row.set_i32(desc, v);
                }
                result
            }
            DataType::Int8 => {
                let (v, result) = parse_int::<i64>(data);
                if result.is_success() {
                    row.set_i64(desc, v);
                }
                result
            }
            DataType::Float4 => {
                let (v, result) = parse_float::<f32>(data);
                if result.is_success() {
                    row.set_f32(desc, v);
                }
                result
            }
            DataType::Float8 => {
                let (v, result) = parse_float::<f64>(data);
                if result.is_success() {
                    row.set_f64(desc, v);
                }
                result
            }
            DataType::Timestamp => {
                let ts = TimestampValue::parse(data);
                if ts.has_date_or_time() {
                    row.set_timestamp_micros(desc, ts.micros_since_epoch());
                    ParseResult::Success
                } else {
                    ParseResult::Failure
                }
            }
            DataType::Decimal => {
                let result = match desc.slot_size() {
                    4 => {
                        let (v, result) =
                            parse_decimal::<i32>(data, desc.precision(), desc.scale());
                        if result.is_success() {
                            row.set_i32(desc, v);
                        }
                        result
                    }
                    8 => {
                        let (v, result) =
                            parse_decimal::<i64>(data, desc.precision(), desc.scale());
                        if result.is_success() {
                            row.set_i64(desc, v);
                        }
                        result
                    }
                    12 => unreachable!("schema layer should not produce 12-byte decimal slots"),
                    16 => {
                        let (v, result) =
                            parse_decimal::<i128>(data, desc.precision(), desc.scale());
                        if result.is_success() {
                            row.set_i128(desc, v);
                        }
                        result
                    }
                    n => unreachable!("decimal slots cannot be {} bytes", n),
                };
                // Underflow and overflow are not accepted for decimals.
                if result.is_success() {
                    ParseResult::Success
                } else {
                    ParseResult::Failure
                }
            }
        };

        match result {
            ParseResult::Success => true,
            // Out-of-range integers are rejected alongside malformed text;
            // float saturation never reaches here.
            ParseResult::Failure | ParseResult::Overflow | ParseResult::Underflow => {
                row.set_null(desc);
                false
            }
        }
    }

    fn write_string<'a>(
        &self,
        desc: &SlotDescriptor,
        row: &mut Row<'a>,
        data: &'a [u8],
        copy_string: bool,
        needs_unescape: bool,
        pool: &'a Bump,
    ) {
        let len = data.len();
        let buffer_len = match desc.data_type() {
            DataType::Text => len,
            DataType::Varchar | DataType::Char => desc.declared_len(),
            other => unreachable!("{:?} is not a string type", other),
        };

        // Zero-copy only for view slots, and only when nothing forces a
        // materialized copy.
        let reuse_data = desc.data_type().is_var_len() && !(len != 0 && (copy_string || needs_unescape));
        if reuse_data {
            row.set_str_view(desc, &data[..buffer_len.min(len)]);
            return;
        }

        if desc.data_type().is_var_len() {
            let buf = pool.alloc_slice_fill_copy(buffer_len, 0u8);
            let out_len = if needs_unescape {
                unescape_into(data, self.escape_char, buf)
            } else {
                let n = buffer_len.min(len);
                buf[..n].copy_from_slice(&data[..n]);
                n
            };
            row.set_str_view(desc, &buf[..out_len]);
        } else {
            // Char stores its bytes in-row at the declared width.
            let slot = row.char_slot_mut(desc);
            let out_len = if needs_unescape {
                unescape_into(data, self.escape_char, slot)
            } else {
                let n = slot.len().min(len);
                slot[..n].copy_from_slice(&data[..n]);
                n
            };
            slot[out_len..].fill(b' ');
        }
    }
}

impl Default for FieldDecoder {
    fn default() -> Self {
        Self::new()
    }
}
