//! # Row - Fixed-Layout Destination Record
//!
//! `Row` is the pre-allocated, fixed-layout record the decoder writes into:
//! a null bitmap followed by byte-packed slot storage, sized by `RowLayout`.
//!
//! ## Design Goals
//!
//! 1. **Centralized layout access**: every layout-dependent or unsafe memory
//!    access lives in this file, behind one typed accessor per physical
//!    width. Call sites never touch raw offsets.
//! 2. **Lifetime-checked views**: `Row<'a>` carries the lifetime of the data
//!    backing its string views (input spans and arena buffers), so a borrowed
//!    zero-copy view cannot outlive its source.
//! 3. **Well-defined state**: a fresh row is all-NULL; every value setter
//!    clears the slot's null bit, so exactly one of {valid value, null bit}
//!    holds at all times.
//!
//! ## Thread Safety
//!
//! A `Row` is owned by one decoding thread; concurrent scans use one row (and
//! one arena) per thread.

use std::marker::PhantomData;

use crate::row::layout::RowLayout;
use crate::types::SlotDescriptor;

/// The 16-byte slot representation of a variable-length string value:
/// a raw pointer plus length, both stored little-endian in the slot.
///
/// Views are written only through [`Row::set_str_view`], which ties the
/// pointed-to bytes to the row's lifetime parameter.
#[derive(Debug, Clone, Copy)]
pub struct StrView {
    ptr: *const u8,
    len: usize,
}

impl StrView {
    /// Slot storage size of a view: 8-byte pointer + 8-byte length.
    pub const SIZE: usize = 16;

    fn from_slice(bytes: &[u8]) -> Self {
        Self {
            ptr: bytes.as_ptr(),
            len: bytes.len(),
        }
    }

    fn to_slot_bytes(self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[..8].copy_from_slice(&(self.ptr as usize as u64).to_le_bytes());
        out[8..].copy_from_slice(&(self.len as u64).to_le_bytes());
        out
    }

    fn from_slot_bytes(bytes: &[u8]) -> Self {
        let ptr = u64::from_le_bytes(bytes[..8].try_into().expect("8-byte pointer"));
        let len = u64::from_le_bytes(bytes[8..16].try_into().expect("8-byte length"));
        Self {
            ptr: ptr as usize as *const u8,
            len: len as usize,
        }
    }

    /// Data pointer of the view. Exposed for zero-copy verification.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A pre-allocated destination row.
///
/// The lifetime parameter `'a` is the lifetime of whatever backs the row's
/// string views: the raw input span for zero-copy decodes, the arena for
/// copied/unescaped decodes. Both must outlive the row, and the borrow
/// checker enforces it through [`Row::set_str_view`].
pub struct Row<'a> {
    data: Box<[u8]>,
    _backing: PhantomData<&'a [u8]>,
}

impl<'a> Row<'a> {
    /// Allocates a row for the given layout with every slot NULL.
    pub fn new(layout: &RowLayout) -> Self {
        let mut data = vec![0u8; layout.row_size()].into_boxed_slice();
        for slot in layout.slots() {
            let ind = slot.null_indicator();
            data[ind.byte_offset] |= ind.bit_mask;
        }
        Self {
            data,
            _backing: PhantomData,
        }
    }

    pub fn set_null(&mut self, desc: &SlotDescriptor) {
        let ind = desc.null_indicator();
        self.data[ind.byte_offset] |= ind.bit_mask;
    }

    fn clear_null(&mut self, desc: &SlotDescriptor) {
        let ind = desc.null_indicator();
        self.data[ind.byte_offset] &= !ind.bit_mask;
    }

    pub fn is_null(&self, desc: &SlotDescriptor) -> bool {
        let ind = desc.null_indicator();
        (self.data[ind.byte_offset] & ind.bit_mask) != 0
    }

    fn write_slot(&mut self, desc: &SlotDescriptor, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), desc.slot_size());
        self.clear_null(desc);
        let off = desc.tuple_offset();
        self.data[off..off + bytes.len()].copy_from_slice(bytes);
    }

    fn slot_bytes(&self, desc: &SlotDescriptor) -> &[u8] {
        let off = desc.tuple_offset();
        &self.data[off..off + desc.slot_size()]
    }

    pub fn set_bool(&mut self, desc: &SlotDescriptor, v: bool) {
        self.write_slot(desc, &[v as u8]);
    }

    pub fn set_i8(&mut self, desc: &SlotDescriptor, v: i8) {
        self.write_slot(desc, &v.to_le_bytes());
    }

    pub fn set_i16(&mut self, desc: &SlotDescriptor, v: i16) {
        self.write_slot(desc, &v.to_le_bytes());
    }

    pub fn set_i32(&mut self, desc: &SlotDescriptor, v: i32) {
        self.write_slot(desc, &v.to_le_bytes());
    }

    pub fn set_i64(&mut self, desc: &SlotDescriptor, v: i64) {
        self.write_slot(desc, &v.to_le_bytes());
    }

    pub fn set_i128(&mut self, desc: &SlotDescriptor, v: i128) {
        self.write_slot(desc, &v.to_le_bytes());
    }

    pub fn set_f32(&mut self, desc: &SlotDescriptor, v: f32) {
        self.write_slot(desc, &v.to_le_bytes());
    }

    pub fn set_f64(&mut self, desc: &SlotDescriptor, v: f64) {
        self.write_slot(desc, &v.to_le_bytes());
    }

    pub fn set_timestamp_micros(&mut self, desc: &SlotDescriptor, micros: i64) {
        self.write_slot(desc, &micros.to_le_bytes());
    }

    /// Writes a variable-length string view into the slot. The pointed-to
    /// bytes must live for `'a`, which the signature enforces.
    pub fn set_str_view(&mut self, desc: &SlotDescriptor, bytes: &'a [u8]) {
        self.write_slot(desc, &StrView::from_slice(bytes).to_slot_bytes());
    }

    /// Mutable access to a fixed-width CHAR slot's in-row storage. Clears the
    /// null bit; the caller fills and space-pads the returned buffer.
    pub fn char_slot_mut(&mut self, desc: &SlotDescriptor) -> &mut [u8] {
        self.clear_null(desc);
        let off = desc.tuple_offset();
        let size = desc.slot_size();
        &mut self.data[off..off + size]
    }

    pub fn get_bool(&self, desc: &SlotDescriptor) -> bool {
        self.slot_bytes(desc)[0] != 0
    }

    pub fn get_i8(&self, desc: &SlotDescriptor) -> i8 {
        i8::from_le_bytes(self.slot_bytes(desc).try_into().expect("1-byte slot"))
    }

    pub fn get_i16(&self, desc: &SlotDescriptor) -> i16 {
        i16::from_le_bytes(self.slot_bytes(desc).try_into().expect("2-byte slot"))
    }

    pub fn get_i32(&self, desc: &SlotDescriptor) -> i32 {
        i32::from_le_bytes(self.slot_bytes(desc).try_into().expect("4-byte slot"))
    }

    pub fn get_i64(&self, desc: &SlotDescriptor) -> i64 {
        i64::from_le_bytes(self.slot_bytes(desc).try_into().expect("8-byte slot"))
    }

    pub fn get_i128(&self, desc: &SlotDescriptor) -> i128 {
        i128::from_le_bytes(self.slot_bytes(desc).try_into().expect("16-byte slot"))
    }

    pub fn get_f32(&self, desc: &SlotDescriptor) -> f32 {
        f32::from_le_bytes(self.slot_bytes(desc).try_into().expect("4-byte slot"))
    }

    pub fn get_f64(&self, desc: &SlotDescriptor) -> f64 {
        f64::from_le_bytes(self.slot_bytes(desc).try_into().expect("8-byte slot"))
    }

    pub fn get_timestamp_micros(&self, desc: &SlotDescriptor) -> i64 {
        self.get_i64(desc)
    }

    /// Reads back the raw view stored in a variable-length string slot.
    /// Meaningful only after a successful non-null string decode.
    pub fn get_str_view(&self, desc: &SlotDescriptor) -> StrView {
        debug_assert!(desc.data_type().is_var_len());
        StrView::from_slot_bytes(self.slot_bytes(desc))
    }

    /// Returns the bytes of a variable-length string slot.
    ///
    /// Valid only when the slot is non-null and was written by
    /// [`Row::set_str_view`]; that setter guarantees the backing bytes live
    /// for `'a`, making the dereference here sound.
    pub fn get_str(&self, desc: &SlotDescriptor) -> &'a [u8] {
        debug_assert!(!self.is_null(desc));
        let view = self.get_str_view(desc);
        if view.len == 0 {
            return &[];
        }
        // SAFETY: set_str_view only accepts `&'a [u8]`, so ptr/len name bytes
        // that live at least as long as `'a`.
        unsafe { std::slice::from_raw_parts(view.ptr, view.len) }
    }

    /// Returns the in-row bytes of a fixed-width CHAR slot (always exactly
    /// the declared width, space-padded).
    pub fn get_char(&self, desc: &SlotDescriptor) -> &[u8] {
        self.slot_bytes(desc)
    }
}
