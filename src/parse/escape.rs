//! # Escape Removal
//!
//! Delimited-text inputs may escape delimiter and escape characters inside
//! field data. `unescape_into` strips the escape character, copying the byte
//! that follows it literally, so the decoded output is never longer than the
//! input. Output is capped at the destination length (relevant for bounded
//! VARCHAR/CHAR buffers).

/// Copies `src` into `dst` with escape characters removed.
///
/// An escape byte is dropped and the byte following it is copied literally;
/// a trailing escape with nothing after it is dropped. Copying stops when
/// `dst` is full. Returns the number of bytes written.
pub fn unescape_into(src: &[u8], escape: u8, dst: &mut [u8]) -> usize {
    let mut read = 0;
    let mut written = 0;

    while read < src.len() && written < dst.len() {
        if src[read] == escape {
            read += 1;
            if read >= src.len() {
                break;
            }
        }
        dst[written] = src[read];
        read += 1;
        written += 1;
    }

    written
}
