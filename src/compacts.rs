//! [`Compact`] search and processing.
//!
//! Compact encoding is a length-prefixed variable width encoding of unsigned
//! integers. Two lowest bits of the first byte select the mode:
//!
//! - `0b00`: single byte, value is `first >> 2` (up to `63`)
//! - `0b01`: two bytes, little endian, value is `>> 2` (up to `2^14 - 1`)
//! - `0b10`: four bytes, little endian, value is `>> 2` (up to `2^30 - 1`)
//! - `0b11`: big-integer mode, `(first >> 2) + 4` little endian bytes follow
use parity_scale_codec::{Compact, Decode, HasCompact};

use crate::cursor::ByteCursor;
use crate::error::ParserError;

/// Mask for compact mode bits in the first byte.
const MODE_MASK: u8 = 0b0000_0011;

/// Minimal number of value bytes in big-integer mode.
const BIG_INTEGER_MIN_BYTES: usize = 4;

/// Total encoded length of a compact, as claimed by its first byte.
pub fn compact_length(first_byte: u8) -> usize {
    match first_byte & MODE_MASK {
        0b00 => 1,
        0b01 => 2,
        0b10 => 4,
        _ => 1 + (first_byte >> 2) as usize + BIG_INTEGER_MIN_BYTES,
    }
}

/// Decode compact at cursor position and move the cursor past it.
///
/// The width claimed by the first byte must be fully present in the input,
/// otherwise `TruncatedInput` is returned. Non-canonical encodings and values
/// not fitting into `T` result in `NoCompact`. Cursor is not moved on error.
pub fn get_compact<T>(cursor: &mut ByteCursor) -> Result<T, ParserError>
where
    T: HasCompact,
    Compact<T>: Decode,
{
    let position = cursor.position();
    let first_byte = cursor
        .peek_byte()
        .map_err(|_| ParserError::TruncatedInput {
            position,
            minimal_length: 1,
            ty: "compact",
        })?;
    let length = compact_length(first_byte);
    let encoded = cursor
        .peek(length)
        .map_err(|_| ParserError::TruncatedInput {
            position,
            minimal_length: length,
            ty: "compact",
        })?;
    let mut encoded_reader = encoded;
    let compact = <Compact<T>>::decode(&mut encoded_reader)
        .map_err(|_| ParserError::NoCompact { position })?;
    if !encoded_reader.is_empty() {
        return Err(ParserError::NoCompact { position });
    }
    cursor.take(length)?;
    Ok(compact.0)
}
