//! Decoders for primitive values.
//!
//! Every decoder reads from [`ByteCursor`] and either returns the value with
//! the cursor moved past it, or fails without reading past the input end.
use core::mem::size_of;

use parity_scale_codec::Decode;
use sp_arithmetic::{PerThing, Perbill, Percent};

use crate::additional_types::Era;
use crate::compacts::get_compact;
use crate::cursor::ByteCursor;
use crate::error::ParserError;
use crate::special_indicators::UnsignedWidth;

fn truncated(position: usize, minimal_length: usize, ty: &'static str) -> ParserError {
    ParserError::TruncatedInput {
        position,
        minimal_length,
        ty,
    }
}

/// Types with stable encoded length.
pub(crate) trait StLen: Sized {
    fn decode_value(cursor: &mut ByteCursor) -> Result<Self, ParserError>;
}

macro_rules! impl_stable_length_decodable {
    ($($ty: ty), *) => {
        $(
            impl StLen for $ty {
                fn decode_value(cursor: &mut ByteCursor) -> Result<Self, ParserError> {
                    let position = cursor.position();
                    let length = size_of::<Self>();
                    let slice_to_decode = cursor
                        .peek(length)
                        .map_err(|_| truncated(position, length, stringify!($ty)))?;
                    let out = <Self>::decode(&mut &slice_to_decode[..])
                        .map_err(|_| ParserError::TypeFailure { position, ty: stringify!($ty) })?;
                    cursor.take(length)?;
                    Ok(out)
                }
            }
        )*
    }
}

impl_stable_length_decodable!(u8, u16, u32, u64, u128);

/// Boolean, only `0x00` and `0x01` are accepted.
pub(crate) fn decode_bool(cursor: &mut ByteCursor) -> Result<bool, ParserError> {
    let position = cursor.position();
    match cursor
        .take_byte()
        .map_err(|_| truncated(position, 1, "bool"))?
    {
        0 => Ok(false),
        1 => Ok(true),
        discriminant => Err(ParserError::InvalidEnumDiscriminant {
            position,
            discriminant,
            ty: "bool",
        }),
    }
}

/// Fixed-width unsigned integer, widened into `u128`.
pub(crate) fn decode_unsigned(
    cursor: &mut ByteCursor,
    width: UnsignedWidth,
) -> Result<u128, ParserError> {
    match width {
        UnsignedWidth::U8 => u8::decode_value(cursor).map(u128::from),
        UnsignedWidth::U16 => u16::decode_value(cursor).map(u128::from),
        UnsignedWidth::U32 => u32::decode_value(cursor).map(u128::from),
        UnsignedWidth::U64 => u64::decode_value(cursor).map(u128::from),
        UnsignedWidth::U128 => u128::decode_value(cursor),
    }
}

/// Compact unsigned integer that must fit into `width`, widened into
/// `u128`.
pub(crate) fn decode_compact(
    cursor: &mut ByteCursor,
    width: UnsignedWidth,
) -> Result<u128, ParserError> {
    match width {
        UnsignedWidth::U8 => get_compact::<u8>(cursor).map(u128::from),
        UnsignedWidth::U16 => get_compact::<u16>(cursor).map(u128::from),
        UnsignedWidth::U32 => get_compact::<u32>(cursor).map(u128::from),
        UnsignedWidth::U64 => get_compact::<u64>(cursor).map(u128::from),
        UnsignedWidth::U128 => get_compact::<u128>(cursor),
    }
}

/// Fixed length byte array, borrowed from input.
pub(crate) fn decode_array<'a>(
    cursor: &mut ByteCursor<'a>,
    len: usize,
) -> Result<&'a [u8], ParserError> {
    let position = cursor.position();
    cursor
        .take(len)
        .map_err(|_| truncated(position, len, "byte array"))
}

/// Byte vector with compact length prefix, borrowed from input.
pub(crate) fn decode_bytes<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a [u8], ParserError> {
    let len = get_compact::<u32>(cursor)? as usize;
    let position = cursor.position();
    cursor
        .take(len)
        .map_err(|_| truncated(position, len, "byte vector"))
}

/// Per-thing from its parts, parts above the accuracy are rejected.
fn per_thing_from_parts<P: PerThing>(
    parts: P::Inner,
    position: usize,
    ty: &'static str,
) -> Result<P, ParserError> {
    if parts > P::ACCURACY {
        Err(ParserError::TypeFailure { position, ty })
    } else {
        Ok(P::from_parts(parts))
    }
}

/// `Perbill`, plain or compact.
pub(crate) fn decode_perbill(cursor: &mut ByteCursor, compact: bool) -> Result<Perbill, ParserError> {
    let position = cursor.position();
    let parts = if compact {
        get_compact::<u32>(cursor)?
    } else {
        u32::decode_value(cursor).map_err(|_| truncated(position, 4, "Perbill"))?
    };
    per_thing_from_parts(parts, position, "Perbill")
}

/// `Percent`, plain or compact.
pub(crate) fn decode_percent(cursor: &mut ByteCursor, compact: bool) -> Result<Percent, ParserError> {
    let position = cursor.position();
    let parts = if compact {
        get_compact::<u8>(cursor)?
    } else {
        u8::decode_value(cursor).map_err(|_| truncated(position, 1, "Percent"))?
    };
    per_thing_from_parts(parts, position, "Percent")
}

/// `Era`, one byte for immortal, two bytes for mortal.
pub(crate) fn special_case_era(cursor: &mut ByteCursor) -> Result<Era, ParserError> {
    let position = cursor.position();
    let era_length = match cursor
        .peek_byte()
        .map_err(|_| truncated(position, 1, "era"))?
    {
        0 => 1,
        _ => 2,
    };
    let era_data = cursor
        .peek(era_length)
        .map_err(|_| truncated(position, era_length, "era"))?;
    let era = Era::decode(&mut &era_data[..])
        .map_err(|_| ParserError::TypeFailure { position, ty: "era" })?;
    cursor.take(era_length)?;
    Ok(era)
}
