//! Decoding of calls according to static call tables.
//!
//! Decoder walks [`FieldSchema`] trees and produces [`DecodedField`] trees of
//! the same shape. Any error aborts the whole decoding, the error carries the
//! path to the field where it has occured.
use log::debug;

use crate::std::{boxed::Box, vec::Vec};

use crate::cards::{DecodedCall, DecodedField, NamedField, VariantData};
use crate::compacts::get_compact;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, ParserError, PathSegment};
use crate::propagated::Propagated;
use crate::schema::{CallIndex, FieldDescriptor, FieldSchema, RuntimeVersion};
use crate::special_types::{
    decode_array, decode_bool, decode_bytes, decode_compact, decode_perbill, decode_percent,
    decode_unsigned,
};
use crate::special_indicators::PerThingKind;
use crate::traits::AsCallRegistry;
use crate::DecodeLimits;

/// Decode a top-level call starting at cursor position.
///
/// Cursor is left right after the call, remaining data is not checked.
pub fn decode_call_at_root<'a, R>(
    cursor: &mut ByteCursor<'a>,
    registry: &R,
    version: RuntimeVersion,
    limits: DecodeLimits,
) -> Result<DecodedCall<'a>, DecodeError>
where
    R: AsCallRegistry + ?Sized,
{
    let mut propagated = Propagated::new(version, limits);
    decode_call(cursor, registry, &mut propagated).map_err(|e| {
        debug!("{version} call decoding aborted: {e}");
        e
    })
}

/// Decode call index, find the call and decode its fields.
pub(crate) fn decode_call<'a, R>(
    cursor: &mut ByteCursor<'a>,
    registry: &R,
    propagated: &mut Propagated,
) -> Result<DecodedCall<'a>, DecodeError>
where
    R: AsCallRegistry + ?Sized,
{
    let position = cursor.position();
    let [pallet, method] = cursor.take_array::<2>().map_err(|_| {
        propagated.error(ParserError::TruncatedInput {
            position,
            minimal_length: 2,
            ty: "call index",
        })
    })?;
    let resolved = registry
        .resolve(propagated.version, CallIndex { pallet, method })
        .map_err(|e| propagated.error(e))?;

    propagated.enter_call(&resolved);
    let fields = decode_fields(resolved.schema.fields, cursor, registry, propagated)?;
    propagated.pop();

    Ok(DecodedCall {
        call_index: resolved.call_index,
        pallet_name: resolved.pallet_name,
        call_name: resolved.schema.name,
        fields,
    })
}

/// Decode fields one after another, in declaration order.
fn decode_fields<'a, R>(
    fields: &'static [FieldDescriptor],
    cursor: &mut ByteCursor<'a>,
    registry: &R,
    propagated: &mut Propagated,
) -> Result<Vec<NamedField<'a>>, DecodeError>
where
    R: AsCallRegistry + ?Sized,
{
    let mut out = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if field.name.is_empty() {
            propagated.push(PathSegment::Element(i))
        } else {
            propagated.push(PathSegment::Field(field.name))
        }
        let data = decode_field(&field.ty, cursor, registry, propagated)?;
        propagated.pop();
        out.push(NamedField {
            name: field.name,
            data,
        });
    }
    Ok(out)
}

/// Decode a single value according to its schema.
pub(crate) fn decode_field<'a, R>(
    schema: &FieldSchema,
    cursor: &mut ByteCursor<'a>,
    registry: &R,
    propagated: &mut Propagated,
) -> Result<DecodedField<'a>, DecodeError>
where
    R: AsCallRegistry + ?Sized,
{
    match schema {
        FieldSchema::Unsigned { width, specialty } => decode_unsigned(cursor, *width)
            .map(|value| DecodedField::Unsigned {
                value,
                width: *width,
                specialty: *specialty,
            })
            .map_err(|e| propagated.error(e)),
        FieldSchema::Bool => decode_bool(cursor)
            .map(DecodedField::Bool)
            .map_err(|e| propagated.error(e)),
        FieldSchema::Compact { width, specialty } => decode_compact(cursor, *width)
            .map(|value| DecodedField::Unsigned {
                value,
                width: *width,
                specialty: *specialty,
            })
            .map_err(|e| propagated.error(e)),
        FieldSchema::Array { len, specialty } => decode_array(cursor, *len)
            .map(|bytes| DecodedField::Array {
                bytes,
                specialty: *specialty,
            })
            .map_err(|e| propagated.error(e)),
        FieldSchema::Bytes => decode_bytes(cursor)
            .map(DecodedField::Bytes)
            .map_err(|e| propagated.error(e)),
        FieldSchema::PerThing { kind, compact } => match kind {
            PerThingKind::Perbill => decode_perbill(cursor, *compact).map(DecodedField::Perbill),
            PerThingKind::Percent => decode_percent(cursor, *compact).map(DecodedField::Percent),
        }
        .map_err(|e| propagated.error(e)),
        FieldSchema::Variant(variants) => {
            let position = cursor.position();
            let discriminant = cursor.take_byte().map_err(|_| {
                propagated.error(ParserError::TruncatedInput {
                    position,
                    minimal_length: 1,
                    ty: "enum",
                })
            })?;
            let variant = variants
                .iter()
                .find(|x| x.index == discriminant)
                .ok_or_else(|| {
                    propagated.error(ParserError::InvalidEnumDiscriminant {
                        position,
                        discriminant,
                        ty: "enum",
                    })
                })?;
            propagated.push(PathSegment::Variant(variant.name));
            let fields = decode_fields(variant.fields, cursor, registry, propagated)?;
            propagated.pop();
            Ok(DecodedField::Variant(VariantData {
                index: variant.index,
                name: variant.name,
                fields,
            }))
        }
        FieldSchema::Composite(fields) => {
            decode_fields(*fields, cursor, registry, propagated).map(DecodedField::Composite)
        }
        FieldSchema::Sequence(element) => {
            let len = get_compact::<u32>(cursor).map_err(|e| propagated.error(e))? as usize;

            // declared length must be plausible before anything is decoded
            let minimal_length = len.saturating_mul(element.min_encoded_len().max(1));
            if minimal_length > cursor.remaining() {
                return Err(propagated.error(ParserError::TruncatedInput {
                    position: cursor.position(),
                    minimal_length,
                    ty: "sequence",
                }));
            }

            let mut elements = Vec::new();
            for i in 0..len {
                propagated.push(PathSegment::Element(i));
                elements.push(decode_field(element, cursor, registry, propagated)?);
                propagated.pop();
            }
            Ok(DecodedField::Sequence(elements))
        }
        FieldSchema::Option(inner) => {
            let position = cursor.position();
            let discriminant = cursor.take_byte().map_err(|_| {
                propagated.error(ParserError::TruncatedInput {
                    position,
                    minimal_length: 1,
                    ty: "option",
                })
            })?;
            match discriminant {
                0 => Ok(DecodedField::Option(None)),
                1 => {
                    let value = decode_field(inner, cursor, registry, propagated)?;
                    Ok(DecodedField::Option(Some(Box::new(value))))
                }
                _ => Err(propagated.error(ParserError::InvalidEnumDiscriminant {
                    position,
                    discriminant,
                    ty: "option",
                })),
            }
        }
        FieldSchema::Call => {
            propagated
                .enter_nested_call()
                .map_err(|e| propagated.error(e))?;
            let call = decode_call(cursor, registry, propagated)?;
            propagated.leave_nested_call();
            Ok(DecodedField::Call(Box::new(call)))
        }
    }
}
