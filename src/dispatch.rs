//! Built-in call tables and version dispatch.
use crate::calls_v11::CALL_TABLE_V11;
use crate::calls_v12::CALL_TABLE_V12;
use crate::error::ParserError;
use crate::schema::{CallIndex, CallTable, ResolvedCall, RuntimeVersion};
use crate::traits::AsCallRegistry;

/// Registry with the call tables shipped in this crate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BuiltinRegistry;

impl AsCallRegistry for BuiltinRegistry {
    fn call_table(&self, version: RuntimeVersion) -> Option<&'static CallTable> {
        match version {
            RuntimeVersion::V11 => Some(&CALL_TABLE_V11),
            RuntimeVersion::V12 => Some(&CALL_TABLE_V12),
        }
    }
}

/// Call schema for a numeric version tag and call indices, from built-in
/// tables.
pub fn resolve(
    version_tag: u32,
    pallet_index: u8,
    method_index: u8,
) -> Result<ResolvedCall, ParserError> {
    let version = RuntimeVersion::from_tag(version_tag)?;
    BuiltinRegistry.resolve(
        version,
        CallIndex {
            pallet: pallet_index,
            method: method_index,
        },
    )
}
