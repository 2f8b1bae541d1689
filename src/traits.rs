//! Call registry abstraction.
//!
//! Decoder never looks into call tables directly. It asks an
//! [`AsCallRegistry`] implementor for the table of a runtime version, so that
//! the built-in tables can be replaced by custom ones, for example in tests.
use log::trace;

use crate::error::ParserError;
use crate::schema::{CallIndex, CallTable, ResolvedCall, RuntimeVersion};

/// Source of call tables, one table per supported runtime version.
pub trait AsCallRegistry {
    /// Call table for `version`, if the version is supported.
    fn call_table(&self, version: RuntimeVersion) -> Option<&'static CallTable>;

    /// Find call schema by pallet and method indices.
    fn resolve(
        &self,
        version: RuntimeVersion,
        call_index: CallIndex,
    ) -> Result<ResolvedCall, ParserError> {
        let table = self
            .call_table(version)
            .ok_or(ParserError::UnsupportedVersion { tag: version.tag() })?;
        let resolved = table.resolve(call_index)?;
        trace!(
            "resolved {version} call ({}, {}) as {}.{}",
            call_index.pallet,
            call_index.method,
            resolved.pallet_name,
            resolved.schema.name
        );
        Ok(resolved)
    }
}

/// Set of custom tables, first table with matching version is used.
impl AsCallRegistry for [&'static CallTable] {
    fn call_table(&self, version: RuntimeVersion) -> Option<&'static CallTable> {
        self.iter().copied().find(|table| table.version == version)
    }
}
