//! Data that propagates hierarchically during decoding.
use crate::std::vec::Vec;

use crate::error::{DecodeError, FieldPath, ParserError, PathSegment};
use crate::schema::{ResolvedCall, RuntimeVersion};
use crate::DecodeLimits;

/// Decoding state shared by all fields of a single top-level call.
#[derive(Clone, Debug)]
pub(crate) struct Propagated {
    /// Runtime version, same for the call and all calls nested in it.
    pub(crate) version: RuntimeVersion,

    /// Number of calls currently being decoded above this point. Top-level
    /// call is at depth `0`.
    depth: u8,

    limits: DecodeLimits,

    /// Path from the top-level call to the field being decoded.
    path: Vec<PathSegment>,
}

impl Propagated {
    pub(crate) fn new(version: RuntimeVersion, limits: DecodeLimits) -> Self {
        Self {
            version,
            depth: 0,
            limits,
            path: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.path.push(segment)
    }

    pub(crate) fn pop(&mut self) {
        self.path.pop();
    }

    /// Going one call deeper. Checked before the nested call index is read.
    pub(crate) fn enter_nested_call(&mut self) -> Result<(), ParserError> {
        if self.depth >= self.limits.max_call_depth {
            return Err(ParserError::RecursionLimitExceeded {
                limit: self.limits.max_call_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nested_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn enter_call(&mut self, resolved: &ResolvedCall) {
        self.push(PathSegment::Call {
            pallet: resolved.pallet_name,
            call: resolved.schema.name,
        })
    }

    /// Error with the current field path.
    pub(crate) fn error(&self, error: ParserError) -> DecodeError {
        DecodeError {
            error,
            path: FieldPath(self.path.clone()),
        }
    }
}
