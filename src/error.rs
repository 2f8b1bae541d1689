//! Errors.
use primitive_types::H256;

use crate::std::{string::String, vec::Vec};

#[cfg(feature = "std")]
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[cfg(not(feature = "std"))]
use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::schema::RuntimeVersion;

/// Errors in reading the input buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferError {
    OutOfBounds {
        position: usize,
        requested: usize,
        total_length: usize,
    },
}

impl BufferError {
    fn error_text(&self) -> String {
        match &self {
            BufferError::OutOfBounds {
                position,
                requested,
                total_length,
            } => format!("Unable to read {requested} byte(s) starting at position {position}, input length is {total_length}."),
        }
    }
}

/// Errors in data parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParserError {
    Buffer(BufferError),
    InvalidEnumDiscriminant {
        position: usize,
        discriminant: u8,
        ty: &'static str,
    },
    NoCompact {
        position: usize,
    },
    RecursionLimitExceeded {
        limit: u8,
    },
    SomeDataNotUsed {
        from: usize,
    },
    TruncatedInput {
        position: usize,
        minimal_length: usize,
        ty: &'static str,
    },
    TypeFailure {
        position: usize,
        ty: &'static str,
    },
    UnknownCall {
        version: RuntimeVersion,
        pallet_index: u8,
        method_index: u8,
    },
    UnsupportedVersion {
        tag: u32,
    },
}

impl ParserError {
    /// Input ended before the data could be decoded.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            ParserError::Buffer(_) | ParserError::TruncatedInput { .. }
        )
    }

    fn error_text(&self) -> String {
        match &self {
            ParserError::Buffer(buffer_error) => format!("{buffer_error}"),
            ParserError::InvalidEnumDiscriminant { position, discriminant, ty } => format!("Discriminant {discriminant} at position {position} matches no declared variant of {ty}."),
            ParserError::NoCompact { position } => format!("Expected compact starting at position {position}, not found one."),
            ParserError::RecursionLimitExceeded { limit } => format!("Nested calls exceed the maximum allowed depth {limit}."),
            ParserError::SomeDataNotUsed { from } => format!("Some data (input positions [{from}..]) remained unused after decoding."),
            ParserError::TruncatedInput { position, minimal_length, ty } => format!("Data is too short to decode {ty} at position {position}, at least {minimal_length} byte(s) required."),
            ParserError::TypeFailure { position, ty } => format!("Unable to decode data starting at position {position} as {ty}."),
            ParserError::UnknownCall { version, pallet_index, method_index } => format!("No call with pallet index {pallet_index} and method index {method_index} in {version} call table."),
            ParserError::UnsupportedVersion { tag } => format!("Runtime version {tag} is not supported."),
        }
    }
}

/// Single step on the way from the top-level call to the decoded field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Call {
        pallet: &'static str,
        call: &'static str,
    },
    Element(usize),
    Extension(&'static str),
    Field(&'static str),
    Variant(&'static str),
}

/// Position of a field within decoded data, from the outermost call inwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldPath(pub Vec<PathSegment>);

impl FieldPath {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn path_text(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(" >> ");
            }
            match segment {
                PathSegment::Call { pallet, call } => out.push_str(&format!("{pallet}.{call}")),
                PathSegment::Element(index) => out.push_str(&format!("[{index}]")),
                PathSegment::Extension(name) => out.push_str(name),
                PathSegment::Field(name) => out.push_str(name),
                PathSegment::Variant(name) => out.push_str(name),
            }
        }
        out
    }
}

/// Parser error together with the place in data where it has occured.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    pub error: ParserError,
    pub path: FieldPath,
}

impl DecodeError {
    /// Error with no field path, i.e. occured before any field was entered.
    pub fn at_root(error: ParserError) -> Self {
        Self {
            error,
            path: FieldPath::default(),
        }
    }

    fn error_text(&self) -> String {
        if self.path.is_empty() {
            format!("{}", self.error)
        } else {
            format!("{} Field path: {}.", self.error, self.path.path_text())
        }
    }
}

/// Errors in signable transactions parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignableError {
    CutSignable,
    ImmortalHashMismatch,
    Parsing(DecodeError),
    SomeDataNotUsedExtensions { from: usize },
    UnsupportedSpecVersion(u32),
    WrongGenesisHash { as_decoded: H256, expected: H256 },
}

impl SignableError {
    fn error_text(&self) -> String {
        match &self {
            SignableError::CutSignable => String::from("Signable transaction is too short to contain call data and extensions."),
            SignableError::ImmortalHashMismatch => String::from("Extensions error. Block hash does not match the chain genesis hash in transaction with immortal `Era`."),
            SignableError::Parsing(decode_error) => format!("Parsing error. {decode_error}"),
            SignableError::SomeDataNotUsedExtensions { from } => format!("Some extensions data (input positions [{from}..]) remained unused after decoding."),
            SignableError::UnsupportedSpecVersion(spec_version) => format!("No supported runtime version is known for spec version {spec_version}."),
            SignableError::WrongGenesisHash { as_decoded, expected } => format!("Wrong chain. Apparent genesis hash in extensions {} does not match the expected one {}.", hex::encode(as_decoded.0), hex::encode(expected.0)),
        }
    }
}

/// Implement [`Display`] and `Error` (`std` only).
macro_rules! impl_display_and_error {
    ($($ty: ty), *) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                    write!(f, "{}", self.error_text())
                }
            }

            #[cfg(feature = "std")]
            impl Error for $ty {
                fn source(&self) -> Option<&(dyn Error + 'static)> {
                    None
                }
            }
        )*
    }
}

impl_display_and_error!(BufferError, ParserError, DecodeError, SignableError);

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.path_text())
    }
}

impl From<BufferError> for ParserError {
    fn from(buffer_error: BufferError) -> Self {
        ParserError::Buffer(buffer_error)
    }
}

impl From<DecodeError> for SignableError {
    fn from(decode_error: DecodeError) -> Self {
        SignableError::Parsing(decode_error)
    }
}
