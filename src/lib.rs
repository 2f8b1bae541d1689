//! This crate is a parser for Substrate calls and signable transactions,
//! intended for constrained signing devices that have to show what exactly
//! is being signed.
//!
//! Call layouts are not taken from chain metadata. Instead, each supported
//! runtime version ([`RuntimeVersion`]) has a static call table compiled into
//! the crate, and all incoming data is decoded according to the table of the
//! version it was declared for.
//!
//! # Assumptions
//!
//! Data is [SCALE-encoded](https://docs.substrate.io/reference/scale-codec/).
//! Data blobs entering decoder are expected to be decoded completely: all
//! provided `&[u8]` data must be used in decoding with no data remaining
//! unparsed.
//!
//! Decoder never reads past the end of the input and never allocates space
//! based on a length read from the input before checking it against the
//! remaining data. Nested calls are limited in depth, see [`DecodeLimits`].
//!
//! ## Calls
//!
//! Call starts with two bytes: pallet index and method index within the
//! pallet. Call arguments follow, encoded one after another.
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use substrate_call_parser::{decode_transaction, cards::DecodedField};
//!
//! // `Balances.transfer` in `V11`: destination account id and compact value
//! let data = hex::decode("04008eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48a10f").unwrap();
//!
//! let decoded = decode_transaction(11, &data).unwrap();
//! let call = decoded.call();
//! assert_eq!(call.pallet_name, "Balances");
//! assert_eq!(call.call_name, "transfer");
//! assert!(matches!(call.field("value"), Some(DecodedField::Unsigned { value: 1000, .. })));
//! # }
//! ```
//!
//! ## Signable transactions
//!
//! Signable transaction consists of the call part and extensions part. Call
//! is not length-prefixed, extensions follow right after it:
//!
//! |call|era|nonce|tip|spec_version|tx_version|genesis_hash|block_hash|
//!
//! Spec version is found at a known distance from the transaction end, and
//! selects the runtime version through [`RuntimeVersionMap`]. Then the call
//! is decoded, followed by extensions.
//!
//! Decoded data could be transformed into set of flat and formatted
//! [`ExtendedCard`] cards using `card` methods. Cards could be printed
//! with `show`.
#![no_std]
#![deny(unused_crate_dependencies)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate alloc as std;

#[macro_use]
pub mod schema;

pub mod additional_types;
pub mod calls_v11;
pub mod calls_v12;
pub mod cards;
pub mod compacts;
pub mod cursor;
pub mod decoding;
pub mod decoding_ext;
pub mod dispatch;
pub mod error;
pub mod printing_balance;
mod propagated;
pub mod special_indicators;
mod special_types;
pub mod traits;

#[cfg(test)]
mod tests;

use log::debug;
use parity_scale_codec::{Decode, Encode};
use primitive_types::H256;

use crate::std::{string::String, vec::Vec};

pub use dispatch::{resolve, BuiltinRegistry};
pub use schema::{CallIndex, ResolvedCall, RuntimeVersion};
pub use traits::AsCallRegistry;

use cards::{DecodedCall, ExtendedCard};
use cursor::ByteCursor;
use decoding::decode_call_at_root;
use decoding_ext::{decode_extensions, Extensions, EXTENSIONS_TAIL_LEN};
use error::{DecodeError, ParserError, SignableError};

/// Chain data necessary to display decoded data correctly.
///
/// `ShortSpecs` are not checked in this crate to be correct ones for the chain,
/// this must be done elsewhere.
///
/// Using wrong specs may result in incorrectly displayed parsed information.
#[derive(Clone, Debug, Decode, Encode, Eq, PartialEq)]
pub struct ShortSpecs {
    pub base58prefix: u16,
    pub decimals: u8,
    pub unit: String,

    /// Network name, displayed together with spec version.
    pub name: String,
}

/// Default maximum depth of nested calls.
pub const MAX_CALL_DEPTH: u8 = 4;

/// Resource limits for a single decoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeLimits {
    /// Maximum number of calls nested into the top-level call, one inside
    /// another. Calls within a single batch are on the same level.
    pub max_call_depth: u8,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_call_depth: MAX_CALL_DEPTH,
        }
    }
}

/// Runtime version used by chain for a range of spec versions, inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpecVersionRange {
    pub from: u32,
    pub to: u32,
    pub version: RuntimeVersion,
}

/// Spec versions of a chain mapped into runtime versions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RuntimeVersionMap(pub Vec<SpecVersionRange>);

impl RuntimeVersionMap {
    pub fn new(ranges: Vec<SpecVersionRange>) -> Self {
        Self(ranges)
    }

    /// Runtime version for a spec version. First matching range is used.
    pub fn runtime_version(&self, spec_version: u32) -> Option<RuntimeVersion> {
        self.0
            .iter()
            .find(|range| range.from <= spec_version && spec_version <= range.to)
            .map(|range| range.version)
    }
}

/// Decoded call together with the runtime version it was decoded for.
///
/// Could be produced only by decoding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionedCall<'a> {
    version: RuntimeVersion,
    call: DecodedCall<'a>,
}

/// Per-version view of [`VersionedCall`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VersionedCallRef<'b, 'a> {
    V11(&'b DecodedCall<'a>),
    V12(&'b DecodedCall<'a>),
}

impl<'a> VersionedCall<'a> {
    pub fn version(&self) -> RuntimeVersion {
        self.version
    }

    pub fn call(&self) -> &DecodedCall<'a> {
        &self.call
    }

    pub fn into_call(self) -> DecodedCall<'a> {
        self.call
    }

    pub fn as_versioned(&self) -> VersionedCallRef<'_, 'a> {
        match self.version {
            RuntimeVersion::V11 => VersionedCallRef::V11(&self.call),
            RuntimeVersion::V12 => VersionedCallRef::V12(&self.call),
        }
    }

    pub fn card(&self, short_specs: &ShortSpecs) -> Vec<ExtendedCard> {
        self.call.card(0, short_specs)
    }
}

/// Decode call data for a runtime version tag, with built-in call tables and
/// default limits.
pub fn decode_transaction(version_tag: u32, data: &[u8]) -> Result<VersionedCall<'_>, DecodeError> {
    decode_transaction_with(&BuiltinRegistry, DecodeLimits::default(), version_tag, data)
}

/// Decode call data for a runtime version tag, with given call tables and
/// limits.
///
/// All data must be used.
pub fn decode_transaction_with<'a, R>(
    registry: &R,
    limits: DecodeLimits,
    version_tag: u32,
    data: &'a [u8],
) -> Result<VersionedCall<'a>, DecodeError>
where
    R: AsCallRegistry + ?Sized,
{
    let version = RuntimeVersion::from_tag(version_tag).map_err(|e| {
        debug!("{e}");
        DecodeError::at_root(e)
    })?;
    let mut cursor = ByteCursor::new(data);
    let call = decode_call_at_root(&mut cursor, registry, version, limits)?;
    if !cursor.is_empty() {
        let from = cursor.position();
        debug!("{version} call decoded, but data remains from position {from}");
        return Err(DecodeError::at_root(ParserError::SomeDataNotUsed { from }));
    }
    Ok(VersionedCall { version, call })
}

/// Decoded signable transaction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionParsed<'a> {
    pub call: VersionedCall<'a>,
    pub extensions: Extensions,
}

/// Signable transaction represented as formatted flat cards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionCarded {
    pub call: Vec<ExtendedCard>,
    pub extensions: Vec<ExtendedCard>,
}

impl<'a> TransactionParsed<'a> {
    /// Transform nested data from `TransactionParsed` into flat cards.
    pub fn card(&self, short_specs: &ShortSpecs) -> TransactionCarded {
        TransactionCarded {
            call: self.call.card(short_specs),
            extensions: self.extensions.card(0, short_specs),
        }
    }
}

/// Parse signable transaction: call followed by extensions, with no call
/// length prefix.
///
/// Runtime version is selected by the spec version found in extensions.
/// Genesis hash in extensions must match `genesis_hash`. For immortal
/// transactions, block hash must be the genesis hash as well.
pub fn parse_transaction<'a, R>(
    data: &'a [u8],
    registry: &R,
    version_map: &RuntimeVersionMap,
    genesis_hash: H256,
    limits: DecodeLimits,
) -> Result<TransactionParsed<'a>, SignableError>
where
    R: AsCallRegistry + ?Sized,
{
    let mut cursor = ByteCursor::new(data);

    let spec_version_encoded = cursor
        .peek_from_end(EXTENSIONS_TAIL_LEN, 4)
        .map_err(|_| SignableError::CutSignable)?;
    let spec_version = u32::decode(&mut &spec_version_encoded[..])
        .map_err(|_| SignableError::CutSignable)?;
    let version = version_map.runtime_version(spec_version).ok_or_else(|| {
        debug!("spec version {spec_version} is not mapped to any runtime version");
        SignableError::UnsupportedSpecVersion(spec_version)
    })?;

    let call = decode_call_at_root(&mut cursor, registry, version, limits)?;
    let extensions = decode_extensions(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(SignableError::SomeDataNotUsedExtensions {
            from: cursor.position(),
        });
    }

    if extensions.genesis_hash != genesis_hash {
        return Err(SignableError::WrongGenesisHash {
            as_decoded: extensions.genesis_hash,
            expected: genesis_hash,
        });
    }
    if extensions.era.is_immortal() && extensions.block_hash != genesis_hash {
        return Err(SignableError::ImmortalHashMismatch);
    }

    Ok(TransactionParsed {
        call: VersionedCall { version, call },
        extensions,
    })
}
