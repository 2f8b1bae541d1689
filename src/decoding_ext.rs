//! Decoding of signable transaction extensions.
use primitive_types::H256;

use crate::additional_types::Era;
use crate::compacts::get_compact;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, FieldPath, ParserError, PathSegment};
use crate::special_types::{special_case_era, StLen};

/// Length of the fixed-size extensions tail: spec version, transaction
/// version, genesis hash and block hash.
pub const EXTENSIONS_TAIL_LEN: usize = 4 + 4 + 32 + 32;

/// Signed extensions of a signable transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Extensions {
    pub era: Era,
    pub nonce: u32,
    pub tip: u128,
    pub spec_version: u32,
    pub tx_version: u32,
    pub genesis_hash: H256,
    pub block_hash: H256,
}

fn decode_hash(cursor: &mut ByteCursor) -> Result<H256, ParserError> {
    let position = cursor.position();
    cursor
        .take_array::<32>()
        .map(H256)
        .map_err(|_| ParserError::TruncatedInput {
            position,
            minimal_length: 32,
            ty: "H256",
        })
}

fn at_extension<T>(name: &'static str, result: Result<T, ParserError>) -> Result<T, DecodeError> {
    result.map_err(|error| DecodeError {
        error,
        path: FieldPath(vec![PathSegment::Extension(name)]),
    })
}

/// Decode extensions at cursor position. Remaining data is not checked.
pub(crate) fn decode_extensions(cursor: &mut ByteCursor) -> Result<Extensions, DecodeError> {
    Ok(Extensions {
        era: at_extension("era", special_case_era(cursor))?,
        nonce: at_extension("nonce", get_compact::<u32>(cursor))?,
        tip: at_extension("tip", get_compact::<u128>(cursor))?,
        spec_version: at_extension("spec_version", u32::decode_value(cursor))?,
        tx_version: at_extension("tx_version", u32::decode_value(cursor))?,
        genesis_hash: at_extension("genesis_hash", decode_hash(cursor))?,
        block_hash: at_extension("block_hash", decode_hash(cursor))?,
    })
}
