//! Transaction era and account id, decoded and displayed without `sp_core`
//! and `sp_runtime`.
use base58::ToBase58;
use blake2::{Blake2b512, Digest};
use parity_scale_codec::{Decode, Error, Input};

use crate::std::{string::String, vec::Vec};

/// Era period, in blocks. Always a power of two, at least `4`.
pub type Period = u64;

/// Block within the era period the transaction was constructed at.
pub type Phase = u64;

/// Transaction validity period, encoded as in `sp_runtime::generic::Era`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Era {
    Immortal,
    Mortal(Period, Phase),
}

impl Era {
    pub fn is_immortal(&self) -> bool {
        matches!(self, Era::Immortal)
    }
}

/// Immortal era is a single zero byte. Mortal era is a little endian `u16`:
/// four low bits hold `log2(period) - 1`, the rest hold the quantized phase.
///
/// Only decoding is needed, era is never constructed here.
impl Decode for Era {
    fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
        let low = input.read_byte()?;
        if low == 0 {
            return Ok(Self::Immortal);
        }
        let high = input.read_byte()?;
        let encoded = u16::from_le_bytes([low, high]) as u64;
        let period: Period = 2 << (encoded & 0b1111);
        // phase granularity grows for periods over 4096 blocks
        let phase: Phase = (encoded >> 4) * (period >> 12).max(1);
        if period >= 4 && phase < period {
            Ok(Self::Mortal(period, phase))
        } else {
            Err("Invalid era period and phase".into())
        }
    }
}

pub const ACCOUNT_ID_32_LEN: usize = 32;

/// 32-byte account id, as `sp_core::crypto::AccountId32`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccountId32(pub [u8; ACCOUNT_ID_32_LEN]);

impl AccountId32 {
    /// Account id from a slice, if the length matches.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        slice.try_into().ok().map(Self)
    }

    /// SS58 address with given network prefix.
    pub fn as_base58(&self, base58prefix: u16) -> String {
        as_base58_with_known_prefix(&self.0, base58prefix)
    }
}

/// Hashed together with the address payload for the checksum.
const SS58_PREFIX: &[u8] = b"SS58PRE";

/// Number of checksum bytes appended to 32-byte keys.
const SS58_CHECKSUM_LEN: usize = 2;

/// Blake2b-512 of the prefixed payload, first bytes form the checksum.
fn ss58hash(data: &[u8]) -> Vec<u8> {
    let mut ctx = Blake2b512::new();
    ctx.update(SS58_PREFIX);
    ctx.update(data);
    ctx.finalize().to_vec()
}

/// SS58 address: network identifier (one byte below `64`, two bytes
/// otherwise), public key and checksum, in base58.
///
/// Same output as `to_ss58check_with_version()` of `sp_core::crypto::Ss58Codec`.
fn as_base58_with_known_prefix(input: &[u8], base58prefix: u16) -> String {
    // only 14 bits are used for network identifier
    let ident: u16 = base58prefix & 0b0011_1111_1111_1111;
    let mut v = if ident < 64 {
        vec![ident as u8]
    } else {
        let first = ((ident & 0b0000_0000_1111_1100) as u8) >> 2;
        let second = ((ident >> 8) as u8) | ((ident & 0b0000_0000_0000_0011) as u8) << 6;
        vec![first | 0b0100_0000, second]
    };
    v.extend(input);
    let checksum = ss58hash(&v);
    v.extend(&checksum[..SS58_CHECKSUM_LEN]);
    v.to_base58()
}
