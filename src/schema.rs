//! Declarative call layouts.
//!
//! Each supported [`RuntimeVersion`] has a [`CallTable`], a static set of
//! pallets with the calls they define. Every call is described by an
//! ordered list of [`FieldDescriptor`]s, and every field by a
//! [`FieldSchema`] tree. Decoder interprets the trees, so adding a call or a
//! whole runtime version is a data change only.
//!
//! Tables are `static` and never change after compilation. Existing tables
//! must not be modified when a new runtime version appears, a new table is
//! added instead.
#[cfg(feature = "std")]
use std::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(not(feature = "std"))]
use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::ParserError;
use crate::special_indicators::{
    PerThingKind, SpecialtyArray, SpecialtyUnsignedInteger, UnsignedWidth,
};

/// Chain metadata generation the call data is encoded for.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RuntimeVersion {
    V11,
    V12,
}

impl RuntimeVersion {
    /// All supported versions.
    pub const ALL: [RuntimeVersion; 2] = [RuntimeVersion::V11, RuntimeVersion::V12];

    /// Runtime version from its numeric tag.
    pub fn from_tag(tag: u32) -> Result<Self, ParserError> {
        match tag {
            11 => Ok(RuntimeVersion::V11),
            12 => Ok(RuntimeVersion::V12),
            _ => Err(ParserError::UnsupportedVersion { tag }),
        }
    }

    pub fn tag(&self) -> u32 {
        match self {
            RuntimeVersion::V11 => 11,
            RuntimeVersion::V12 => 12,
        }
    }
}

impl Display for RuntimeVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "V{}", self.tag())
    }
}

/// Call identifier within a single [`CallTable`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallIndex {
    pub pallet: u8,
    pub method: u8,
}

/// How to decode a single value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldSchema {
    /// Fixed-width little endian unsigned integer.
    Unsigned {
        width: UnsignedWidth,
        specialty: SpecialtyUnsignedInteger,
    },

    /// Single byte, `0` or `1`.
    Bool,

    /// Compact unsigned integer, must fit into `width`.
    Compact {
        width: UnsignedWidth,
        specialty: SpecialtyUnsignedInteger,
    },

    /// Fixed length byte array.
    Array { len: usize, specialty: SpecialtyArray },

    /// Byte vector with compact length prefix.
    Bytes,

    /// `Perbill` or `Percent`, plain or compact.
    PerThing { kind: PerThingKind, compact: bool },

    /// Enum, single byte discriminant followed by the variant fields.
    Variant(&'static [VariantSchema]),

    /// Struct or tuple, fields one after another.
    Composite(&'static [FieldDescriptor]),

    /// Vector with compact length prefix.
    Sequence(&'static FieldSchema),

    /// `0` for `None`, `1` followed by the value for `Some`.
    Option(&'static FieldSchema),

    /// Call from the same runtime version call table.
    Call,
}

impl FieldSchema {
    /// Minimal number of bytes any valid encoding of this schema takes.
    pub fn min_encoded_len(&self) -> usize {
        match self {
            FieldSchema::Unsigned { width, .. } => width.size(),
            FieldSchema::Bool => 1,
            FieldSchema::Compact { .. } => 1,
            FieldSchema::Array { len, .. } => *len,
            FieldSchema::Bytes => 1,
            FieldSchema::PerThing { kind, compact } => match (kind, compact) {
                (_, true) => 1,
                (PerThingKind::Perbill, false) => 4,
                (PerThingKind::Percent, false) => 1,
            },
            FieldSchema::Variant(_) => 1,
            FieldSchema::Composite(fields) => fields.iter().map(|x| x.ty.min_encoded_len()).sum(),
            FieldSchema::Sequence(_) => 1,
            FieldSchema::Option(_) => 1,
            FieldSchema::Call => 2,
        }
    }
}

/// Named field. Empty name marks positional (tuple-like) field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: FieldSchema,
}

/// Enum variant with its discriminant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VariantSchema {
    pub index: u8,
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// Call name and argument layout.
#[derive(Debug, Eq, PartialEq)]
pub struct CallSchema {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// Calls of a single pallet. Method index is the position in `calls`.
#[derive(Debug, Eq, PartialEq)]
pub struct PalletCalls {
    pub index: u8,
    pub name: &'static str,
    pub calls: &'static [CallSchema],
}

/// All calls of a runtime version.
#[derive(Debug, Eq, PartialEq)]
pub struct CallTable {
    pub version: RuntimeVersion,
    pub pallets: &'static [PalletCalls],
}

/// Call found in a [`CallTable`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedCall {
    pub version: RuntimeVersion,
    pub call_index: CallIndex,
    pub pallet_name: &'static str,
    pub schema: &'static CallSchema,
}

impl CallTable {
    /// Pallet by its index.
    pub fn pallet_by_index(&'static self, index: u8) -> Option<&'static PalletCalls> {
        self.pallets.iter().find(|x| x.index == index)
    }

    /// Call by pallet and method indices.
    pub fn resolve(&'static self, call_index: CallIndex) -> Result<ResolvedCall, ParserError> {
        let unknown = ParserError::UnknownCall {
            version: self.version,
            pallet_index: call_index.pallet,
            method_index: call_index.method,
        };
        let pallet = self.pallet_by_index(call_index.pallet).ok_or(unknown.clone())?;
        let schema = pallet.calls.get(call_index.method as usize).ok_or(unknown)?;
        Ok(ResolvedCall {
            version: self.version,
            call_index,
            pallet_name: pallet.name,
            schema,
        })
    }

    /// All calls with their indices.
    pub fn iter(&'static self) -> impl Iterator<Item = ResolvedCall> {
        let version = self.version;
        self.pallets.iter().flat_map(move |pallet| {
            pallet
                .calls
                .iter()
                .enumerate()
                .map(move |(method, schema)| ResolvedCall {
                    version,
                    call_index: CallIndex {
                        pallet: pallet.index,
                        method: method as u8,
                    },
                    pallet_name: pallet.name,
                    schema,
                })
        })
    }
}

/// Call schema: `call!("name", "field" => SCHEMA, ...)`.
macro_rules! call {
    ($name: literal $(, $field: literal => $ty: expr)*) => {
        $crate::schema::CallSchema {
            name: $name,
            fields: &[$($crate::schema::FieldDescriptor { name: $field, ty: $ty }),*],
        }
    };
}

/// Enum schema: `variants![0 "Name" ("field" => SCHEMA, ...), ...]`.
macro_rules! variants {
    ($($index: literal $name: literal ($($field: literal => $ty: expr),*)),*) => {
        $crate::schema::FieldSchema::Variant(&[$(
            $crate::schema::VariantSchema {
                index: $index,
                name: $name,
                fields: &[$($crate::schema::FieldDescriptor { name: $field, ty: $ty }),*],
            }
        ),*])
    };
}

/// Struct schema: `composite!("field" => SCHEMA, ...)`.
macro_rules! composite {
    ($($field: literal => $ty: expr),*) => {
        $crate::schema::FieldSchema::Composite(&[$(
            $crate::schema::FieldDescriptor { name: $field, ty: $ty }
        ),*])
    };
}

pub const U8: FieldSchema = FieldSchema::Unsigned {
    width: UnsignedWidth::U8,
    specialty: SpecialtyUnsignedInteger::None,
};
pub const U16: FieldSchema = FieldSchema::Unsigned {
    width: UnsignedWidth::U16,
    specialty: SpecialtyUnsignedInteger::None,
};
pub const U32: FieldSchema = FieldSchema::Unsigned {
    width: UnsignedWidth::U32,
    specialty: SpecialtyUnsignedInteger::None,
};
pub const U64: FieldSchema = FieldSchema::Unsigned {
    width: UnsignedWidth::U64,
    specialty: SpecialtyUnsignedInteger::None,
};
pub const BOOL: FieldSchema = FieldSchema::Bool;
pub const COMPACT_U32: FieldSchema = FieldSchema::Compact {
    width: UnsignedWidth::U32,
    specialty: SpecialtyUnsignedInteger::None,
};
pub const COMPACT_U64: FieldSchema = FieldSchema::Compact {
    width: UnsignedWidth::U64,
    specialty: SpecialtyUnsignedInteger::None,
};

/// `Compact<Balance>`.
pub const BALANCE: FieldSchema = FieldSchema::Compact {
    width: UnsignedWidth::U128,
    specialty: SpecialtyUnsignedInteger::Balance,
};

/// `Balance` without compact encoding.
pub const BALANCE_PLAIN: FieldSchema = FieldSchema::Unsigned {
    width: UnsignedWidth::U128,
    specialty: SpecialtyUnsignedInteger::Balance,
};

pub const BLOCK_NUMBER: FieldSchema = U32;
pub const WEIGHT: FieldSchema = U64;

pub const ACCOUNT_ID: FieldSchema = FieldSchema::Array {
    len: 32,
    specialty: SpecialtyArray::AccountId,
};
pub const HASH: FieldSchema = FieldSchema::Array {
    len: 32,
    specialty: SpecialtyArray::Hash,
};

/// Session public key.
pub const KEY: FieldSchema = FieldSchema::Array {
    len: 32,
    specialty: SpecialtyArray::None,
};

pub const BYTES: FieldSchema = FieldSchema::Bytes;
pub const PERBILL: FieldSchema = FieldSchema::PerThing {
    kind: PerThingKind::Perbill,
    compact: false,
};
pub const PERBILL_COMPACT: FieldSchema = FieldSchema::PerThing {
    kind: PerThingKind::Perbill,
    compact: true,
};
pub const PERCENT: FieldSchema = FieldSchema::PerThing {
    kind: PerThingKind::Percent,
    compact: false,
};
pub const CALL: FieldSchema = FieldSchema::Call;

/// Multisig timepoint, block height and extrinsic index.
pub const TIMEPOINT: FieldSchema = composite!("height" => BLOCK_NUMBER, "index" => U32);

/// `(key, value)` storage pair.
pub const KEY_VALUE: FieldSchema = composite!("" => BYTES, "" => BYTES);

pub const CHANGES_TRIE_CONFIGURATION: FieldSchema =
    composite!("digest_interval" => U32, "digest_levels" => U32);

pub const VESTING_INFO: FieldSchema = composite!(
    "locked" => BALANCE_PLAIN,
    "per_block" => BALANCE_PLAIN,
    "starting_block" => BLOCK_NUMBER
);

/// Signature of any supported scheme, as 64 opaque bytes.
pub const SIGNATURE: FieldSchema = FieldSchema::Array {
    len: 64,
    specialty: SpecialtyArray::None,
};

/// Optional block interval and number of repetitions of a scheduled call.
pub const PERIOD: FieldSchema = FieldSchema::Option(&composite!("" => BLOCK_NUMBER, "" => U32));

/// Raw identity data of given length.
macro_rules! raw_data {
    ($len: literal) => {
        $crate::schema::FieldSchema::Array {
            len: $len,
            specialty: $crate::special_indicators::SpecialtyArray::None,
        }
    };
}

/// Identity data field. Raw data up to 32 bytes has its length in the
/// discriminant, hashes are stored as is.
pub const IDENTITY_DATA: FieldSchema = variants![
    0 "None" (),
    1 "Raw0" (),
    2 "Raw1" ("" => raw_data!(1)),
    3 "Raw2" ("" => raw_data!(2)),
    4 "Raw3" ("" => raw_data!(3)),
    5 "Raw4" ("" => raw_data!(4)),
    6 "Raw5" ("" => raw_data!(5)),
    7 "Raw6" ("" => raw_data!(6)),
    8 "Raw7" ("" => raw_data!(7)),
    9 "Raw8" ("" => raw_data!(8)),
    10 "Raw9" ("" => raw_data!(9)),
    11 "Raw10" ("" => raw_data!(10)),
    12 "Raw11" ("" => raw_data!(11)),
    13 "Raw12" ("" => raw_data!(12)),
    14 "Raw13" ("" => raw_data!(13)),
    15 "Raw14" ("" => raw_data!(14)),
    16 "Raw15" ("" => raw_data!(15)),
    17 "Raw16" ("" => raw_data!(16)),
    18 "Raw17" ("" => raw_data!(17)),
    19 "Raw18" ("" => raw_data!(18)),
    20 "Raw19" ("" => raw_data!(19)),
    21 "Raw20" ("" => raw_data!(20)),
    22 "Raw21" ("" => raw_data!(21)),
    23 "Raw22" ("" => raw_data!(22)),
    24 "Raw23" ("" => raw_data!(23)),
    25 "Raw24" ("" => raw_data!(24)),
    26 "Raw25" ("" => raw_data!(25)),
    27 "Raw26" ("" => raw_data!(26)),
    28 "Raw27" ("" => raw_data!(27)),
    29 "Raw28" ("" => raw_data!(28)),
    30 "Raw29" ("" => raw_data!(29)),
    31 "Raw30" ("" => raw_data!(30)),
    32 "Raw31" ("" => raw_data!(31)),
    33 "Raw32" ("" => raw_data!(32)),
    34 "BlakeTwo256" ("" => HASH),
    35 "Sha256" ("" => HASH),
    36 "Keccak256" ("" => HASH),
    37 "ShaThree256" ("" => HASH)
];

pub const IDENTITY_INFO: FieldSchema = composite!(
    "additional" => FieldSchema::Sequence(&composite!("" => IDENTITY_DATA, "" => IDENTITY_DATA)),
    "display" => IDENTITY_DATA,
    "legal" => IDENTITY_DATA,
    "web" => IDENTITY_DATA,
    "riot" => IDENTITY_DATA,
    "email" => IDENTITY_DATA,
    "pgp_fingerprint" => FieldSchema::Option(&FieldSchema::Array {
        len: 20,
        specialty: SpecialtyArray::None
    }),
    "image" => IDENTITY_DATA,
    "twitter" => IDENTITY_DATA
);

/// Registrar judgement on identity.
pub const JUDGEMENT: FieldSchema = variants![
    0 "Unknown" (),
    1 "FeePaid" ("" => BALANCE_PLAIN),
    2 "Reasonable" (),
    3 "KnownGood" (),
    4 "OutOfDate" (),
    5 "LowQuality" (),
    6 "Erroneous" ()
];

/// Sub-account with its identity data.
pub const SUB_ACCOUNT: FieldSchema = composite!("" => ACCOUNT_ID, "" => IDENTITY_DATA);
