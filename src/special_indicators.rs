//! Special decoding triggers and indicators.
//!
//! Field schemas carry indicators of how the decoded value should be
//! treated later on, when it is carded for display. Indicators never change
//! the way the data is decoded.

/// Width of a fixed-size or compact-encoded unsigned integer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnsignedWidth {
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl UnsignedWidth {
    /// Encoded size of a fixed-width integer, in bytes.
    pub const fn size(&self) -> usize {
        match self {
            UnsignedWidth::U8 => 1,
            UnsignedWidth::U16 => 2,
            UnsignedWidth::U32 => 4,
            UnsignedWidth::U64 => 8,
            UnsignedWidth::U128 => 16,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            UnsignedWidth::U8 => "u8",
            UnsignedWidth::U16 => "u16",
            UnsignedWidth::U32 => "u32",
            UnsignedWidth::U64 => "u64",
            UnsignedWidth::U128 => "u128",
        }
    }
}

/// Unsigned integer specialty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialtyUnsignedInteger {
    None,

    /// Value is an amount in chain smallest units, displayed with chain
    /// decimals and unit.
    Balance,
}

/// Fixed byte array specialty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialtyArray {
    None,

    /// 32-byte account id, displayed in base58 form.
    AccountId,

    /// 32-byte hash.
    Hash,
}

/// Kind of a per-thing value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PerThingKind {
    Perbill,
    Percent,
}
