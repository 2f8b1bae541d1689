//! Decoded data and its flattening into display cards.
//!
//! Decoded tree mirrors the shape of the field schemas. For display, the tree
//! is flattened into a list of [`ExtendedCard`]s, each with an indent level
//! reflecting the nesting.
use primitive_types::H256;
use sp_arithmetic::{PerThing, Perbill, Percent};

use crate::std::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

use crate::additional_types::{AccountId32, Era};
use crate::decoding_ext::Extensions;
use crate::printing_balance::{convert_balance_pretty, Currency};
use crate::schema::CallIndex;
use crate::special_indicators::{SpecialtyArray, SpecialtyUnsignedInteger, UnsignedWidth};
use crate::ShortSpecs;

/// Decoded value.
///
/// Byte arrays and vectors are borrowed from the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodedField<'a> {
    /// Fixed-width or compact unsigned integer.
    Unsigned {
        value: u128,
        width: UnsignedWidth,
        specialty: SpecialtyUnsignedInteger,
    },
    Bool(bool),
    Array {
        bytes: &'a [u8],
        specialty: SpecialtyArray,
    },
    Bytes(&'a [u8]),
    Perbill(Perbill),
    Percent(Percent),
    Variant(VariantData<'a>),
    Composite(Vec<NamedField<'a>>),
    Sequence(Vec<DecodedField<'a>>),
    Option(Option<Box<DecodedField<'a>>>),
    Call(Box<DecodedCall<'a>>),
}

/// Decoded field with its name. Empty name marks positional field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedField<'a> {
    pub name: &'static str,
    pub data: DecodedField<'a>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariantData<'a> {
    pub index: u8,
    pub name: &'static str,
    pub fields: Vec<NamedField<'a>>,
}

/// Decoded call with all its arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedCall<'a> {
    pub call_index: CallIndex,
    pub pallet_name: &'static str,
    pub call_name: &'static str,
    pub fields: Vec<NamedField<'a>>,
}

impl<'a> DecodedCall<'a> {
    /// Argument by name.
    pub fn field(&self, name: &str) -> Option<&DecodedField<'a>> {
        self.fields.iter().find(|x| x.name == name).map(|x| &x.data)
    }

    pub fn card(&self, indent: u32, short_specs: &ShortSpecs) -> Vec<ExtendedCard> {
        let mut out = vec![
            ExtendedCard {
                parser_card: ParserCard::PalletName(self.pallet_name),
                indent,
            },
            ExtendedCard {
                parser_card: ParserCard::CallName(self.call_name),
                indent: indent + 1,
            },
        ];
        for (i, field) in self.fields.iter().enumerate() {
            out.push(ExtendedCard {
                parser_card: field.title_card(i),
                indent: indent + 2,
            });
            out.extend(field.data.card(indent + 3, short_specs));
        }
        out
    }
}

impl<'a> NamedField<'a> {
    fn title_card(&self, number: usize) -> ParserCard {
        if self.name.is_empty() {
            ParserCard::FieldNumber(number)
        } else {
            ParserCard::FieldName(self.name)
        }
    }
}

/// Cards for a field set. Single positional field is shown without title.
fn card_fields(fields: &[NamedField], indent: u32, short_specs: &ShortSpecs) -> Vec<ExtendedCard> {
    if let [single] = fields {
        if single.name.is_empty() {
            return single.data.card(indent, short_specs);
        }
    }
    let mut out = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        out.push(ExtendedCard {
            parser_card: field.title_card(i),
            indent,
        });
        out.extend(field.data.card(indent + 1, short_specs));
    }
    out
}

macro_rules! single_card {
    ($variant: ident ($value: expr), $indent: expr) => {
        vec![ExtendedCard {
            parser_card: ParserCard::$variant($value),
            indent: $indent,
        }]
    };
}

impl<'a> DecodedField<'a> {
    pub fn card(&self, indent: u32, short_specs: &ShortSpecs) -> Vec<ExtendedCard> {
        match &self {
            DecodedField::Unsigned {
                value,
                width,
                specialty,
            } => match specialty {
                SpecialtyUnsignedInteger::None => vec![ExtendedCard {
                    parser_card: ParserCard::Unsigned {
                        value: *value,
                        width: *width,
                    },
                    indent,
                }],
                SpecialtyUnsignedInteger::Balance => single_card!(
                    Balance(convert_balance_pretty(
                        *value,
                        short_specs.decimals,
                        &short_specs.unit
                    )),
                    indent
                ),
            },
            DecodedField::Bool(value) => single_card!(Bool(*value), indent),
            DecodedField::Array { bytes, specialty } => {
                let parser_card = match specialty {
                    SpecialtyArray::AccountId => match AccountId32::from_slice(bytes) {
                        Some(account_id) => ParserCard::Id {
                            base58: account_id.as_base58(short_specs.base58prefix),
                            account_id,
                        },
                        None => ParserCard::Array(hex::encode(bytes)),
                    },
                    SpecialtyArray::Hash => match <[u8; 32]>::try_from(*bytes) {
                        Ok(array) => ParserCard::Hash(H256(array)),
                        Err(_) => ParserCard::Array(hex::encode(bytes)),
                    },
                    SpecialtyArray::None => ParserCard::Array(hex::encode(bytes)),
                };
                vec![ExtendedCard {
                    parser_card,
                    indent,
                }]
            }
            DecodedField::Bytes(bytes) => vec![ExtendedCard {
                parser_card: ParserCard::Bytes {
                    hex: hex::encode(bytes),
                    text: core::str::from_utf8(bytes).ok().map(|x| x.to_string()),
                },
                indent,
            }],
            DecodedField::Perbill(value) => single_card!(Perbill(*value), indent),
            DecodedField::Percent(value) => single_card!(Percent(*value), indent),
            DecodedField::Variant(variant_data) => {
                let mut out = single_card!(EnumVariantName(variant_data.name), indent);
                out.extend(card_fields(&variant_data.fields, indent + 1, short_specs));
                out
            }
            DecodedField::Composite(fields) => card_fields(fields, indent, short_specs),
            DecodedField::Sequence(elements) => {
                let mut out = single_card!(SequenceAnnounced(elements.len()), indent);
                for element in elements.iter() {
                    out.extend(element.card(indent + 1, short_specs));
                }
                out
            }
            DecodedField::Option(option) => match option {
                None => vec![ExtendedCard {
                    parser_card: ParserCard::None,
                    indent,
                }],
                Some(inner) => inner.card(indent, short_specs),
            },
            DecodedField::Call(call) => call.card(indent, short_specs),
        }
    }
}

impl Extensions {
    pub fn card(&self, indent: u32, short_specs: &ShortSpecs) -> Vec<ExtendedCard> {
        vec![
            ExtendedCard {
                parser_card: ParserCard::Era(self.era),
                indent,
            },
            ExtendedCard {
                parser_card: ParserCard::Nonce(self.nonce.to_string()),
                indent,
            },
            ExtendedCard {
                parser_card: ParserCard::Tip(convert_balance_pretty(
                    self.tip,
                    short_specs.decimals,
                    &short_specs.unit,
                )),
                indent,
            },
            ExtendedCard {
                parser_card: ParserCard::NameSpecVersion {
                    name: short_specs.name.clone(),
                    version: self.spec_version.to_string(),
                },
                indent,
            },
            ExtendedCard {
                parser_card: ParserCard::TxVersion(self.tx_version.to_string()),
                indent,
            },
            ExtendedCard {
                parser_card: ParserCard::BlockHash(self.block_hash),
                indent,
            },
        ]
    }
}

/// Card with its indent level.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtendedCard {
    pub parser_card: ParserCard,
    pub indent: u32,
}

impl ExtendedCard {
    /// Single-line printable form.
    pub fn show(&self) -> String {
        let payload = match &self.parser_card {
            ParserCard::Array(hex) => hex.clone(),
            ParserCard::Balance(currency) => currency.to_string(),
            ParserCard::BlockHash(hash) => hex::encode(hash.0),
            ParserCard::Bool(value) => value.to_string(),
            ParserCard::Bytes { hex, text } => match text {
                Some(text) => format!("{hex} ({text})"),
                None => hex.clone(),
            },
            ParserCard::CallName(name) => name.to_string(),
            ParserCard::EnumVariantName(name) => name.to_string(),
            ParserCard::Era(era) => match era {
                Era::Immortal => String::from("Immortal"),
                Era::Mortal(period, phase) => {
                    format!("Mortal, phase: {phase}, period: {period}")
                }
            },
            ParserCard::FieldName(name) => name.to_string(),
            ParserCard::FieldNumber(number) => number.to_string(),
            ParserCard::Hash(hash) => hex::encode(hash.0),
            ParserCard::Id { base58, .. } => base58.clone(),
            ParserCard::NameSpecVersion { name, version } => format!("{name}{version}"),
            ParserCard::Nonce(nonce) => nonce.clone(),
            ParserCard::None => String::from("None"),
            ParserCard::PalletName(name) => name.to_string(),
            ParserCard::Perbill(value) => {
                let parts = value.deconstruct();
                format!("{}.{:07}%", parts / 10_000_000, parts % 10_000_000)
            }
            ParserCard::Percent(value) => format!("{}%", value.deconstruct()),
            ParserCard::SequenceAnnounced(len) => format!("{len} element(s)"),
            ParserCard::Tip(currency) => currency.to_string(),
            ParserCard::TxVersion(version) => version.clone(),
            ParserCard::Unsigned { value, .. } => value.to_string(),
        };
        readable(self.indent, self.parser_card.title(), &payload)
    }
}

fn readable(indent: u32, card_type: &str, card_payload: &str) -> String {
    format!(
        "{}{}: {}",
        "  ".repeat(indent as usize),
        card_type,
        card_payload
    )
}

/// Single unit of displayed information.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParserCard {
    /// Byte array with no special meaning, hex encoded.
    Array(String),
    Balance(Currency),
    BlockHash(H256),
    Bool(bool),
    Bytes { hex: String, text: Option<String> },
    CallName(&'static str),
    EnumVariantName(&'static str),
    Era(Era),
    FieldName(&'static str),
    FieldNumber(usize),
    Hash(H256),
    Id { account_id: AccountId32, base58: String },
    NameSpecVersion { name: String, version: String },
    Nonce(String),
    None,
    PalletName(&'static str),
    Perbill(Perbill),
    Percent(Percent),

    /// Sequence length, elements follow with increased indent.
    SequenceAnnounced(usize),
    Tip(Currency),
    TxVersion(String),
    Unsigned { value: u128, width: UnsignedWidth },
}

impl ParserCard {
    fn title(&self) -> &'static str {
        match &self {
            ParserCard::Array(_) => "Array",
            ParserCard::Balance(_) => "Balance",
            ParserCard::BlockHash(_) => "Block Hash",
            ParserCard::Bool(_) => "Bool",
            ParserCard::Bytes { .. } => "Bytes",
            ParserCard::CallName(_) => "Call",
            ParserCard::EnumVariantName(_) => "Enum Variant Name",
            ParserCard::Era(_) => "Era",
            ParserCard::FieldName(_) => "Field Name",
            ParserCard::FieldNumber(_) => "Field Number",
            ParserCard::Hash(_) => "Hash",
            ParserCard::Id { .. } => "Id",
            ParserCard::NameSpecVersion { .. } => "Network",
            ParserCard::Nonce(_) => "Nonce",
            ParserCard::None => "Option",
            ParserCard::PalletName(_) => "Pallet",
            ParserCard::Perbill(_) => "Perbill",
            ParserCard::Percent(_) => "Percent",
            ParserCard::SequenceAnnounced(_) => "Sequence",
            ParserCard::Tip(_) => "Tip",
            ParserCard::TxVersion(_) => "Tx Version",
            ParserCard::Unsigned { width, .. } => width.name(),
        }
    }
}

/// Printable form of a card set, one card per line.
pub fn show_cards(cards: &[ExtendedCard]) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&card.show());
    }
    out
}
