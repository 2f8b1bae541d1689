//! Balance display in chain units.
#[cfg(feature = "std")]
use std::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(not(feature = "std"))]
use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::std::string::{String, ToString};

/// Balance ready for display: number and units.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Currency {
    pub number: String,
    pub units: String,
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.number, self.units)
    }
}

/// SI prefix of the smallest unit for a given number of chain decimals.
fn smallest_unit_prefix(decimals: u8) -> Option<&'static str> {
    match decimals {
        0 => Some(""),
        3 => Some("m"),
        6 => Some("u"),
        9 => Some("n"),
        12 => Some("p"),
        15 => Some("f"),
        18 => Some("a"),
        _ => None,
    }
}

/// Balance in smallest units, as chain units with `decimals` fraction digits.
///
/// Zero is printed in the smallest units, if they have an SI prefix.
pub fn convert_balance_pretty(value: u128, decimals: u8, unit: &str) -> Currency {
    if value == 0 {
        let units = match smallest_unit_prefix(decimals) {
            Some(prefix) => format!("{prefix}{unit}"),
            None => unit.to_string(),
        };
        return Currency {
            number: String::from("0"),
            units,
        };
    }
    let decimals = decimals as usize;
    let digits = value.to_string();
    let number = if decimals == 0 {
        digits
    } else {
        let padded = format!("{digits:0>width$}", width = decimals + 1);
        let split = padded.len() - decimals;
        format!("{}.{}", &padded[..split], &padded[split..])
    };
    Currency {
        number,
        units: unit.to_string(),
    }
}
