//! Optional keys of a `schema.ini` section.
//!
//! The options table in the frontend shows one row per [`OptionKey`]; only
//! rows with a value end up in the output, in the order of [`OptionKey::ALL`].

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional `schema.ini` keys the form lets the user fill in.
///
/// The declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionKey {
    CharacterSet,
    DateTimeFormat,
    DecimalSymbol,
    NumberDigits,
    NumberLeadingZeros,
    CurrencySymbol,
    CurrencyPosFormat,
    CurrencyDigits,
    CurrencyNegFormat,
    CurrencyThousandSymbol,
    CurrencyDecimalSymbol,
}

impl OptionKey {
    pub const ALL: [OptionKey; 11] = [
        OptionKey::CharacterSet,
        OptionKey::DateTimeFormat,
        OptionKey::DecimalSymbol,
        OptionKey::NumberDigits,
        OptionKey::NumberLeadingZeros,
        OptionKey::CurrencySymbol,
        OptionKey::CurrencyPosFormat,
        OptionKey::CurrencyDigits,
        OptionKey::CurrencyNegFormat,
        OptionKey::CurrencyThousandSymbol,
        OptionKey::CurrencyDecimalSymbol,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::CharacterSet => "CharacterSet",
            OptionKey::DateTimeFormat => "DateTimeFormat",
            OptionKey::DecimalSymbol => "DecimalSymbol",
            OptionKey::NumberDigits => "NumberDigits",
            OptionKey::NumberLeadingZeros => "NumberLeadingZeros",
            OptionKey::CurrencySymbol => "CurrencySymbol",
            OptionKey::CurrencyPosFormat => "CurrencyPosFormat",
            OptionKey::CurrencyDigits => "CurrencyDigits",
            OptionKey::CurrencyNegFormat => "CurrencyNegFormat",
            OptionKey::CurrencyThousandSymbol => "CurrencyThousandSymbol",
            OptionKey::CurrencyDecimalSymbol => "CurrencyDecimalSymbol",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownOption(s.to_string()))
    }
}

/// A key/value pair from the options table. Empty values are not emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Which option this row sets.
    pub key: OptionKey,
    /// Raw text written after `=`. Not validated; the driver interprets it.
    pub value: String,
}

impl OptionEntry {
    pub fn new(key: OptionKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}
