use serde::{Deserialize, Serialize};

use super::text_field;
use crate::error::Result;
use crate::grammar;
use crate::parser::ast::{Entry, LabeledValues};
use crate::parser::parse_labeled;

/// One or more labeled addresses
///
/// A single address may omit its label; with several addresses every one
/// must be labeled: `Blk 30 Geylang St (Home) Blk 11 AMK (Work)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(LabeledValues);

impl Address {
    pub fn parse(raw: &str) -> Result<Self> {
        parse_labeled(&grammar::ADDRESS, raw).map(Address)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn entries(&self) -> &[Entry] {
        self.0.entries()
    }
}

text_field!(Address);
