use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::text_field;
use crate::error::{Result, ValidationError};
use crate::grammar::{self, PHONE_CONSTRAINTS, PHONE_PATTERN};
use crate::parser::ast::{Entry, LabeledValues};
use crate::parser::parse_labeled;

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone grammar"));

/// A contact's main phone number, e.g. `+65 93121534 x12`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self> {
        let phone = raw.trim();
        if phone.is_empty() {
            return Err(ValidationError::EmptyInput { field: "phone" });
        }
        if !PHONE.is_match(phone) {
            return Err(ValidationError::InvalidParameterGrammar {
                field: "phone",
                reason: PHONE_CONSTRAINTS,
            });
        }
        Ok(Phone(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_field!(Phone);

/// Additional labeled phone numbers; may be left blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OtherPhones(LabeledValues);

impl OtherPhones {
    /// Parse other numbers; blank input is an empty value
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(OtherPhones::default());
        }
        parse_labeled(&grammar::OTHER_PHONES, raw).map(OtherPhones)
    }

    /// Parse other numbers, rejecting any that repeats the main number
    pub fn parse_with_main(raw: &str, main: &Phone) -> Result<Self> {
        let phones = Self::parse(raw)?;
        phones.check_against_main(main)?;
        Ok(phones)
    }

    pub fn check_against_main(&self, main: &Phone) -> Result<()> {
        if self.0.parameters().any(|p| p == main.as_str()) {
            return Err(ValidationError::DuplicatesMainPhone {
                field: grammar::OTHER_PHONES.name,
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn entries(&self) -> &[Entry] {
        self.0.entries()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

text_field!(OtherPhones);
