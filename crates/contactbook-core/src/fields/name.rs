use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::text_field;
use crate::error::{Result, ValidationError};
use crate::grammar::ALPHANUMERIC_PATTERN;
use crate::parser::check_length;

const FIELD: &str = "name";

pub const MAX_LENGTH: usize = 95;

pub const NO_ALPHANUMERIC: &str = "Names should contain at least one alphanumeric character";
pub const CONSTRAINTS: &str = "Names can only contain alphanumeric characters, spaces, hyphens, apostrophes, \
     accented characters, periods and slashes";
pub const INVALID_START_END: &str =
    "Names should not start or end with a hyphen, apostrophe, period or slash";
pub const CONSECUTIVE_SEPARATORS: &str =
    "Names should not contain consecutive spaces, hyphens, apostrophes, periods or slashes";

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(ALPHANUMERIC_PATTERN).expect("alphanumeric pattern"));
static ALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{M}0-9 \-'’./]+$").expect("name grammar"));

const PUNCTUATION: [char; 5] = ['-', '\'', '’', '.', '/'];

/// A contact's full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyInput { field: FIELD });
        }
        check_length(FIELD, name, Some(MAX_LENGTH))?;

        let reason = if !ALPHANUMERIC.is_match(name) {
            Some(NO_ALPHANUMERIC)
        } else if !ALLOWED.is_match(name) {
            Some(CONSTRAINTS)
        } else if name.starts_with(&PUNCTUATION[..]) || name.ends_with(&PUNCTUATION[..]) {
            Some(INVALID_START_END)
        } else if has_consecutive_separators(name) {
            Some(CONSECUTIVE_SEPARATORS)
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ValidationError::InvalidParameterGrammar { field: FIELD, reason }),
            None => Ok(Name(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_field!(Name);

/// Same separator twice in a row, e.g. `Ann--Marie` or `Ann  Lee`
fn has_consecutive_separators(name: &str) -> bool {
    name.chars()
        .zip(name.chars().skip(1))
        .any(|(a, b)| a == b && (a == ' ' || PUNCTUATION.contains(&a)))
}
