use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::text_field;
use crate::error::{Result, ValidationError};
use crate::grammar::{self, Grammar, ALPHANUMERIC_PATTERN};
use crate::parser::ast::{Entry, LabeledValues};
use crate::parser::datetime::{canonical_date_time, format_date_time, parse_date_time};
use crate::parser::{check_length, parse_labeled};

// ── Meeting name ───────────────────────────────────────────

pub const MEETING_NAME_MAX_LENGTH: usize = 95;

pub const MEETING_NAME_CONSTRAINTS: &str = "Meeting names should only contain letters, digits, spaces, hyphens, \
     apostrophes, periods, parentheses, slashes, ampersands, commas, and must contain at least one letter or digit.";

static MEETING_NAME: Lazy<Grammar> = Lazy::new(|| {
    Grammar::new(r"^[\p{L}\p{M}0-9 '\s.()/&,\-]+$")
        .and_then(|g| g.requiring(ALPHANUMERIC_PATTERN))
        .expect("meeting name grammar")
});

/// Title of a meeting, e.g. `Quarterly review (Q3)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MeetingName(String);

impl MeetingName {
    pub fn parse(raw: &str) -> Result<Self> {
        const FIELD: &str = "meeting name";

        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyInput { field: FIELD });
        }
        check_length(FIELD, name, Some(MEETING_NAME_MAX_LENGTH))?;
        if !MEETING_NAME.is_match(name) {
            return Err(ValidationError::InvalidParameterGrammar {
                field: FIELD,
                reason: MEETING_NAME_CONSTRAINTS,
            });
        }
        Ok(MeetingName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_field!(MeetingName);

// ── Venue ──────────────────────────────────────────────────

/// Where a meeting takes place; every venue carries a label,
/// e.g. `AMK Hub (Level 2)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Venue(LabeledValues);

impl Venue {
    pub fn parse(raw: &str) -> Result<Self> {
        parse_labeled(&grammar::VENUE, raw).map(Venue)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn entries(&self) -> &[Entry] {
        self.0.entries()
    }
}

text_field!(Venue);

// ── When ───────────────────────────────────────────────────

/// Date and time of a meeting
///
/// Displays as `Jan 12 2025 14:00`; stored as `2025-01-12 14:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct When(NaiveDateTime);

impl When {
    pub fn parse(raw: &str) -> Result<Self> {
        parse_date_time(raw.trim()).map(When)
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    /// Storage form, accepted back by [`When::parse`]
    pub fn canonical(&self) -> String {
        canonical_date_time(&self.0)
    }
}

impl std::fmt::Display for When {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&format_date_time(&self.0))
    }
}

impl std::str::FromStr for When {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        When::parse(s)
    }
}

impl TryFrom<String> for When {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self> {
        When::parse(&s)
    }
}

impl From<When> for String {
    fn from(when: When) -> String {
        when.canonical()
    }
}
