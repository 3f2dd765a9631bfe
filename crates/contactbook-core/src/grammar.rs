//! Field grammars — per-field validation tables
//!
//! A [`FieldGrammar`] says how a labeled field is validated: the regular
//! grammar each parameter must match, the label grammar, the maximum total
//! length and whether a label is compulsory even for a single value.
//!
//! Tables are built once, never mutated, and shared by every validation of
//! their field kind.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regular grammar for a single token
///
/// `required`, when present, must additionally be found somewhere in the
/// token (the regex crate has no lookahead).
#[derive(Debug, Clone)]
pub struct Grammar {
    pattern: Regex,
    required: Option<Regex>,
}

impl Grammar {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Grammar {
            pattern: Regex::new(pattern)?,
            required: None,
        })
    }

    /// Also require a match of `required` anywhere in the token
    pub fn requiring(mut self, required: &str) -> Result<Self, regex::Error> {
        self.required = Some(Regex::new(required)?);
        Ok(self)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
            && self.required.as_ref().map_or(true, |r| r.is_match(text))
    }
}

/// Validation table for one labeled field kind
#[derive(Debug)]
pub struct FieldGrammar {
    /// Display name used in error messages
    pub name: &'static str,
    pub parameter: Grammar,
    pub label: &'static Grammar,
    /// Shown when a parameter fails its grammar
    pub constraints: &'static str,
    /// Maximum length of the trimmed input, in characters
    pub max_length: Option<usize>,
    pub label_always_compulsory: bool,
}

// ── Shared patterns ────────────────────────────────────────

/// `(` + letter or digit + letters, digits, spaces, `- ' . & /` + `)`
pub static LABEL: Lazy<Grammar> = Lazy::new(|| {
    Grammar::new(r"^\([\p{L}\p{N}][\p{L}\p{N} \-'.&/]*\)$").expect("label grammar")
});

pub const PHONE_PATTERN: &str = r"^(?:\+\d{2,} )?\d{3,}(?: x\d+)?$";

const EMAIL_PATTERN: &str = concat!(
    r"^[^\W_]+(?:[+_.\-][^\W_]+)*",
    "@",
    r"(?:[^\W_]+(?:-[^\W_]+)*\.)*(?:[^\W_]+(?:-[^\W_]+)*){2,}$",
);

pub const ALPHANUMERIC_PATTERN: &str = r"[\p{L}\d]";

// ── Constraint messages ────────────────────────────────────

pub const ADDRESS_CONSTRAINTS: &str = "For address, one or more addresses/labels are invalid!\n\n\
     Addresses are case-insensitive and can take any values, and it should not be blank.\n\n\
     Multiple addresses are allowed but must adhere to the following conditions: \n\
     1. For 1 address only, the label is optional so: ADDRESS or ADDRESS (LABEL).\n\
     2. For multiple addresses, the label is compulsory so: ADDRESS1 (LABEL1) ADDRESS2 (LABEL2) ... \
     ADDRESSN (LABELN).";

pub const PHONE_CONSTRAINTS: &str = "Phone numbers should only contain numbers, and it should be at least 3 digits long. \n\
     It should also satisfy these constraints: \n\
     1) Country codes are optional but if specified should start with a + then at least 2 digits, \
     followed by a space then the main number. \n\
     2) The main number should at least be 3 digits long with no spaces. \n\
     3) The extension is optional but if present, there should be a space then an x then at least one digit.";

pub const OTHER_PHONES_CONSTRAINTS: &str = "Phone numbers should only contain numbers, and it should be at \
     least 3 digits long and numbers should be separated by a tag e.g. 9999 (work) 8888 (office)";

pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
     1. The local-part should only contain alphanumeric characters and these special characters, excluding \
     the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
     2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
     separated by periods.\n\
     The domain name must:\n    - end with a domain label at least 2 characters long\n    \
     - have each domain label start and end with alphanumeric characters\n    \
     - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

pub const VENUE_CONSTRAINTS: &str = "Venue should only contain alphanumeric characters and spaces, and it should \
     not be blank and not contain weird symbols (!, $ etc.)";

// ── Field tables ───────────────────────────────────────────

pub static ADDRESS: Lazy<FieldGrammar> = Lazy::new(|| FieldGrammar {
    name: "address",
    parameter: Grammar::new(r"(?s)^\S.*$").expect("address grammar"),
    label: &LABEL,
    constraints: ADDRESS_CONSTRAINTS,
    max_length: Some(200),
    label_always_compulsory: false,
});

pub static OTHER_PHONES: Lazy<FieldGrammar> = Lazy::new(|| FieldGrammar {
    name: "other number",
    parameter: Grammar::new(PHONE_PATTERN).expect("phone grammar"),
    label: &LABEL,
    constraints: OTHER_PHONES_CONSTRAINTS,
    max_length: None,
    label_always_compulsory: false,
});

pub static EMAIL: Lazy<FieldGrammar> = Lazy::new(|| FieldGrammar {
    name: "email",
    parameter: Grammar::new(EMAIL_PATTERN).expect("email grammar"),
    label: &LABEL,
    constraints: EMAIL_CONSTRAINTS,
    max_length: Some(200),
    label_always_compulsory: false,
});

pub static VENUE: Lazy<FieldGrammar> = Lazy::new(|| FieldGrammar {
    name: "venue",
    parameter: Grammar::new(r"^[\p{L}\p{M}\d ,.'#&@:\-/]+$")
        .and_then(|g| g.requiring(ALPHANUMERIC_PATTERN))
        .expect("venue grammar"),
    label: &LABEL,
    constraints: VENUE_CONSTRAINTS,
    max_length: Some(95),
    label_always_compulsory: true,
});
