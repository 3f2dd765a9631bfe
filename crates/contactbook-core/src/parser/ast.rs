//! Parsed labeled values
//!
//! A validated labeled field keeps the text it was parsed from (its
//! canonical form) alongside the structured entries extracted from it.
//! Both are immutable after construction.

use serde::Serialize;

use super::tokenizer::{Token, TokenKind};

/// One parameter and its optional label, e.g. `Blk 11 AMK (Work)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    pub parameter: String,
    pub label: Option<String>,
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({})", self.parameter, label),
            None => write!(f, "{}", self.parameter),
        }
    }
}

/// Accepted text of a labeled field and the entries it contains
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LabeledValues {
    raw: String,
    entries: Vec<Entry>,
}

impl LabeledValues {
    /// Value for an optional field left blank
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pair up an already validated, alternating token stream
    pub(crate) fn from_tokens(raw: &str, tokens: &[Token<'_>]) -> Self {
        let entries = tokens
            .chunks(2)
            .map(|pair| {
                debug_assert_eq!(pair[0].kind, TokenKind::Parameter);
                Entry {
                    parameter: pair[0].text.to_string(),
                    label: pair
                        .get(1)
                        .and_then(|t| t.label_text())
                        .map(str::to_string),
                }
            })
            .collect();

        LabeledValues {
            raw: raw.to_string(),
            entries,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.parameter.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
