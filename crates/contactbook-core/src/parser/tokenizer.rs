//! Parameter/label tokenizer — splits a field value into an alternating token stream
//!
//! Input such as `123 Main St (Home) 1 Infinite Loop (Work)` becomes
//! `Parameter, Label, Parameter, Label`. The first token is always a
//! parameter and kinds strictly alternate afterwards.
//!
//! Spacing around each label is checked at the boundary where the bracket
//! is found, so the first offending position (scanning left to right) is
//! the one reported.
//!
//! Guarantees:
//! - Deterministic: same input always produces same token stream
//! - Exactly one ASCII space separates a parameter from its `(label)` and a
//!   `(label)` from the next parameter in every accepted stream

use crate::error::{Result, ValidationError};

/// Role of a token within a labeled field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Parameter,
    Label,
}

impl TokenKind {
    fn flip(self) -> Self {
        match self {
            TokenKind::Parameter => TokenKind::Label,
            TokenKind::Label => TokenKind::Parameter,
        }
    }
}

/// Byte range of a token in the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Token borrowed from the scanned text
///
/// Label tokens keep their brackets, e.g. `(Home)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Label text without its brackets, `None` for parameters
    pub fn label_text(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Parameter => None,
            TokenKind::Label => {
                let inner = self.text.strip_prefix('(').unwrap_or(self.text);
                Some(inner.strip_suffix(')').unwrap_or(inner))
            }
        }
    }
}

/// Forward scanner over the token boundaries of a trimmed field value
///
/// Yields `Err` at most once; the stream ends after the first error.
pub struct Scanner<'a> {
    field: &'static str,
    text: &'a str,
    position: usize,
    expecting: TokenKind,
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner; `field` names the field in error messages
    pub fn new(field: &'static str, text: &'a str) -> Self {
        Scanner {
            field,
            text,
            position: 0,
            expecting: TokenKind::Parameter,
            failed: false,
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    fn find_from(&self, needle: char) -> Option<usize> {
        self.text[self.position..]
            .find(needle)
            .map(|offset| self.position + offset)
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token<'a> {
        Token {
            kind,
            text: &self.text[start..end],
            span: Span { start, end },
        }
    }

    // ── Parameters ─────────────────────────────────────────

    fn next_parameter(&mut self) -> Result<Token<'a>> {
        let start = self.position;

        match self.find_from('(') {
            None => {
                self.position = self.text.len();
                Ok(self.token(TokenKind::Parameter, start, self.text.len()))
            }
            Some(open) => {
                self.check_spacing_before_label(start, open)?;
                // the separating space belongs to neither token
                self.position = open;
                Ok(self.token(TokenKind::Parameter, start, open - 1))
            }
        }
    }

    fn check_spacing_before_label(&self, start: usize, open: usize) -> Result<()> {
        let field = self.field;
        let bytes = self.text.as_bytes();

        if open < 2 || open == start {
            return Err(ValidationError::MissingParameterBeforeLabel { field });
        }
        if bytes[open - 1] != b' ' {
            return Err(ValidationError::MissingSpaceBeforeLabel { field });
        }
        if bytes[open - 2] == b' ' {
            return Err(ValidationError::ExtraSpaceBeforeLabel { field });
        }
        // a lone space between the previous label and this bracket
        if open - 1 == start {
            return Err(ValidationError::MissingParameterBeforeLabel { field });
        }
        Ok(())
    }

    // ── Labels ─────────────────────────────────────────────

    fn next_label(&mut self) -> Result<Token<'a>> {
        let start = self.position;
        let len = self.text.len();

        match self.find_from(')') {
            None => {
                self.position = len;
                Ok(self.token(TokenKind::Label, start, len))
            }
            Some(close) => {
                self.check_spacing_after_label(close)?;
                self.position = (close + 2).min(len);
                Ok(self.token(TokenKind::Label, start, close + 1))
            }
        }
    }

    fn check_spacing_after_label(&self, close: usize) -> Result<()> {
        let field = self.field;
        let bytes = self.text.as_bytes();
        let len = bytes.len();

        if close == len - 1 {
            return Ok(());
        }
        if close + 2 >= len || bytes[close + 1] != b' ' {
            return Err(ValidationError::MissingSpaceAfterLabel { field });
        }
        if bytes[close + 2] == b' ' {
            return Err(ValidationError::ExtraSpaceAfterLabel { field });
        }
        Ok(())
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_at_end() {
            return None;
        }

        let result = match self.expecting {
            TokenKind::Parameter => self.next_parameter(),
            TokenKind::Label => self.next_label(),
        };

        match result {
            Ok(_) => self.expecting = self.expecting.flip(),
            Err(_) => self.failed = true,
        }
        Some(result)
    }
}

/// Scan `text` into its full token list, stopping at the first spacing error
pub fn scan<'a>(field: &'static str, text: &'a str) -> Result<Vec<Token<'a>>> {
    Scanner::new(field, text).collect()
}
