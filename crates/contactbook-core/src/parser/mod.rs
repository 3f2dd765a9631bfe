//! Field parser — tokenizer, shape check, and the labeled-field pipeline
//!
//! Converts the raw text of a labeled field into [`LabeledValues`]:
//!
//! ```text
//! raw → trim → length cap → tokenizer (+ spacing) → shape → verifier → LabeledValues
//! ```
//!
//! Validation is total: a value is returned only when every length,
//! spacing, cardinality, duplicate and grammar rule holds at once.

pub mod ast;
pub mod datetime;
pub mod tokenizer;

use crate::error::{Result, ValidationError};
use crate::grammar::FieldGrammar;
use crate::verifier;

use ast::LabeledValues;
use tokenizer::Token;

/// Check the token count against the field's label cardinality rule
///
/// - empty → `EmptyInput`
/// - a lone parameter is accepted unless a label is always compulsory
/// - anything else must pair every parameter with a label (even length)
pub fn check_shape(
    field: &'static str,
    tokens: &[Token<'_>],
    label_always_compulsory: bool,
) -> Result<()> {
    if tokens.is_empty() {
        return Err(ValidationError::EmptyInput { field });
    }

    let lone_parameter = tokens.len() == 1 && !label_always_compulsory;
    if !lone_parameter && tokens.len() % 2 == 1 {
        return Err(ValidationError::UnpairedParameter { field });
    }

    Ok(())
}

/// Reject input whose trimmed length exceeds the field's cap
pub fn check_length(field: &'static str, text: &str, max_length: Option<usize>) -> Result<()> {
    match max_length {
        Some(max) if text.chars().count() > max => {
            Err(ValidationError::ExceedsMaximumLength { field, max })
        }
        _ => Ok(()),
    }
}

/// Parse and fully validate a labeled field value
///
/// # Errors
/// The first rule violated, in pipeline order: length, spacing (left to
/// right), shape, then duplicate/grammar per token in scan order.
///
/// # Example
/// ```ignore
/// let values = parse_labeled(&grammar::ADDRESS, "Blk 30 (Home) Blk 11 (Work)")?;
/// assert_eq!(values.entries().len(), 2);
/// ```
pub fn parse_labeled(grammar: &FieldGrammar, raw: &str) -> Result<LabeledValues> {
    let text = raw.trim();

    check_length(grammar.name, text, grammar.max_length)?;

    let tokens = tokenizer::scan(grammar.name, text)?;
    check_shape(grammar.name, &tokens, grammar.label_always_compulsory)?;
    verifier::validate(grammar, &tokens)?;

    tracing::debug!(
        field = grammar.name,
        tokens = tokens.len(),
        "extracted parameters and labels"
    );

    Ok(LabeledValues::from_tokens(text, &tokens))
}
