//! Token verifier — checks uniqueness and grammar of every scanned token
//!
//! Walks the alternating token stream produced by the tokenizer and rejects
//! the first token (in scan order) that either repeats an earlier token of
//! the same kind, compared case-insensitively, or fails its grammar.
//!
//! For a single token the duplicate check runs before the grammar check, so
//! a well-formed repeat is reported as a duplicate.
//!
//! Case folding uses `str::to_lowercase`, which is locale-independent;
//! locale-specific folds such as Turkish dotless i are not applied.

use std::collections::HashSet;

use crate::error::{Result, ValidationError};
use crate::grammar::FieldGrammar;
use crate::parser::tokenizer::{Token, TokenKind};

/// Verify every token of a field value against `grammar`
///
/// # Errors
/// `DuplicateParameter`, `DuplicateLabel`, `InvalidParameterGrammar` or
/// `InvalidLabelGrammar` for the first offending token.
pub fn validate(grammar: &FieldGrammar, tokens: &[Token<'_>]) -> Result<()> {
    let field = grammar.name;
    let mut seen_parameters = HashSet::new();
    let mut seen_labels = HashSet::new();

    for token in tokens {
        let folded = token.text.to_lowercase();

        match token.kind {
            TokenKind::Parameter => {
                if seen_parameters.contains(&folded) {
                    return Err(ValidationError::DuplicateParameter { field });
                }
                if !grammar.parameter.is_match(token.text) {
                    return Err(ValidationError::InvalidParameterGrammar {
                        field,
                        reason: grammar.constraints,
                    });
                }
                seen_parameters.insert(folded);
            }
            TokenKind::Label => {
                if seen_labels.contains(&folded) {
                    return Err(ValidationError::DuplicateLabel { field });
                }
                if !grammar.label.is_match(token.text) {
                    return Err(ValidationError::InvalidLabelGrammar { field });
                }
                seen_labels.insert(folded);
            }
        }
    }

    Ok(())
}
