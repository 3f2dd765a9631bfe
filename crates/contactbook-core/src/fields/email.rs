use serde::{Deserialize, Serialize};

use super::text_field;
use crate::error::Result;
use crate::grammar;
use crate::parser::ast::{Entry, LabeledValues};
use crate::parser::parse_labeled;

/// One or more labeled email addresses, e.g. `alice@example.com (Work)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(LabeledValues);

impl Email {
    pub fn parse(raw: &str) -> Result<Self> {
        parse_labeled(&grammar::EMAIL, raw).map(Email)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn entries(&self) -> &[Entry] {
        self.0.entries()
    }
}

text_field!(Email);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_single_and_multiple_emails() {
        assert!(Email::parse("alice@example.com").is_ok());
        let email = Email::parse("alice@example.com (Work) alice@home.org (Personal)").unwrap();
        assert_eq!(email.entries().len(), 2);
        assert_eq!(email.entries()[1].label.as_deref(), Some("Personal"));
    }

    #[test]
    fn test_duplicate_email_differs_in_case() {
        assert_eq!(
            Email::parse("alice@example.com (Work) ALICE@example.com (Home)"),
            Err(ValidationError::DuplicateParameter { field: "email" })
        );
    }

    #[test]
    fn test_invalid_email() {
        let err = Email::parse("alice@example.c (Work)").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidParameterGrammar { field: "email", .. }
        ));
        assert!(err.to_string().starts_with("Emails should be of the format"));
    }

    #[test]
    fn test_maximum_length() {
        let local = "a".repeat(188);
        assert!(Email::parse(&format!("{}@example.com", local)).is_ok());
        assert_eq!(
            Email::parse(&format!("{}a@example.com", local)),
            Err(ValidationError::ExceedsMaximumLength { field: "email", max: 200 })
        );
    }
}
