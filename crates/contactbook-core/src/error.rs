//! Error types for field validation
//!
//! All fallible operations return `Result<T, ValidationError>`.
//! Messages are parameterized by the field's display name so they can be
//! shown to the end user verbatim.

/// Every reason a raw field value can be rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No tokens could be extracted from input that must not be blank
    #[error("{field} cannot be empty or be made up of only spaces!")]
    EmptyInput { field: &'static str },

    // ── Spacing before a label ─────────────────────────────
    #[error("One or more of your {field} entries are missing. Each label should follow a {field}.")]
    MissingParameterBeforeLabel { field: &'static str },

    #[error("One or more of your {field} entries are missing a space to separate it from the next label.")]
    MissingSpaceBeforeLabel { field: &'static str },

    #[error("One or more of your {field} entries have extra spaces in between it and the next label.")]
    ExtraSpaceBeforeLabel { field: &'static str },

    // ── Spacing after a label ──────────────────────────────
    #[error("One or more of your labels are missing a space to separate it from the next {field}.")]
    MissingSpaceAfterLabel { field: &'static str },

    #[error("One or more of your labels have extra spaces in between it and the next {field}.")]
    ExtraSpaceAfterLabel { field: &'static str },

    /// Token count violates the field's label cardinality rule
    #[error("Every {field} must be accompanied by a label. For example {field}1 (label1) {field}2 (label2).")]
    UnpairedParameter { field: &'static str },

    #[error("One or more of the {field} entries you entered contains duplicates!")]
    DuplicateParameter { field: &'static str },

    #[error("One or more of the labels you entered for {field} contains duplicates!")]
    DuplicateLabel { field: &'static str },

    /// `reason` is the field's own constraint message
    #[error("{reason}")]
    InvalidParameterGrammar {
        field: &'static str,
        reason: &'static str,
    },

    #[error("One or more of the labels you entered for {field} are invalid. Labels must be wrapped in brackets, \
             start with a letter or digit and only contain letters, digits, spaces and - ' . & /")]
    InvalidLabelGrammar { field: &'static str },

    /// Checked on the trimmed input before tokenizing
    #[error("Input for {field} has exceeded the maximum length of {max} characters!")]
    ExceedsMaximumLength { field: &'static str, max: usize },

    #[error("The {field} entries should not be a duplicate of the main number.")]
    DuplicatesMainPhone { field: &'static str },

    // ── Date/time ──────────────────────────────────────────
    #[error("Invalid datetime format. Accepted formats: dd/MM/yyyy HH[:]mm, yyyy-MM-dd HH[:]mm")]
    UnrecognizedDateTimeFormat,

    #[error("Invalid datetime value (e.g. 31 April or 29 Feb in non-leap year)")]
    ImpossibleCalendarDate,

    #[error("Invalid datetime value. Year value must at least be 1")]
    YearBelowMinimum,
}

impl ValidationError {
    /// Display name of the field that was being validated, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::EmptyInput { field }
            | ValidationError::MissingParameterBeforeLabel { field }
            | ValidationError::MissingSpaceBeforeLabel { field }
            | ValidationError::ExtraSpaceBeforeLabel { field }
            | ValidationError::MissingSpaceAfterLabel { field }
            | ValidationError::ExtraSpaceAfterLabel { field }
            | ValidationError::UnpairedParameter { field }
            | ValidationError::DuplicateParameter { field }
            | ValidationError::DuplicateLabel { field }
            | ValidationError::InvalidParameterGrammar { field, .. }
            | ValidationError::InvalidLabelGrammar { field }
            | ValidationError::ExceedsMaximumLength { field, .. }
            | ValidationError::DuplicatesMainPhone { field } => Some(*field),
            ValidationError::UnrecognizedDateTimeFormat
            | ValidationError::ImpossibleCalendarDate
            | ValidationError::YearBelowMinimum => None,
        }
    }
}

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
