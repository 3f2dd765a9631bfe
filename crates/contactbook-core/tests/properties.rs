//! Property-based tests for labeled field parsing
//!
//! These cover the rules that must hold for every input, not just the
//! hand-picked cases in the unit tests:
//! - a lone unlabeled value is a single parameter token
//! - venues always need a label
//! - re-parsing the canonical text is idempotent
//! - double spaces before a label and case-only duplicates are always rejected

use contactbook_core::grammar::VENUE;
use contactbook_core::parser::parse_labeled;
use contactbook_core::parser::tokenizer::{scan, TokenKind};
use contactbook_core::{Address, ValidationError};
use proptest::prelude::*;

/// Address-like parameter: no brackets, no leading/trailing space
fn parameter_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9]{1,20}",
        "[A-Za-z0-9][A-Za-z0-9 ,#-]{0,30}[A-Za-z0-9]",
    ]
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,10}"
}

/// Two to four pairs made distinct by an index suffix
fn labeled_pairs_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((parameter_strategy(), label_strategy()), 2..=4).prop_map(|pairs| {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (p, l))| format!("{} {} ({}{})", p, i, l, i))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

proptest! {
    #[test]
    fn lone_value_is_one_parameter_token(value in parameter_strategy()) {
        let tokens = scan("address", &value).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Parameter);
        prop_assert_eq!(tokens[0].text, value.as_str());

        let address = Address::parse(&value).unwrap();
        prop_assert_eq!(address.entries().len(), 1);
        prop_assert!(address.entries()[0].label.is_none());
    }

    #[test]
    fn venue_without_label_is_unpaired(value in "[A-Za-z0-9][A-Za-z0-9 ]{0,40}[A-Za-z0-9]") {
        prop_assert_eq!(
            parse_labeled(&VENUE, &value),
            Err(ValidationError::UnpairedParameter { field: "venue" })
        );
    }

    #[test]
    fn reparsing_canonical_text_is_idempotent(raw in labeled_pairs_strategy()) {
        let first = Address::parse(&raw).unwrap();
        let second = Address::parse(first.as_str()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_string(), raw);
    }

    #[test]
    fn double_space_before_label_always_rejected(
        prefix in prop::option::of((parameter_strategy(), label_strategy())),
        parameter in "[A-Za-z0-9]{1,20}",
        spaces in " {2,5}",
        label in label_strategy(),
        tail in prop::option::of(parameter_strategy()),
    ) {
        let mut raw = String::new();
        if let Some((p, l)) = prefix {
            raw.push_str(&format!("{} ({}) ", p, l));
        }
        raw.push_str(&format!("{}{}({})", parameter, spaces, label));
        if let Some(t) = tail {
            raw.push_str(&format!(" {}", t));
        }

        prop_assert_eq!(
            Address::parse(&raw),
            Err(ValidationError::ExtraSpaceBeforeLabel { field: "address" })
        );
    }

    #[test]
    fn case_only_duplicates_always_rejected(
        parameter in "[a-z][a-z0-9 ]{0,15}[a-z0-9]",
        first_label in label_strategy(),
        second_label in label_strategy(),
    ) {
        let raw = format!(
            "{} ({}1) {} ({}2)",
            parameter,
            first_label,
            parameter.to_uppercase(),
            second_label
        );
        prop_assert_eq!(
            Address::parse(&raw),
            Err(ValidationError::DuplicateParameter { field: "address" })
        );
    }
}
