/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use phone_lookup_bot::models::LookupResult;
use phone_lookup_bot::{parser, twiml};
use proptest::prelude::*;

// Property: the parser should never panic, whatever comes in over the wire
proptest! {
    #[test]
    fn parser_never_panics(input in "\\PC*") {
        let _ = parser::lookup(&input);
    }

    #[test]
    fn accepted_numbers_always_have_five_fields(
        cc in 1u16..=998u16,
        national in 100_000_000u64..=999_999_999u64
    ) {
        let raw = format!("+{}{}", cc, national);
        if let Ok(result) = parser::lookup(&raw) {
            prop_assert_eq!(result.len(), 5);
            prop_assert_eq!(result.get(parser::LABEL_VALID), Some("Yes"));
            let e164 = result.get(parser::LABEL_E164).unwrap();
            prop_assert!(e164.starts_with('+'));
            prop_assert!(e164[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }
}

// Property: last write wins never changes length or label order
proptest! {
    #[test]
    fn reinserting_labels_keeps_length_and_order(
        labels in proptest::collection::vec("[a-z]{1,8}", 1..10),
        overwrite in "[a-z0-9]{1,8}"
    ) {
        let mut result = LookupResult::new();
        for label in &labels {
            result.insert(label.clone(), "first");
        }
        let len_before = result.len();
        let order_before: Vec<String> =
            result.labels().iter().map(|l| l.to_string()).collect();

        for label in &labels {
            result.insert(label.clone(), overwrite.clone());
        }

        prop_assert_eq!(result.len(), len_before);
        let order_after: Vec<String> =
            result.labels().iter().map(|l| l.to_string()).collect();
        prop_assert_eq!(order_before, order_after);
        for label in &labels {
            prop_assert_eq!(result.get(label), Some(overwrite.as_str()));
        }
    }
}

// Property: TwiML bodies never leak raw markup
proptest! {
    #[test]
    fn twiml_body_contains_no_raw_markup(body in "\\PC*") {
        let xml = twiml::message_response(&body);
        let start = xml.find("<Body>").unwrap() + "<Body>".len();
        let end = xml.rfind("</Body>").unwrap();
        let inner = &xml[start..end];
        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
    }
}
