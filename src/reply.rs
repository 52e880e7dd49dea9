//! Plain-text reply rendering.

use crate::models::AggregateOutcome;

/// Sent whenever the incoming text does not look like a phone number.
pub const HELP_TEXT: &str =
    "👋 Send a phone number starting with `+` (e.g. +254712345678) to get details.";

/// Header of a successful lookup reply.
pub const HEADER: &str = "📋 Phone Info:";

/// Render an aggregate outcome as the reply body. No markup, plain text only.
pub fn render(outcome: &AggregateOutcome) -> String {
    match outcome {
        AggregateOutcome::Failure(message) => format!("❌ Error: {}", message),
        AggregateOutcome::Success(result) => {
            let mut text = String::from(HEADER);
            for (label, value) in result.iter() {
                text.push('\n');
                text.push_str(label);
                text.push_str(": ");
                text.push_str(value);
            }
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LookupResult;

    #[test]
    fn success_lists_fields_in_insertion_order() {
        let mut result = LookupResult::new();
        result.insert("✅ Valid", "Yes");
        result.insert("🗺 Region", "KE");

        let text = render(&AggregateOutcome::Success(result));
        assert_eq!(text, "📋 Phone Info:\n✅ Valid: Yes\n🗺 Region: KE");
    }

    #[test]
    fn failure_is_a_single_error_line() {
        let outcome = AggregateOutcome::Failure("numverify error: key missing".to_string());
        assert_eq!(render(&outcome), "❌ Error: numverify error: key missing");
    }
}
