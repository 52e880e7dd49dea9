//! Minimal TwiML messaging envelope.
//!
//! Twilio expects webhook replies as a `<Response><Message><Body>` document.
//! Only the text body varies, so a small writer with XML escaping covers the
//! whole surface this service needs.

/// Media type Twilio expects for TwiML replies.
pub const CONTENT_TYPE: &str = "application/xml";

/// Wrap `body` in a single-message TwiML response document.
pub fn message_response(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message><Body>{}</Body></Message></Response>",
        escape(body)
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_body_in_message_envelope() {
        let xml = message_response("hello");
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <Response><Message><Body>hello</Body></Message></Response>"
        );
    }

    #[test]
    fn escapes_markup_in_body() {
        let xml = message_response("a < b & c > \"d\"");
        assert!(xml.contains("a &lt; b &amp; c &gt; &quot;d&quot;"));
        assert!(!xml.contains("a < b"));
    }

    #[test]
    fn multiline_bodies_stay_intact() {
        let xml = message_response("line one\nline two");
        assert!(xml.contains("<Body>line one\nline two</Body>"));
    }
}
