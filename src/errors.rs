use std::fmt;

/// One of the independent lookup providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    /// Offline libphonenumber parsing.
    Parser,
    /// numverify validation API.
    Numverify,
    /// numlookup validation API.
    Numlookup,
}

impl LookupSource {
    pub fn name(&self) -> &'static str {
        match self {
            LookupSource::Parser => "local parser",
            LookupSource::Numverify => "numverify",
            LookupSource::Numlookup => "numlookup",
        }
    }
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-source lookup failure.
///
/// Every source call resolves to either a partial result or one of these
/// variants; faults are recovered at the source boundary and collected by the
/// aggregator, never propagated to the webhook caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Local validation failed (unparseable or not an assignable number).
    Parse(String),
    /// Transport/deserialization fault or missing credential.
    Service {
        source: LookupSource,
        message: String,
    },
    /// Remote service explicitly rejected the number or its quota.
    QuotaOrInvalid(LookupSource),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Parse(msg) => write!(f, "Parse error: {}", msg),
            LookupError::Service { source, message } => {
                write!(f, "{} error: {}", source, message)
            }
            LookupError::QuotaOrInvalid(source) => {
                write!(f, "{} rejected the number (invalid or quota exhausted)", source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_their_source() {
        let err = LookupError::Service {
            source: LookupSource::Numverify,
            message: "key missing".to_string(),
        };
        assert_eq!(err.to_string(), "numverify error: key missing");

        let err = LookupError::QuotaOrInvalid(LookupSource::Numlookup);
        assert!(err.to_string().starts_with("numlookup rejected"));

        let err = LookupError::Parse("too short".to_string());
        assert_eq!(err.to_string(), "Parse error: too short");
    }
}
