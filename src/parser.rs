//! Offline lookup source backed by the `phonenumber` crate.

use crate::errors::LookupError;
use crate::models::LookupResult;
use phonenumber::Mode;

/// Labels emitted by the local parser, in emission order.
pub const LABEL_VALID: &str = "✅ Valid";
pub const LABEL_FORMATTED: &str = "📞 Formatted";
pub const LABEL_REGION: &str = "🗺 Region";
pub const LABEL_CARRIER: &str = "📡 Carrier";
pub const LABEL_E164: &str = "🔢 E.164";

/// Parse `raw` as an international phone number and report its metadata.
///
/// Any parse failure is converted into `LookupError::Parse`; nothing is
/// propagated as a raw fault. A number that parses but is not valid and
/// assignable is a parse error too.
///
/// The Rust libphonenumber port ships no timezone or geocoder tables, so the
/// region field carries the country identifier and the last field the E.164
/// canonical form.
pub fn lookup(raw: &str) -> Result<LookupResult, LookupError> {
    let number = phonenumber::parse(None, raw)
        .map_err(|e| LookupError::Parse(format!("{:?}", e)))?;

    if !phonenumber::is_valid(&number) {
        return Err(LookupError::Parse(
            "not a valid, assignable phone number".to_string(),
        ));
    }

    let region = number
        .country()
        .id()
        .map(|id| format!("{:?}", id))
        .unwrap_or_default();
    let carrier = number
        .carrier()
        .map(|c| c.to_string())
        .unwrap_or_default();

    let mut result = LookupResult::new();
    result.insert(LABEL_VALID, "Yes");
    result.insert(
        LABEL_FORMATTED,
        number.format().mode(Mode::International).to_string(),
    );
    result.insert(LABEL_REGION, region);
    result.insert(LABEL_CARRIER, carrier);
    result.insert(LABEL_E164, number.format().mode(Mode::E164).to_string());

    Ok(result)
}
