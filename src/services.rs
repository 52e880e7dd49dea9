//! External validation API clients.
//!
//! Each client performs exactly one GET per lookup, with a bounded timeout
//! and no retry. A missing key short-circuits the lookup before any network
//! call so an unconfigured source never delays the reply.

use crate::config::Config;
use crate::errors::{LookupError, LookupSource};
use crate::models::LookupResult;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Labels contributed by the numverify source, in emission order.
pub const LABEL_LOCATION: &str = "📍 Location";
pub const LABEL_COUNTRY: &str = "🌍 Country";
pub const LABEL_COUNTRY_CODE: &str = "🔡 Country code";
pub const LABEL_LINE_TYPE: &str = "📱 Line type";

/// Labels contributed by the numlookup source, in emission order.
pub const LABEL_NAME: &str = "👤 Name";
pub const LABEL_LOCAL_FORMAT: &str = "📞 Local format";

fn http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.lookup_timeout_secs))
        .build()
}

fn service_error(source: LookupSource, message: impl Into<String>) -> LookupError {
    LookupError::Service {
        source,
        message: message.into(),
    }
}

#[derive(Debug, Deserialize)]
struct NumverifyResponse {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default)]
    country_code: Option<String>,
    #[serde(default)]
    carrier: Option<String>,
    #[serde(default)]
    line_type: Option<String>,
}

/// Client for the numverify validation endpoint
/// (`GET {base}/api/validate?access_key=..&number=..&format=1`).
pub struct NumverifyClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NumverifyClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.numverify_base_url.clone(),
            api_key: config.numverify_api_key.clone(),
        })
    }

    pub async fn lookup(&self, number: &str) -> Result<LookupResult, LookupError> {
        const SOURCE: LookupSource = LookupSource::Numverify;

        let Some(ref key) = self.api_key else {
            return Err(service_error(SOURCE, "key missing"));
        };

        // Build URL with proper parameter encoding
        let url = reqwest::Url::parse_with_params(
            &format!("{}/api/validate", self.base_url),
            &[
                ("access_key", key.as_str()),
                ("number", number),
                ("format", "1"),
            ],
        )
        .map_err(|e| service_error(SOURCE, format!("failed to build URL: {}", e)))?;

        // Redact key from logs to prevent credential exposure
        tracing::debug!(
            "numverify lookup: {}/api/validate?access_key=[REDACTED]&number={}",
            self.base_url,
            number
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| service_error(SOURCE, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(service_error(
                SOURCE,
                format!("returned status {}", response.status()),
            ));
        }

        let body: NumverifyResponse = response
            .json()
            .await
            .map_err(|e| service_error(SOURCE, format!("failed to parse response: {}", e)))?;

        if !body.valid {
            return Err(LookupError::QuotaOrInvalid(SOURCE));
        }

        let mut result = LookupResult::new();
        if let Some(location) = body.location {
            result.insert(LABEL_LOCATION, location);
        }
        if let Some(country) = body.country_name {
            result.insert(LABEL_COUNTRY, country);
        }
        if let Some(code) = body.country_code {
            result.insert(LABEL_COUNTRY_CODE, code);
        }
        if let Some(carrier) = body.carrier {
            result.insert(crate::parser::LABEL_CARRIER, carrier);
        }
        if let Some(line_type) = body.line_type {
            result.insert(LABEL_LINE_TYPE, line_type);
        }
        Ok(result)
    }
}

#[derive(Debug, Deserialize)]
struct NumlookupResponse {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    local_format: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

/// Client for the numlookup validation endpoint
/// (`GET {base}/v1/validate/{number}?apikey=..`).
pub struct NumlookupClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NumlookupClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.numlookup_base_url.clone(),
            api_key: config.numlookup_api_key.clone(),
        })
    }

    pub async fn lookup(&self, number: &str) -> Result<LookupResult, LookupError> {
        const SOURCE: LookupSource = LookupSource::Numlookup;

        let Some(ref key) = self.api_key else {
            return Err(service_error(SOURCE, "key missing"));
        };

        // The number rides in the path; encode it as one segment so stray
        // `?`, `#`, or `/` in the incoming text cannot restructure the URL
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| service_error(SOURCE, format!("failed to build URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| service_error(SOURCE, "base URL cannot be a base"))?
            .pop_if_empty()
            .extend(["v1", "validate", number]);
        url.query_pairs_mut().append_pair("apikey", key);

        tracing::debug!(
            "numlookup lookup: {}/v1/validate/{}?apikey=[REDACTED]",
            self.base_url,
            number
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| service_error(SOURCE, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(service_error(
                SOURCE,
                format!("returned status {}", response.status()),
            ));
        }

        let body: NumlookupResponse = response
            .json()
            .await
            .map_err(|e| service_error(SOURCE, format!("failed to parse response: {}", e)))?;

        if !body.valid {
            return Err(LookupError::QuotaOrInvalid(SOURCE));
        }

        let mut result = LookupResult::new();
        if let Some(name) = body.name {
            result.insert(LABEL_NAME, name);
        }
        if let Some(local_format) = body.local_format {
            result.insert(LABEL_LOCAL_FORMAT, local_format);
        }
        if let Some(country) = body.country {
            result.insert(LABEL_COUNTRY, country);
        }
        Ok(result)
    }
}
