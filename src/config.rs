use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// numverify access key. Absent key disables the numverify source.
    pub numverify_api_key: Option<String>,
    pub numverify_base_url: String,
    /// numlookup API key. Absent key disables the numlookup source.
    pub numlookup_api_key: Option<String>,
    pub numlookup_base_url: String,
    /// Per-request timeout for external lookups, in seconds.
    pub lookup_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            numverify_api_key: std::env::var("NUMVERIFY_API_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            numverify_base_url: {
                let url = std::env::var("NUMVERIFY_BASE_URL")
                    .unwrap_or_else(|_| "http://apilayer.net".to_string());
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("NUMVERIFY_BASE_URL must start with http:// or https://");
                }
                url
            },
            numlookup_api_key: std::env::var("NUMLOOKUP_API_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            numlookup_base_url: {
                let url = std::env::var("NUMLOOKUP_BASE_URL")
                    .unwrap_or_else(|_| "https://api.numlookupapi.com".to_string());
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("NUMLOOKUP_BASE_URL must start with http:// or https://");
                }
                url
            },
            lookup_timeout_secs: std::env::var("LOOKUP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("LOOKUP_TIMEOUT_SECS must be a valid number"))?,
        };

        // Log successful configuration load (without sensitive values)
        if config.numverify_api_key.is_none() {
            tracing::warn!("NUMVERIFY_API_KEY not set; numverify lookups disabled");
        }
        if config.numlookup_api_key.is_none() {
            tracing::warn!("NUMLOOKUP_API_KEY not set; numlookup lookups disabled");
        }
        tracing::debug!("numverify base URL: {}", config.numverify_base_url);
        tracing::debug!("numlookup base URL: {}", config.numlookup_base_url);
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }
}
