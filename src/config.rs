use crate::error::config::ConfigError;

const DEFAULT_BASE_URL: &str = "https://customer.jetnetconnect.com";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TREND_CACHE_TTL_SECS: u64 = 21_600;

#[derive(Clone, Debug)]
pub struct Config {
    pub jetnet_email: String,
    pub jetnet_password: String,
    pub jetnet_base_url: String,
    pub http_timeout_secs: u64,
    pub trend_cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jetnet_email: require_var("JETNET_EMAIL")?,
            jetnet_password: require_var("JETNET_PASSWORD")?,
            jetnet_base_url: std::env::var("JETNET_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            http_timeout_secs: parse_var("HABROK_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
            trend_cache_ttl_secs: parse_var(
                "HABROK_TREND_CACHE_TTL_SECS",
                DEFAULT_TREND_CACHE_TTL_SECS,
            )?,
        })
    }
}

fn require_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_var(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected an integer number of seconds, got {:?}", value),
        }),
        Err(_) => Ok(default),
    }
}
