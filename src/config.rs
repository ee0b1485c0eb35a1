use {
    crate::domain::authentication::Authentication,
    std::env,
    thiserror::Error,
};

pub const WEBSITE_KEY_VAR: &str = "BUCKAROO_WEBSITE_KEY";
pub const SECRET_KEY_VAR: &str = "BUCKAROO_SECRET_KEY";
pub const TEST_MODE_VAR: &str = "BUCKAROO_TEST_MODE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Gateway environment the transactions are sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endpoint {
    #[default]
    Test,
    Live,
}

impl Endpoint {
    pub fn host(&self) -> &'static str {
        match self {
            Self::Test => "testcheckout.buckaroo.nl",
            Self::Live => "checkout.buckaroo.nl",
        }
    }

    /// Absolute URL of an API path such as `json/TransactionRequest`.
    pub fn url(&self, path: &str) -> String {
        format!("https://{}/{}", self.host(), path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub authentication: Authentication,
    pub endpoint: Endpoint,
}

impl GatewayConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Test mode is on unless explicitly disabled.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let website_key = required(WEBSITE_KEY_VAR)?;
        let secret_key = required(SECRET_KEY_VAR)?;

        let endpoint = match lookup(TEST_MODE_VAR).as_deref().map(str::trim) {
            None | Some("") => Endpoint::Test,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Endpoint::Test,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Endpoint::Live,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: TEST_MODE_VAR,
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            authentication: Authentication::new(website_key, secret_key),
            endpoint,
        })
    }
}
