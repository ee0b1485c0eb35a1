use std::{fmt, sync::Arc};

/// Merchant credentials. Opaque to the request builder; only the transport
/// reads them to sign the outgoing call.
#[derive(Clone)]
pub struct Authentication {
    website_key: Arc<str>,
    secret_key: Arc<str>,
}

impl Authentication {
    pub fn new(website_key: impl Into<Arc<str>>, secret_key: impl Into<Arc<str>>) -> Self {
        Self {
            website_key: website_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn website_key(&self) -> &str {
        &self.website_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("website_key", &self.website_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
