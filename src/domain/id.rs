use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::RequestError;

/// Gateway transaction key: 32 hexadecimal characters, stored uppercase.
/// Follow-up transactions (refunds, recurring charges) reference the
/// original transaction by it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionKey(String);

impl TransactionKey {
    pub const LEN: usize = 32;

    pub fn new(key: impl Into<String>) -> Result<Self, RequestError> {
        let key = key.into();
        if key.len() != Self::LEN || !key.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RequestError::Validation(format!(
                "TransactionKey must be {} hex characters, got: {key}",
                Self::LEN
            )));
        }
        Ok(Self(key.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
