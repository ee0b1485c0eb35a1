use {
    super::authentication::Authentication,
    super::error::TransportError,
    super::parameter::ParameterRecord,
    std::{future::Future, pin::Pin},
};

/// Submits a flattened transaction to the gateway and hands back the raw JSON
/// response. Signing, retries and timeouts are the implementor's concern.
pub trait Transport: Send + Sync {
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        parameters: &'a [ParameterRecord],
        authentication: &'a Authentication,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, TransportError>> + Send + 'a>>;
}
