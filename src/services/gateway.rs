use {
    super::transaction_request::{API_PATH, TransactionRequest},
    crate::{
        config::GatewayConfig,
        domain::{service::Service, transport::Transport},
    },
    std::sync::Arc,
};

/// Entry point: holds credentials, target environment and transport, and
/// hands out transaction requests bound to them.
#[derive(Clone)]
pub struct Gateway {
    config: GatewayConfig,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    pub fn new(config: GatewayConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn transaction_request(&self, service: impl Service + 'static) -> TransactionRequest {
        TransactionRequest::new(
            self.config.authentication.clone(),
            service,
            self.config.endpoint.url(API_PATH),
            Arc::clone(&self.transport),
        )
    }
}
