pub mod config;
pub mod domain;
pub mod pay;
pub mod services;

pub use {
    config::{Endpoint, GatewayConfig},
    domain::{
        authentication::Authentication,
        error::{RequestError, TransportError},
        parameter::ParameterRecord,
        result::{Action, TransactionResult},
        service::Service,
        transport::Transport,
    },
    services::{gateway::Gateway, transaction_request::TransactionRequest},
};
