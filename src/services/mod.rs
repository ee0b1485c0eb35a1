pub mod gateway;
pub mod transaction_request;
