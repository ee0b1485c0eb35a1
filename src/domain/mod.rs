pub mod authentication;
pub mod error;
pub mod id;
pub mod money;
pub mod parameter;
pub mod result;
pub mod service;
pub mod transport;
