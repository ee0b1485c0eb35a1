use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    #[error("no articles have been provided")]
    NoArticlesProvided,

    #[error("both AmountDebit and AmountCredit are set")]
    AmbiguousAmount,

    #[error("transaction request has already been submitted")]
    AlreadySubmitted,

    #[error("validation: {0}")]
    Validation(String),

    #[error("transport: {0}")]
    Transport(#[from] TransportError),
}

/// Failure reported by the submission collaborator. Passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
}
