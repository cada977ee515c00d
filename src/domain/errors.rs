use thiserror::Error;

/// Message shown for any failure that is not reported by the server itself.
pub const GENERIC_FETCH_MESSAGE: &str = "Error occurred while loading the order.";

/// Message used when the server fails without a usable `message` field.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter order_uid")]
    EmptyInput,
    #[error("Order UID must be exactly 20 symbols")]
    WrongLength { actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    ServerReported(String),
    /// The exchange never produced a response (connect, TLS, body read).
    #[error("Error occurred while loading the order.")]
    Unreachable(String),
    /// A success response whose body is not an order record.
    #[error("Error occurred while loading the order.")]
    Malformed(String),
}

impl FetchError {
    /// Underlying cause, for logs. Never shown to the user.
    pub fn detail(&self) -> &str {
        match self {
            FetchError::ServerReported(msg)
            | FetchError::Unreachable(msg)
            | FetchError::Malformed(msg) => msg,
        }
    }
}
