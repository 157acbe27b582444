// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("{0}")]
    Network(String),
    #[error("Invalid JSON in response: {0}")]
    Decode(String),
    /// The background channel could not carry the message.
    #[error("Background channel unavailable: {0}")]
    Transport(String),
    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type GridResult<T> = Result<T, GridError>;
