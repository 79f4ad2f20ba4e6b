use std::error::Error as StdError;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagnetError {
    #[error("missing Magnet API key. Set MAGNET_API_KEY")]
    MissingApiKey,

    #[error(
        "invalid MAGNET_API_KEY: must be a valid UUID (e.g. xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx)"
    )]
    InvalidApiKey,

    /// Non-2xx response. `message` is already decorated for the status code.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// Transport failure (DNS, refused connection, TLS). No status code.
    #[error("{}", transport_message(.0))]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Response parse error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MagnetError {
    /// HTTP status of an API error; `None` for local and transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            MagnetError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed error body of an API error, if the server sent JSON.
    pub fn body(&self) -> Option<&Value> {
        match self {
            MagnetError::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MagnetError>;

/// reqwest's message followed by the innermost cause, on one line.
fn transport_message(err: &reqwest::Error) -> String {
    let outer = err.to_string();
    let mut root: Option<&(dyn StdError + 'static)> = None;
    let mut source = err.source();
    while let Some(cause) = source {
        root = Some(cause);
        source = cause.source();
    }

    match root.map(ToString::to_string) {
        Some(cause) if !outer.contains(&cause) => format!("{outer}: {cause}"),
        _ => outer,
    }
}
