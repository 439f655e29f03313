use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed host message: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unexpected host message: {0}")]
    UnexpectedMessage(String),
    #[error("could not encode message for host: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
