//! Client side of the generation flow: the HTTP API client, the form
//! session state machine, local key storage and the iframe renderer.

pub mod api;
pub mod render;
pub mod session;
pub mod storage;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Message reported by the server, shown to the user verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
