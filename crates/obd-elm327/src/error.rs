//! ELM327 transport and client error types.

use obd_protocol::DecodeError;
use thiserror::Error;

/// Errors that can occur while talking to an ELM327 adapter.
#[derive(Debug, Error)]
pub enum ElmError {
    #[error("adapter I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream ended before the '>' prompt")]
    MissingPrompt,

    #[error("invalid or unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("voltage must be between 0 and 99.99, got {0}")]
    InvalidVoltage(f64),

    #[error("cannot parse voltage from \"{response}\"")]
    ParseVoltage {
        response: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("adapter reported NO DATA")]
    NoData,

    #[error("malformed adapter response: {0}")]
    MalformedResponse(String),

    #[error("response timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Convenience alias for ELM327 results.
pub type ElmResult<T> = Result<T, ElmError>;
