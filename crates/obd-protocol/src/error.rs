//! Protocol-level error types.

use thiserror::Error;

/// Errors produced while building or parsing a diagnostic trouble code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DtcError {
    #[error("invalid DTC length: expected 5 characters, got {0}")]
    InvalidLength(usize),

    #[error("bad DTC type specifier '{0}' (expected P, B, C or U)")]
    InvalidType(char),

    #[error("bad DTC category specifier '{0}' (expected 0 or 1)")]
    InvalidCategory(char),

    #[error("invalid DTC system specifier '{0}' (expected 1-8)")]
    InvalidSystem(char),

    #[error("invalid DTC fault index \"{0}\"")]
    InvalidFault(String),

    #[error("DTC fault index {0} out of range (0-99)")]
    FaultOutOfRange(u8),
}

/// Convenience alias for DTC results.
pub type DtcResult<T> = Result<T, DtcError>;

/// Errors from the length-checked Mode 01 dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("PID decode error: unknown PID 0x{pid:02X}")]
    UnknownPid { pid: u8 },

    #[error("PID 0x{pid:02X}: need {need} bytes, got {got}")]
    TooShort { pid: u8, need: usize, got: usize },
}
