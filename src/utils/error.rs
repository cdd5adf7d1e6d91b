use std::error::Error;
use std::fmt;
use std::io;

use crate::decode::bitstream::BitstreamError;
use crate::decode::cabac::CabacError;

/// Main error type for the entropy-decoding library.
#[derive(Debug)]
pub enum EntropyError {
    /// An I/O error occurred
    Io(io::Error),
    /// The compressed buffer ran out mid-decode
    BufferExhausted(String),
    /// Per-slice initialization parameters were out of domain
    InvalidUnitParameters(String),
    /// An entropy-decoding error occurred
    DecodingError(String),
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::Io(err) => write!(f, "I/O error: {}", err),
            EntropyError::BufferExhausted(msg) => write!(f, "Buffer exhausted: {}", msg),
            EntropyError::InvalidUnitParameters(msg) => {
                write!(f, "Invalid unit parameters: {}", msg)
            }
            EntropyError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl Error for EntropyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EntropyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for EntropyError {
    fn from(err: io::Error) -> Self {
        EntropyError::Io(err)
    }
}

impl From<BitstreamError> for EntropyError {
    fn from(err: BitstreamError) -> Self {
        EntropyError::BufferExhausted(err.to_string())
    }
}

impl From<CabacError> for EntropyError {
    fn from(err: CabacError) -> Self {
        match err {
            CabacError::InvalidUnitParameters(msg) => EntropyError::InvalidUnitParameters(msg),
            other => EntropyError::DecodingError(other.to_string()),
        }
    }
}

/// A specialized `Result` type for entropy-decoding operations.
pub type Result<T> = std::result::Result<T, EntropyError>;
