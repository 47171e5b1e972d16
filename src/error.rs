//! Error types for wavsplit

use crate::format::FormatTag;
use thiserror::Error;

/// Result type alias for wavsplit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavsplit
///
/// Every failure is detected synchronously while parsing or validating the
/// input and is terminal for the whole conversion; there is no
/// partial-success mode.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally broken RIFF/WAVE input
    #[error("Malformed WAV container: {0}")]
    MalformedContainer(String),

    /// Audio encoding other than integer PCM
    #[error("Unsupported WAV encoding: {0:?}")]
    UnsupportedEncoding(FormatTag),

    /// Bit depth outside the supported set
    #[error("Unsupported bits per sample: {0}")]
    UnsupportedBitDepth(u16),
}

impl Error {
    /// Create a malformed-container error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedContainer(msg.into())
    }
}
