use thiserror::Error;

/// Failure to parse a style value from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("invalid rgb() color: {0}")]
    InvalidRgb(String),
    #[error("unknown color name: {0}")]
    UnknownColor(String),
    #[error("invalid length: {0}")]
    InvalidLength(String),
}
