//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `LtcError` as one
//! variant via `From`.

use thiserror::Error;

/// The error type for `ltc-core`.
#[derive(Debug, Error)]
pub enum LtcError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ltc-core`.
pub type LtcResult<T> = Result<T, LtcError>;
