//! Error types.
//!
//! None of these reach the selection path: the renderer absorbs source
//! errors and the tier computation has no failure mode. They are returned
//! from configuration checks and by [`PageSource`](crate::PageSource)
//! implementations.

use thiserror::Error;

/// Invalid indicator configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The windowing arithmetic reserves three tapered slots and needs at
    /// least this many dots.
    #[error("max_visible must be at least {min}, got {max_visible}")]
    MaxVisibleTooSmall { max_visible: usize, min: usize },

    #[error("{name} must be a finite, non-negative length, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Failure reported by a page source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source was torn down before we unsubscribed.
    #[error("page source is already detached")]
    Detached,

    #[error("page source rejected the request: {0}")]
    Rejected(String),
}
