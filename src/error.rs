//! Error types shared by every fallible statistic, constructor and quantile

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The sample holds fewer points than the statistic needs
    #[error("insufficient data: need at least {needed} value(s), got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A parameter or argument lies outside its mathematical domain
    #[error("domain error: {0}")]
    Domain(String),
}

impl StatsError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        StatsError::Domain(msg.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StatsError>;

/// Fails with [`StatsError::InsufficientData`] unless `got >= needed`.
pub(crate) fn require_len(got: usize, needed: usize) -> Result<()> {
    if got < needed {
        return Err(StatsError::InsufficientData { needed, got });
    }
    Ok(())
}
