use thiserror::Error;

/// Domain-level errors for trend prediction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// No concrete predictor is wired in. This signals a misconfigured
    /// strategy, not a runtime condition to recover from.
    #[error("Trend predictor unavailable: {0}")]
    Unavailable(String),
}

pub type SignalResult<T> = std::result::Result<T, SignalError>;
