use async_trait::async_trait;
use kairos_core::Timestamp;

use crate::error::{SignalError, SignalResult};
use crate::trend::Trend;

/// Port for trend prediction
///
/// Implementations classify the expected near-term direction of an
/// instrument given a historical window. `predict` may perform I/O (data
/// retrieval) and is the single suspension point of an SBB odd step.
///
/// Contract: the result depends only on the arguments, never on how many
/// times or in what order the predictor has been called.
#[async_trait]
pub trait TrendPredictor: Send + Sync {
    /// Classify the trend for `instrument_id` over `[window_start, window_end]`.
    ///
    /// A window with no usable data is not an error: implementations
    /// return `Trend::Mid` and may log the degraded confidence.
    async fn predict(
        &self,
        instrument_id: &str,
        window_start: Timestamp,
        window_end: Timestamp,
    ) -> SignalResult<Trend>;

    /// Get the predictor's name/identifier for debugging
    fn name(&self) -> &str {
        "TrendPredictor"
    }
}

/// The unimplemented prediction hook.
///
/// Wired in by default when a trend-adaptive strategy is constructed
/// without a concrete predictor; every call fails with
/// `SignalError::Unavailable` so the misconfiguration surfaces on the
/// first odd step instead of silently trading flat.
pub struct NullPredictor;

#[async_trait]
impl TrendPredictor for NullPredictor {
    async fn predict(
        &self,
        instrument_id: &str,
        _window_start: Timestamp,
        _window_end: Timestamp,
    ) -> SignalResult<Trend> {
        Err(SignalError::Unavailable(format!(
            "no predictor implementation configured (asked about {instrument_id})"
        )))
    }

    fn name(&self) -> &str {
        "NullPredictor"
    }
}
