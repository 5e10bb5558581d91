//! Per-key working state
//!
//! Created at `reset`, lives for one full pass over the calendar, and is
//! exclusively owned by the strategy instance. Never shared between
//! strategy instances (see the isolation test in `sbb.rs`).

use kairos_core::Quantity;
use kairos_signal::Trend;
use rust_decimal::Decimal;

/// Per-step base quantity for a parent order spanning `steps` steps.
///
/// Floor division truncates the remainder; it is never redistributed.
pub(crate) fn base_amount(total: Quantity, steps: usize) -> Quantity {
    (total / Decimal::from(steps as u64)).floor()
}

/// Working state for one (instrument, side) key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceState {
    /// Per-step base quantity: `floor(total_amount / step_count)`.
    ///
    /// The truncation remainder is never redistributed; the under-execution
    /// (< one base quantum per step) is a documented rounding loss that the
    /// caller's reconciliation accounts for.
    pub base_amount: Quantity,
    /// Trend decided on the most recent odd step; `Mid` until then.
    /// Even steps read this but never write it.
    pub trend: Trend,
}

impl SliceState {
    pub fn new(base_amount: Quantity) -> Self {
        Self {
            base_amount,
            trend: Trend::default(),
        }
    }
}
