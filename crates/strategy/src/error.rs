//! Strategy errors

use kairos_calendar::CalendarError;
use kairos_core::Side;
use kairos_signal::SignalError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Duplicate parent order for {instrument_id} {side:?}")]
    DuplicateKey { instrument_id: String, side: Side },

    #[error("Invalid parent order: {0}")]
    InvalidOrder(String),

    #[error("No strategy state for {instrument_id} {side:?}")]
    UnknownKey { instrument_id: String, side: Side },

    #[error("Strategy has not been reset with a trading window")]
    NotReady,

    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

pub type StrategyResult<T> = std::result::Result<T, StrategyError>;
