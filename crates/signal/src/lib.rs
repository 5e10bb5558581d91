//! Kairos Signal
//!
//! Trend classification for trend-adaptive execution:
//! - The `Trend` label (`Mid` / `Short` / `Long`)
//! - The `TrendPredictor` port that strategies consume
//! - A reference `EmaTrendPredictor` that samples a precomputed
//!   directional signal and classifies by sign
//!
//! Predictors are pure with respect to the window they are given: no
//! internal step-counting state, so a strategy may ask about overlapping
//! windows in any order within a run.

mod ema;
mod error;
mod predictor;
mod trend;

pub use ema::{EmaTrendPredictor, SignalPoint};
pub use error::{SignalError, SignalResult};
pub use predictor::{NullPredictor, TrendPredictor};
pub use trend::Trend;
