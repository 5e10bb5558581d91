//! Kairos Trade Calendar
//!
//! Partitions a trading window into N equal steps and owns the step cursor
//! that a strategy advances once per `generate_order_list` call.
//!
//! ```text
//! start                                                         end
//!   |----- step 1 -----|----- step 2 -----| ... |----- step N -----|
//!   b0                 b1                 b2    b(N-1)             bN
//! ```
//!
//! Steps are numbered 1..=N; `step_bounds(i)` maps a step to its
//! `(b(i-1), b(i))` boundary pair.

mod calendar;
mod error;

pub use calendar::TradeCalendar;
pub use error::{CalendarError, CalendarResult};
