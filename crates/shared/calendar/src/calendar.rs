use chrono::Duration;
use kairos_core::Timestamp;

use crate::error::{CalendarError, CalendarResult};

/// An ordered, finite sequence of step boundaries over a trading window.
///
/// Constructed from `(start, end, step_bar)` where `step_bar` is the fixed
/// duration of one step. The window must partition evenly into steps.
///
/// The cursor is monotonic: `advance()` moves to the next step and never
/// goes back. Steps are 1-based, so the first `advance()` yields step 1.
#[derive(Debug, Clone)]
pub struct TradeCalendar {
    /// N+1 strictly increasing boundary timestamps defining N steps
    boundaries: Vec<Timestamp>,
    /// Last step handed out by `advance` (0 = not started)
    cursor: usize,
}

impl TradeCalendar {
    /// Build a calendar partitioning `[start, end]` into steps of `step_bar`.
    ///
    /// Fails with `InvalidWindow` if `start >= end`, `step_bar` is
    /// non-positive, or the window does not divide evenly into steps.
    pub fn new(start: Timestamp, end: Timestamp, step_bar: Duration) -> CalendarResult<Self> {
        if start >= end {
            return Err(CalendarError::InvalidWindow(format!(
                "start {start} must precede end {end}"
            )));
        }
        if step_bar <= Duration::zero() {
            return Err(CalendarError::InvalidWindow(format!(
                "step duration must be positive, got {step_bar}"
            )));
        }

        let mut boundaries = vec![start];
        let mut t = start;
        while t < end {
            t += step_bar;
            if t > end {
                return Err(CalendarError::InvalidWindow(format!(
                    "window [{start}, {end}] is not an even multiple of step {step_bar}"
                )));
            }
            boundaries.push(t);
        }

        Ok(Self {
            boundaries,
            cursor: 0,
        })
    }

    /// Number of steps N in the window
    pub fn step_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Start of the trading window (first boundary)
    pub fn start(&self) -> Timestamp {
        self.boundaries[0]
    }

    /// End of the trading window (last boundary)
    pub fn end(&self) -> Timestamp {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// The step most recently handed out by `advance`, or `None` before the
    /// first call
    pub fn current_step(&self) -> Option<usize> {
        (self.cursor > 0).then_some(self.cursor)
    }

    /// The step the next `advance` will move to, without moving the cursor.
    ///
    /// Fails with `StepOutOfRange` once the calendar is exhausted; the
    /// caller must stop iterating at step N.
    pub fn next_step(&self) -> CalendarResult<usize> {
        if self.cursor >= self.step_count() {
            return Err(CalendarError::StepOutOfRange {
                step: self.cursor + 1,
                len: self.step_count(),
            });
        }
        Ok(self.cursor + 1)
    }

    /// Move the cursor to the next step and return its 1-based index.
    ///
    /// A strategy calls this only after the step's work has succeeded, so
    /// a failed step does not consume its slot.
    pub fn advance(&mut self) -> CalendarResult<usize> {
        let step = self.next_step()?;
        self.cursor = step;
        Ok(step)
    }

    /// Map a 1-based step index to its `(start, end)` boundary pair
    pub fn step_bounds(&self, step: usize) -> CalendarResult<(Timestamp, Timestamp)> {
        if step == 0 || step > self.step_count() {
            return Err(CalendarError::StepOutOfRange {
                step,
                len: self.step_count(),
            });
        }
        Ok((self.boundaries[step - 1], self.boundaries[step]))
    }
}
