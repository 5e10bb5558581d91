//! SBB execution strategy
//!
//! "Select the Better Bar": trend-adaptive slicing over adjacent step
//! pairs. On odd steps the strategy asks the trend predictor for a
//! directional view; on even steps it replays the view stored by the
//! preceding odd step. A directional view accelerates the favorable side
//! now (2x base) and defers the unfavorable side to the paired step, where
//! favorability inverts: trade into the move, not against it.
//!
//! Decision table (base = per-step base quantity):
//!
//! | trend | odd step        | even step       |
//! |-------|-----------------|-----------------|
//! | Mid   | base            | base            |
//! | Short | Sell 2x, Buy 0  | Buy 2x, Sell 0  |
//! | Long  | Buy 2x, Sell 0  | Sell 2x, Buy 0  |
//!
//! A run of same-direction predictions can leave a key persistently over-
//! or under-executed relative to the parent target; that is intrinsic to
//! the algorithm, not a defect.

use async_trait::async_trait;
use chrono::Duration;
use kairos_calendar::TradeCalendar;
use kairos_core::{ChildOrder, ParentOrder, Side, Timestamp, TradeKey};
use kairos_signal::{NullPredictor, Trend, TrendPredictor};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::book::ParentOrderBook;
use crate::error::{StrategyError, StrategyResult};
use crate::state::{SliceState, base_amount};
use crate::strategy::ExecutionStrategy;

/// Trend-adaptive strategy working adjacent step pairs
pub struct SbbStrategy {
    predictor: Arc<dyn TrendPredictor>,
    calendar: Option<TradeCalendar>,
    book: ParentOrderBook,
    state: HashMap<TradeKey, SliceState>,
}

impl SbbStrategy {
    /// Create an SBB strategy with the prediction hook left unimplemented.
    ///
    /// The first odd step will fail with `SignalError::Unavailable`; use
    /// `with_predictor` to wire in a concrete implementation.
    pub fn new() -> Self {
        Self::with_predictor(Arc::new(NullPredictor))
    }

    /// Create an SBB strategy driven by `predictor`
    pub fn with_predictor(predictor: Arc<dyn TrendPredictor>) -> Self {
        Self {
            predictor,
            calendar: None,
            book: ParentOrderBook::new(),
            state: HashMap::new(),
        }
    }

    /// The side accelerated this step for a directional trend.
    ///
    /// Odd steps trade into the move (Short favors Sell, Long favors Buy);
    /// the paired even step inverts favorability, picking up the deferred
    /// side at the bar the trend made cheaper.
    fn favored_side(trend: Trend, odd_step: bool) -> Option<Side> {
        let into_the_move = match trend {
            Trend::Mid => return None,
            Trend::Short => Side::Sell,
            Trend::Long => Side::Buy,
        };
        Some(if odd_step {
            into_the_move
        } else {
            into_the_move.opposite()
        })
    }
}

impl Default for SbbStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecutionStrategy for SbbStrategy {
    fn name(&self) -> &str {
        "SbbStrategy"
    }

    fn reset(
        &mut self,
        start_time: Timestamp,
        end_time: Timestamp,
        orders: Vec<ParentOrder>,
        step_bar: Duration,
    ) -> StrategyResult<()> {
        let calendar = TradeCalendar::new(start_time, end_time, step_bar)?;
        let book = ParentOrderBook::from_orders(orders)?;

        let steps = calendar.step_count();
        let mut state = HashMap::with_capacity(book.len());
        for parent in book.iter() {
            state.insert(
                parent.key(),
                SliceState::new(base_amount(parent.total_amount, steps)),
            );
        }

        log::info!(
            "[SBB] reset: {} steps of {}, {} parent orders, predictor {}",
            steps,
            step_bar,
            book.len(),
            self.predictor.name()
        );

        self.calendar = Some(calendar);
        self.book = book;
        self.state = state;
        Ok(())
    }

    async fn generate_order_list(&mut self) -> StrategyResult<Vec<ChildOrder>> {
        let calendar = self.calendar.as_mut().ok_or(StrategyError::NotReady)?;
        let step = calendar.next_step()?;
        let (step_start, step_end) = calendar.step_bounds(step)?;
        let odd_step = step % 2 == 1;

        // Odd steps predict over [end of step-2, just before this step);
        // step 1 anchors the window at the run start.
        let pred_window = if odd_step {
            let window_start = if step == 1 {
                calendar.start()
            } else {
                calendar.step_bounds(step - 1)?.0
            };
            Some((window_start, step_start - Duration::seconds(1)))
        } else {
            None
        };

        let mut order_list = Vec::with_capacity(self.book.len());
        for parent in self.book.iter() {
            let key = parent.key();

            let trend = match pred_window {
                Some((window_start, window_end)) => {
                    self.predictor
                        .predict(&parent.instrument_id, window_start, window_end)
                        .await?
                }
                // Even step: replay the trend decided on the preceding odd step
                None => {
                    self.state
                        .get(&key)
                        .ok_or_else(|| StrategyError::UnknownKey {
                            instrument_id: key.instrument_id.clone(),
                            side: key.side,
                        })?
                        .trend
                }
            };

            let state = self
                .state
                .get_mut(&key)
                .ok_or_else(|| StrategyError::UnknownKey {
                    instrument_id: key.instrument_id.clone(),
                    side: key.side,
                })?;

            let amount = if !trend.is_directional() {
                Some(state.base_amount)
            } else if Self::favored_side(trend, odd_step) == Some(parent.side) {
                Some(state.base_amount * Decimal::TWO)
            } else {
                // Unfavorable side: defer to the paired step
                None
            };

            if let Some(amount) = amount {
                order_list.push(ChildOrder::slice_of(parent, amount, step_start, step_end));
            }

            // Trend is overwritten only on odd steps
            if odd_step {
                state.trend = trend;
            }
        }

        // Commit the step only once every key has been worked, so a failed
        // prediction does not consume its slot
        calendar.advance()?;

        log::debug!(
            "[SBB] step {} ({}): emitted {} child orders",
            step,
            if odd_step { "predict" } else { "replay" },
            order_list.len()
        );
        Ok(order_list)
    }
}
