//! TWAP execution strategy
//!
//! Time-weighted average price: every parent order is split evenly across
//! all calendar steps. Each step emits one child order per key at the
//! precomputed base rate; there is no cross-step memory beyond the cursor.

use async_trait::async_trait;
use chrono::Duration;
use kairos_calendar::TradeCalendar;
use kairos_core::{ChildOrder, ParentOrder, Quantity, Timestamp, TradeKey};
use std::collections::HashMap;

use crate::book::ParentOrderBook;
use crate::error::{StrategyError, StrategyResult};
use crate::state::base_amount;
use crate::strategy::ExecutionStrategy;

/// Evenly slices each parent order across the trading window
#[derive(Debug, Clone, Default)]
pub struct TwapStrategy {
    calendar: Option<TradeCalendar>,
    book: ParentOrderBook,
    /// Per-key base quantity, fixed at reset
    base: HashMap<TradeKey, Quantity>,
}

impl TwapStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExecutionStrategy for TwapStrategy {
    fn name(&self) -> &str {
        "TwapStrategy"
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
        let mut base = HashMap::with_capacity(book.len());
        for parent in book.iter() {
            base.insert(parent.key(), base_amount(parent.total_amount, steps));
        }

        log::info!(
            "[TWAP] reset: {} steps of {}, {} parent orders",
            steps,
            step_bar,
            book.len()
        );

        self.calendar = Some(calendar);
        self.book = book;
        self.base = base;
        Ok(())
    }

    async fn generate_order_list(&mut self) -> StrategyResult<Vec<ChildOrder>> {
        let calendar = self.calendar.as_mut().ok_or(StrategyError::NotReady)?;
        let step = calendar.next_step()?;
        let (step_start, step_end) = calendar.step_bounds(step)?;

        let mut order_list = Vec::with_capacity(self.book.len());
        for parent in self.book.iter() {
            let key = parent.key();
            let base = *self.base.get(&key).ok_or_else(|| StrategyError::UnknownKey {
                instrument_id: key.instrument_id.clone(),
                side: key.side,
            })?;
            order_list.push(ChildOrder::slice_of(parent, base, step_start, step_end));
        }

        // Commit the step only once every key has been worked
        calendar.advance()?;

        log::debug!(
            "[TWAP] step {}: emitted {} child orders",
            step,
            order_list.len()
        );
        Ok(order_list)
    }
}
