//! Execution strategy trait
//!
//! The owning backtest loop drives a strategy in two phases:
//! `reset` once to bind the trading window and parent orders, then
//! `generate_order_list` exactly once per calendar step, strictly in
//! increasing step order. Each call returns the child orders for that
//! step only; zero orders is a valid result (a deferred SBB leg).

use async_trait::async_trait;
use chrono::Duration;
use kairos_core::{ChildOrder, ParentOrder, Timestamp};

use crate::error::StrategyResult;

/// Strategy trait - implement this to slice parent orders into child orders
#[async_trait]
pub trait ExecutionStrategy: Send {
    /// Strategy name for logging
    fn name(&self) -> &str;

    /// (Re)initialize the calendar and per-key state for a new run.
    ///
    /// Fails with `Calendar(InvalidWindow)` on a malformed window,
    /// `DuplicateKey` if two parent orders share an (instrument, side)
    /// pair, or `InvalidOrder` on a negative quantity.
    fn reset(
        &mut self,
        start_time: Timestamp,
        end_time: Timestamp,
        orders: Vec<ParentOrder>,
        step_bar: Duration,
    ) -> StrategyResult<()>;

    /// Produce the child orders for the next step and advance the cursor.
    ///
    /// Fails with `Calendar(StepOutOfRange)` past the last step and
    /// `NotReady` before the first `reset`.
    async fn generate_order_list(&mut self) -> StrategyResult<Vec<ChildOrder>>;
}
