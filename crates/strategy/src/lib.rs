//! Kairos Strategy Framework
//!
//! Order-slicing execution strategies: given a parent order (a target
//! quantity over a coarse window), emit the child orders for each step of
//! a trade calendar.
//!
//! ## Architecture
//!
//! ```text
//!  backtest loop ──reset──────────────► Strategy
//!       │                                  │ owns
//!       │                       ┌──────────┼──────────────┐
//!       │                       ▼          ▼              ▼
//!       │                 TradeCalendar  ParentOrderBook  SliceState (per key)
//!       │                                                     ▲
//!       ├──generate_order_list (1x/step)──► Strategy ─────────┘
//!       │                                  │
//!       │           odd steps only         ▼
//!       │                           TrendPredictor (port)
//!       ▼
//!  child orders ──► execution engine (out of scope)
//! ```
//!
//! The calendar stepper and the order book are explicit collaborators the
//! strategy holds, not base classes; the prediction hook is injected at
//! construction.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kairos_strategy::{ExecutionStrategy, SbbStrategy};
//! use std::sync::Arc;
//!
//! let mut strategy = SbbStrategy::with_predictor(Arc::new(my_predictor));
//! strategy.reset(start, end, parent_orders, step_bar)?;
//! for _ in 0..n_steps {
//!     let child_orders = strategy.generate_order_list().await?;
//!     // hand off to execution
//! }
//! ```

pub mod book;
pub mod error;
pub mod sbb;
pub mod state;
pub mod strategy;
pub mod twap;

// Re-export main types
pub use book::ParentOrderBook;
pub use error::{StrategyError, StrategyResult};
pub use sbb::SbbStrategy;
pub use state::SliceState;
pub use strategy::ExecutionStrategy;
pub use twap::TwapStrategy;
