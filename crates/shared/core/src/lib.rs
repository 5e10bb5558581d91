//! Kairos Core Domain
//!
//! Pure domain types for the Kairos order-slicing engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{ChildOrder, ParentOrder, ParentOrderId, Side, TradeKey};
pub use values::{Price, Quantity, Symbol, Timestamp};
