use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;
use crate::values::{Quantity, Symbol};

/// Unique identifier for a parent order
pub type ParentOrderId = Uuid;

/// Identifies one side of one instrument within a run.
///
/// An instrument may have independent Buy and Sell parent orders worked
/// simultaneously, so the side is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeKey {
    pub instrument_id: Symbol,
    pub side: Side,
}

impl TradeKey {
    pub fn new(instrument_id: impl Into<Symbol>, side: Side) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            side,
        }
    }
}

/// A parent order: the total quantity of an instrument to be bought or sold
/// over the full strategy window.
///
/// Immutable once registered for a run; the strategy derives per-step child
/// orders from it but never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentOrder {
    pub id: ParentOrderId,
    /// The instrument being traded
    pub instrument_id: Symbol,
    pub side: Side,
    /// Target quantity over the whole window
    pub total_amount: Quantity,
    /// Price adjustment factor, copied verbatim onto every child order
    pub factor: Decimal,
}

impl ParentOrder {
    /// Create a new parent order with a neutral price adjustment factor
    pub fn new(instrument_id: impl Into<Symbol>, side: Side, total_amount: Quantity) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument_id: instrument_id.into(),
            side,
            total_amount,
            factor: Decimal::ONE,
        }
    }

    /// Builder: Set the price adjustment factor
    pub fn with_factor(mut self, factor: Decimal) -> Self {
        self.factor = factor;
        self
    }

    /// Key identifying this order's (instrument, side) slot in a run
    pub fn key(&self) -> TradeKey {
        TradeKey::new(self.instrument_id.clone(), self.side)
    }

    /// Validate the order: quantities must be non-negative
    pub fn validate(&self) -> bool {
        self.total_amount >= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parent_order_creation() {
        let order = ParentOrder::new("BTC-USD", Side::Buy, dec!(100)).with_factor(dec!(0.5));

        assert_eq!(order.instrument_id, "BTC-USD");
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.total_amount, dec!(100));
        assert_eq!(order.factor, dec!(0.5));
        assert!(order.validate());
    }

    #[test]
    fn test_negative_amount_invalid() {
        let order = ParentOrder::new("BTC-USD", Side::Sell, dec!(-1));
        assert!(!order.validate());
    }

    #[test]
    fn test_keys_differ_by_side() {
        let buy = ParentOrder::new("BTC-USD", Side::Buy, dec!(10));
        let sell = ParentOrder::new("BTC-USD", Side::Sell, dec!(10));

        assert_ne!(buy.key(), sell.key());
        assert_eq!(buy.key(), TradeKey::new("BTC-USD", Side::Buy));
    }
}
