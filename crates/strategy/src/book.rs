//! Parent order registry
//!
//! One slot per (instrument, side): a strategy works at most one parent
//! order for each key within a run. Iteration preserves registration
//! order so per-step output is deterministic.

use std::collections::HashMap;

use kairos_core::{ParentOrder, TradeKey};

use crate::error::{StrategyError, StrategyResult};

/// Registry of the parent orders a strategy is working
#[derive(Debug, Clone, Default)]
pub struct ParentOrderBook {
    orders: Vec<ParentOrder>,
    slots: HashMap<TradeKey, usize>,
}

impl ParentOrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from a list of parent orders.
    ///
    /// Fails with `DuplicateKey` if two orders share an (instrument, side)
    /// pair, or `InvalidOrder` on a negative quantity.
    pub fn from_orders(orders: Vec<ParentOrder>) -> StrategyResult<Self> {
        let mut book = Self::new();
        for order in orders {
            book.register(order)?;
        }
        Ok(book)
    }

    /// Register one parent order
    pub fn register(&mut self, order: ParentOrder) -> StrategyResult<()> {
        if !order.validate() {
            return Err(StrategyError::InvalidOrder(format!(
                "negative amount {} for {}",
                order.total_amount, order.instrument_id
            )));
        }
        let key = order.key();
        if self.slots.contains_key(&key) {
            return Err(StrategyError::DuplicateKey {
                instrument_id: key.instrument_id,
                side: key.side,
            });
        }
        self.slots.insert(key, self.orders.len());
        self.orders.push(order);
        Ok(())
    }

    /// Look up the parent order for a key
    pub fn get(&self, key: &TradeKey) -> Option<&ParentOrder> {
        self.slots.get(key).map(|&i| &self.orders[i])
    }

    /// Iterate parent orders in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ParentOrder> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_core::Side;
    use rust_decimal_macros::dec;

    #[test]
    fn test_register_and_lookup() {
        let mut book = ParentOrderBook::new();
        book.register(ParentOrder::new("BTC-USD", Side::Buy, dec!(100)))
            .unwrap();
        book.register(ParentOrder::new("BTC-USD", Side::Sell, dec!(50)))
            .unwrap();

        assert_eq!(book.len(), 2);
        let key = TradeKey::new("BTC-USD", Side::Sell);
        assert_eq!(book.get(&key).unwrap().total_amount, dec!(50));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let orders = vec![
            ParentOrder::new("BTC-USD", Side::Buy, dec!(100)),
            ParentOrder::new("BTC-USD", Side::Buy, dec!(200)),
        ];
        let err = ParentOrderBook::from_orders(orders).unwrap_err();
        assert!(matches!(err, StrategyError::DuplicateKey { .. }));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut book = ParentOrderBook::new();
        let err = book
            .register(ParentOrder::new("BTC-USD", Side::Buy, dec!(-5)))
            .unwrap_err();
        assert!(matches!(err, StrategyError::InvalidOrder(_)));
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let book = ParentOrderBook::from_orders(vec![
            ParentOrder::new("ETH-USD", Side::Sell, dec!(1)),
            ParentOrder::new("BTC-USD", Side::Buy, dec!(2)),
        ])
        .unwrap();

        let ids: Vec<&str> = book.iter().map(|o| o.instrument_id.as_str()).collect();
        assert_eq!(ids, vec!["ETH-USD", "BTC-USD"]);
    }
}
