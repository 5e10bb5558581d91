use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ParentOrder, Side};
use crate::values::{Quantity, Symbol, Timestamp};

/// One step's slice of a parent order, emitted for execution.
///
/// Child orders are ephemeral: produced fresh on each strategy step and
/// handed to the execution engine, never retained by the strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildOrder {
    /// The instrument being traded
    pub instrument_id: Symbol,
    /// Quantity to execute within this step
    pub amount: Quantity,
    /// Start of the step this slice belongs to
    pub start_time: Timestamp,
    /// End of the step this slice belongs to
    pub end_time: Timestamp,
    pub side: Side,
    /// Price adjustment factor, copied from the parent
    pub factor: Decimal,
}

impl ChildOrder {
    /// Create a slice of `parent` covering the step `[start_time, end_time)`
    pub fn slice_of(
        parent: &ParentOrder,
        amount: Quantity,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        Self {
            instrument_id: parent.instrument_id.clone(),
            amount,
            start_time,
            end_time,
            side: parent.side,
            factor: parent.factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_slice_copies_parent_fields() {
        let parent = ParentOrder::new("ETH-USD", Side::Sell, dec!(90)).with_factor(dec!(2));
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();

        let child = ChildOrder::slice_of(&parent, dec!(30), start, end);

        assert_eq!(child.instrument_id, "ETH-USD");
        assert_eq!(child.side, Side::Sell);
        assert_eq!(child.factor, dec!(2));
        assert_eq!(child.amount, dec!(30));
        assert_eq!(child.start_time, start);
        assert_eq!(child.end_time, end);
    }
}
