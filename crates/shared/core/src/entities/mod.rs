mod child_order;
mod parent_order;
mod side;

pub use child_order::ChildOrder;
pub use parent_order::{ParentOrder, ParentOrderId, TradeKey};
pub use side::Side;
