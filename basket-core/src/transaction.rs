//! Transaction rows as read from the purchase log, and the priced form the
//! filters operate on.
//!
//! Expected input columns:
//!   user_id, item_id, quantity, sales_value, week_no

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// One line of the raw purchase log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub user_id: u64,
    pub item_id: u64,
    pub quantity: i64,
    pub sales_value: f64,
    pub week_no: u32,
}

impl Transaction {
    /// Convert to a `Purchase`, deriving the unit price.
    pub fn to_purchase(&self) -> Purchase {
        Purchase {
            user_id: self.user_id,
            item: ItemId::Known(self.item_id),
            quantity: self.quantity,
            sales_value: self.sales_value,
            week_no: self.week_no,
            price: unit_price(self.sales_value, self.quantity),
        }
    }
}

/// A transaction carried through filtering, with its unit price attached.
///
/// `item` may be relabeled to `ItemId::Other`; every other field is the
/// input row's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub user_id: u64,
    #[serde(rename = "item_id")]
    pub item: ItemId,
    pub quantity: i64,
    pub sales_value: f64,
    pub week_no: u32,
    pub price: f64,
}

impl From<&Transaction> for Purchase {
    fn from(transaction: &Transaction) -> Self {
        transaction.to_purchase()
    }
}

/// `sales_value / max(quantity, 1)`: zero and negative quantities count as one unit.
pub fn unit_price(sales_value: f64, quantity: i64) -> f64 {
    sales_value / quantity.max(1) as f64
}
