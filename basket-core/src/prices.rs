//! Mean observed unit price per item.

use std::collections::HashMap;

use crate::item::ItemId;
use crate::transaction::Purchase;

/// Pre-aggregated `item -> (price sum, row count)`, built once per log.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex {
    totals: HashMap<ItemId, (f64, usize)>,
}

impl PriceIndex {
    pub fn new(purchases: &[Purchase]) -> Self {
        let mut totals: HashMap<ItemId, (f64, usize)> = HashMap::new();
        for purchase in purchases {
            let entry = totals.entry(purchase.item).or_insert((0.0, 0));
            entry.0 += purchase.price;
            entry.1 += 1;
        }
        Self { totals }
    }

    /// Arithmetic mean of the item's row prices, `None` if it never sold.
    pub fn mean(&self, item: ItemId) -> Option<f64> {
        self.totals
            .get(&item)
            .map(|&(sum, count)| sum / count as f64)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Mean price for each of `items`, in the same order. Items with no
/// matching rows yield `None` rather than an error.
pub fn get_prices(items: &[ItemId], purchases: &[Purchase]) -> Vec<Option<f64>> {
    let index = PriceIndex::new(purchases);
    items.iter().map(|&item| index.mean(item)).collect()
}
