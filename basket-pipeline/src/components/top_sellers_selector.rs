use basket_core::ItemSales;

use crate::selector::Selector;

/// Selects the `take_n` items with the most units sold.
pub struct TopSellersSelector {
    pub take_n: usize,
}

impl TopSellersSelector {
    pub fn new(take_n: usize) -> Self {
        Self { take_n }
    }
}

impl Selector<ItemSales> for TopSellersSelector {
    fn score(&self, candidate: &ItemSales) -> f64 {
        candidate.n_sold as f64
    }

    fn size(&self) -> Option<usize> {
        Some(self.take_n)
    }
}
