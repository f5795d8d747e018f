use basket_core::{BasketResult, PrefilterConfig, Purchase};

use crate::filter::{Filter, FilterResult};
use crate::types::PrefilterRequest;

/// Keeps rows whose unit price lies in `[min_price, max_price)`.
///
/// Cheap items are not worth a promotion slot; expensive ones exceed a
/// typical promotion budget.
pub struct PriceBandFilter {
    pub min_price: f64,
    pub max_price: f64,
}

impl PriceBandFilter {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            min_price,
            max_price,
        }
    }
}

impl From<&PrefilterConfig> for PriceBandFilter {
    fn from(config: &PrefilterConfig) -> Self {
        Self::new(config.min_price, config.max_price)
    }
}

impl Filter<PrefilterRequest, Purchase> for PriceBandFilter {
    fn filter(
        &self,
        _query: &PrefilterRequest,
        candidates: Vec<Purchase>,
    ) -> BasketResult<FilterResult<Purchase>> {
        Ok(FilterResult::partition(candidates, |p| {
            p.price >= self.min_price && p.price < self.max_price
        }))
    }
}
