use basket_core::{BasketResult, Purchase};

use crate::filter::{Filter, FilterResult};
use crate::types::PrefilterRequest;

/// Drops rows with zero quantity sold.
pub struct ZeroQuantityFilter;

impl Filter<PrefilterRequest, Purchase> for ZeroQuantityFilter {
    fn filter(
        &self,
        _query: &PrefilterRequest,
        candidates: Vec<Purchase>,
    ) -> BasketResult<FilterResult<Purchase>> {
        Ok(FilterResult::partition(candidates, |p| p.quantity != 0))
    }
}
