use std::collections::HashSet;

use basket_core::popularity::last_purchase_weeks;
use basket_core::{BasketResult, ItemId, Purchase};

use crate::filter::{Filter, FilterResult};
use crate::types::PrefilterRequest;

/// Keeps only items whose last purchase falls inside the trailing window.
///
/// An item survives when its latest `week_no` is strictly greater than
/// `max(week_no) - purchases_weeks` over the incoming rows.
pub struct StaleItemFilter {
    pub purchases_weeks: u32,
}

impl StaleItemFilter {
    pub fn new(purchases_weeks: u32) -> Self {
        Self { purchases_weeks }
    }
}

impl Filter<PrefilterRequest, Purchase> for StaleItemFilter {
    fn filter(
        &self,
        query: &PrefilterRequest,
        candidates: Vec<Purchase>,
    ) -> BasketResult<FilterResult<Purchase>> {
        let Some(latest_week) = candidates.iter().map(|p| p.week_no).max() else {
            return Ok(FilterResult::keep_all(candidates));
        };
        let cutoff = i64::from(latest_week) - i64::from(self.purchases_weeks);

        let fresh: HashSet<ItemId> = last_purchase_weeks(&candidates)
            .into_iter()
            .filter(|&(_, week)| i64::from(week) > cutoff)
            .map(|(item, _)| item)
            .collect();

        log::debug!(
            "request_id={} latest_week={} cutoff={} fresh_items={}",
            query.request_id,
            latest_week,
            cutoff,
            fresh.len()
        );

        Ok(FilterResult::partition(candidates, |p| fresh.contains(&p.item)))
    }
}
