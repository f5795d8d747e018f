use std::collections::HashSet;

use basket_core::{BasketResult, ItemCatalog, ItemId, Purchase};

use crate::filter::{Filter, FilterResult};
use crate::types::PrefilterRequest;

/// Drops rows for items in departments too small to recommend from.
///
/// Department sizes come from the item catalog, not from the transactions,
/// so the excluded set is computed once at construction.
pub struct RareDepartmentFilter {
    excluded: HashSet<ItemId>,
}

impl RareDepartmentFilter {
    pub fn new(catalog: &ItemCatalog, min_department_items: usize) -> Self {
        Self {
            excluded: catalog.items_in_rare_departments(min_department_items),
        }
    }

    /// Number of catalog items this filter excludes.
    pub fn excluded_items(&self) -> usize {
        self.excluded.len()
    }
}

impl Filter<PrefilterRequest, Purchase> for RareDepartmentFilter {
    fn enable(&self, _query: &PrefilterRequest) -> bool {
        !self.excluded.is_empty()
    }

    fn filter(
        &self,
        _query: &PrefilterRequest,
        candidates: Vec<Purchase>,
    ) -> BasketResult<FilterResult<Purchase>> {
        Ok(FilterResult::partition(candidates, |p| {
            !self.excluded.contains(&p.item)
        }))
    }
}
