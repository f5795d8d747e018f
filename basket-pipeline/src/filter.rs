use basket_core::BasketResult;

use crate::util;

/// Result of a filter operation, partitioning candidates into kept and removed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<C> {
    pub kept: Vec<C>,
    pub removed: Vec<C>,
}

impl<C> FilterResult<C> {
    /// Split candidates on a predicate. Both halves keep input order.
    pub fn partition(candidates: Vec<C>, keep: impl FnMut(&C) -> bool) -> Self {
        let (kept, removed) = candidates.into_iter().partition(keep);
        Self { kept, removed }
    }

    /// Everything passes through untouched.
    pub fn keep_all(candidates: Vec<C>) -> Self {
        Self {
            kept: candidates,
            removed: Vec::new(),
        }
    }
}

/// Filters run sequentially; each one sees only what the previous kept.
///
/// A filter may aggregate over the whole candidate set before deciding,
/// so thresholds are always computed on already-reduced data.
pub trait Filter<Q, C>: Send + Sync {
    /// Decide if this filter should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    fn filter(&self, query: &Q, candidates: Vec<C>) -> BasketResult<FilterResult<C>>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
