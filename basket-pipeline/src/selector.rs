use std::cmp::Ordering;

use crate::util;

/// Selectors rank candidates by score and keep the best `size()`.
pub trait Selector<C>: Send + Sync {
    fn score(&self, candidate: &C) -> f64;

    /// Maximum number of candidates to keep. `None` keeps all.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Stable descending sort then truncate: equal scores keep input order.
    fn select(&self, candidates: Vec<C>) -> Vec<C> {
        let mut ranked = candidates;
        ranked.sort_by(|a, b| descending_nan_last(self.score(a), self.score(b)));
        if let Some(limit) = self.size() {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
