use std::collections::HashSet;

use basket_core::popularity::user_shares;
use basket_core::{BasketResult, ItemId, PrefilterConfig, Purchase};

use crate::filter::{Filter, FilterResult};
use crate::types::PrefilterRequest;

/// Drops items bought by too large or too small a share of users.
///
/// Both bounds are checked against one popularity snapshot taken over the
/// incoming rows; the share denominator is the distinct user count of
/// those rows. Bounds are exclusive: an item exactly at a bound stays.
pub struct UserShareFilter {
    pub min_share: f64,
    pub max_share: f64,
}

impl UserShareFilter {
    pub fn new(min_share: f64, max_share: f64) -> Self {
        Self {
            min_share,
            max_share,
        }
    }
}

impl From<&PrefilterConfig> for UserShareFilter {
    fn from(config: &PrefilterConfig) -> Self {
        Self::new(config.min_user_share, config.max_user_share)
    }
}

impl Filter<PrefilterRequest, Purchase> for UserShareFilter {
    fn filter(
        &self,
        query: &PrefilterRequest,
        candidates: Vec<Purchase>,
    ) -> BasketResult<FilterResult<Purchase>> {
        let shares = user_shares(&candidates);
        let (mut too_popular, mut too_rare) = (0, 0);
        let dropped: HashSet<ItemId> = shares
            .iter()
            .filter(|s| {
                if s.share_unique_users > self.max_share {
                    too_popular += 1;
                    true
                } else if s.share_unique_users < self.min_share {
                    too_rare += 1;
                    true
                } else {
                    false
                }
            })
            .map(|s| s.item)
            .collect();

        log::debug!(
            "request_id={} items={} too_popular={} too_rare={}",
            query.request_id,
            shares.len(),
            too_popular,
            too_rare
        );

        Ok(FilterResult::partition(candidates, |p| {
            !dropped.contains(&p.item)
        }))
    }
}
