//! Per-item aggregates over a purchase log.
//!
//! Every aggregate is returned in the order items first appear in the
//! input, so a stable sort over it breaks ties by input order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::item::ItemId;
use crate::transaction::Purchase;

/// Share of all distinct purchasers who bought an item at least once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemShare {
    pub item: ItemId,
    pub share_unique_users: f64,
}

/// Total quantity sold of an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSales {
    pub item: ItemId,
    pub n_sold: i64,
}

/// Groups purchases by item, first appearance first.
struct ItemGroups<T> {
    index: HashMap<ItemId, usize>,
    groups: Vec<(ItemId, T)>,
}

impl<T> ItemGroups<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn entry(&mut self, item: ItemId, init: impl FnOnce() -> T) -> &mut T {
        let groups = &mut self.groups;
        let idx = *self.index.entry(item).or_insert_with(|| {
            groups.push((item, init()));
            groups.len() - 1
        });
        &mut self.groups[idx].1
    }
}

/// Per-item share of unique users, measured against the distinct users in
/// `purchases`. Empty input gives an empty result.
pub fn user_shares(purchases: &[Purchase]) -> Vec<ItemShare> {
    let total_users = purchases
        .iter()
        .map(|p| p.user_id)
        .collect::<HashSet<_>>()
        .len();
    if total_users == 0 {
        return Vec::new();
    }

    let mut groups: ItemGroups<HashSet<u64>> = ItemGroups::new();
    for purchase in purchases {
        groups.entry(purchase.item, HashSet::new).insert(purchase.user_id);
    }

    groups
        .groups
        .into_iter()
        .map(|(item, users)| ItemShare {
            item,
            share_unique_users: users.len() as f64 / total_users as f64,
        })
        .collect()
}

pub fn quantity_sold(purchases: &[Purchase]) -> Vec<ItemSales> {
    let mut groups: ItemGroups<i64> = ItemGroups::new();
    for purchase in purchases {
        *groups.entry(purchase.item, || 0) += purchase.quantity;
    }
    groups
        .groups
        .into_iter()
        .map(|(item, n_sold)| ItemSales { item, n_sold })
        .collect()
}

/// Most recent `week_no` each item was bought in.
pub fn last_purchase_weeks(purchases: &[Purchase]) -> Vec<(ItemId, u32)> {
    let mut groups: ItemGroups<u32> = ItemGroups::new();
    for purchase in purchases {
        let last = groups.entry(purchase.item, || purchase.week_no);
        *last = (*last).max(purchase.week_no);
    }
    groups.groups
}
