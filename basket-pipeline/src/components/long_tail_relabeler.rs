use std::collections::HashSet;

use basket_core::{ItemId, Purchase};

/// Collapses every item outside the retained set into `ItemId::Other`.
///
/// Rows are relabeled, never dropped, so each user's purchase volume is
/// preserved and "bought something outside the catalog" stays a
/// learnable event.
pub struct LongTailRelabeler;

impl LongTailRelabeler {
    /// Returns the relabeled rows and how many of them changed.
    pub fn relabel(
        &self,
        retained: &HashSet<ItemId>,
        mut purchases: Vec<Purchase>,
    ) -> (Vec<Purchase>, usize) {
        let mut relabeled = 0;
        for purchase in purchases
            .iter_mut()
            .filter(|p| !retained.contains(&p.item))
        {
            if !purchase.item.is_other() {
                purchase.item = ItemId::Other;
                relabeled += 1;
            }
        }
        (purchases, relabeled)
    }
}
