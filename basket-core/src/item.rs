use std::fmt;

use serde::{Deserialize, Serialize};

use crate::thresholds::SENTINEL_ITEM_ID;

/// Identifier of a purchasable item.
///
/// `Other` stands for "anything outside the retained catalog". It is kept
/// apart from real ids in memory and only becomes `SENTINEL_ITEM_ID` when
/// serialized, so a real item numbered 999999 is never mistaken for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum ItemId {
    Known(u64),
    Other,
}

impl ItemId {
    /// The id as written to downstream tables.
    pub fn raw(self) -> u64 {
        match self {
            ItemId::Known(id) => id,
            ItemId::Other => SENTINEL_ITEM_ID,
        }
    }

    pub fn is_other(self) -> bool {
        matches!(self, ItemId::Other)
    }
}

/// Raw ids read from input are always real items.
impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId::Known(id)
    }
}

impl From<ItemId> for u64 {
    fn from(item: ItemId) -> Self {
        item.raw()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Known(id) => write!(f, "{}", id),
            ItemId::Other => write!(f, "other({})", SENTINEL_ITEM_ID),
        }
    }
}
