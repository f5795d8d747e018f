//! Centralized business thresholds for catalog pre- and post-filtering.
//!
//! These are the defaults behind `PrefilterConfig` and `PostfilterConfig`.
//! They are calibrated for grocery-style transaction logs where one week is
//! the unit of `week_no` and prices are in the store's base currency.

/// Reserved raw id written for `ItemId::Other` when purchases are exported.
pub const SENTINEL_ITEM_ID: u64 = 999_999;

/// Trailing window (in weeks) an item must have sold within to be kept.
pub const PURCHASES_WEEKS: u32 = 30;

/// How many best-selling items keep their own id after prefiltering.
pub const TAKE_N_POPULAR: usize = 20_000;

/// Items bought by more than this share of users are dropped: they get
/// bought whether or not they are recommended.
pub const MAX_USER_SHARE: f64 = 0.2;

/// Items bought by fewer than this share of users are dropped as too rare.
pub const MIN_USER_SHARE: f64 = 0.02;

/// Departments with fewer distinct items than this are not recommended from.
pub const MIN_DEPARTMENT_ITEMS: usize = 150;

/// Lowest unit price worth promoting (inclusive).
pub const MIN_PRICE: f64 = 1.0;

/// Unit price at and above which an item is too expensive to promote.
pub const MAX_PRICE: f64 = 50.0;

/// Default length of a post-filtered recommendation list.
pub const RECOMMENDATIONS_PER_USER: usize = 5;
