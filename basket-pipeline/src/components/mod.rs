pub mod category_diversity_reranker;
pub mod long_tail_relabeler;
pub mod price_band_filter;
pub mod rare_department_filter;
pub mod stale_item_filter;
pub mod top_sellers_selector;
pub mod user_share_filter;
pub mod zero_quantity_filter;
