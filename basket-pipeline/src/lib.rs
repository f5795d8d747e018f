//! Pre- and post-filtering for retail recommendations.
//!
//! The prefilter narrows a transaction log to a tractable, commercially
//! relevant catalog; the postfilter turns a ranked candidate list into a
//! fixed-length, category-diverse recommendation list.

pub mod components;
pub mod filter;
pub mod pipelines;
pub mod selector;
pub mod types;
pub mod util;

pub use basket_core::{get_prices, PriceIndex};
pub use pipelines::postfilter::{postfilter_batch, postfilter_items};
pub use pipelines::prefilter::{prefilter_items, PrefilterPipeline};
pub use types::{PrefilterOutput, PrefilterRequest, StageReport};
