pub mod catalog;
pub mod config;
pub mod error;
pub mod item;
pub mod popularity;
pub mod prices;
pub mod thresholds;
pub mod transaction;

pub use catalog::{ItemCatalog, ItemFeatures};
pub use config::{MissingCategoryPolicy, PostfilterConfig, PrefilterConfig};
pub use error::{BasketError, BasketResult};
pub use item::ItemId;
pub use popularity::{ItemSales, ItemShare};
pub use prices::{get_prices, PriceIndex};
pub use transaction::{Purchase, Transaction};
