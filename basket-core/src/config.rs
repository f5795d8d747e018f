//! Filter configuration.
//!
//! Both configs deserialize with `#[serde(default)]`, so a JSON document
//! only needs the keys it overrides. Call `validate()` (or use `from_json`,
//! which does) before handing a config to a pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{BasketError, BasketResult};
use crate::thresholds;

/// Thresholds for the prefilter rules, in the order the rules apply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefilterConfig {
    pub max_user_share: f64,
    pub min_user_share: f64,
    pub purchases_weeks: u32,
    pub min_department_items: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub take_n_popular: usize,
}

impl Default for PrefilterConfig {
    fn default() -> Self {
        Self {
            max_user_share: thresholds::MAX_USER_SHARE,
            min_user_share: thresholds::MIN_USER_SHARE,
            purchases_weeks: thresholds::PURCHASES_WEEKS,
            min_department_items: thresholds::MIN_DEPARTMENT_ITEMS,
            min_price: thresholds::MIN_PRICE,
            max_price: thresholds::MAX_PRICE,
            take_n_popular: thresholds::TAKE_N_POPULAR,
        }
    }
}

impl PrefilterConfig {
    /// Defaults with the two knobs the classic call signature exposes.
    pub fn new(purchases_weeks: u32, take_n_popular: usize) -> Self {
        Self {
            purchases_weeks,
            take_n_popular,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> BasketResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BasketResult<()> {
        for (name, share) in [
            ("max_user_share", self.max_user_share),
            ("min_user_share", self.min_user_share),
        ] {
            if !(0.0..=1.0).contains(&share) {
                return invalid(format!("{} must be within [0, 1], got {}", name, share));
            }
        }
        if self.min_user_share > self.max_user_share {
            return invalid(format!(
                "min_user_share {} exceeds max_user_share {}",
                self.min_user_share, self.max_user_share
            ));
        }
        if !self.min_price.is_finite() || !self.max_price.is_finite() {
            return invalid("price bounds must be finite".to_string());
        }
        if self.min_price >= self.max_price {
            return invalid(format!(
                "min_price {} must be below max_price {}",
                self.min_price, self.max_price
            ));
        }
        if self.take_n_popular == 0 {
            return invalid("take_n_popular must be positive".to_string());
        }
        Ok(())
    }
}

/// What the postfilter does with a candidate whose category is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCategoryPolicy {
    /// Fail with `BasketError::MissingCategory`.
    #[default]
    Reject,
    /// Give the item a category of its own, so it always counts as new.
    Distinct,
    /// Drop the item from the candidate pool.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostfilterConfig {
    /// Exact length of every post-filtered list.
    pub n: usize,
    pub missing_category: MissingCategoryPolicy,
}

impl Default for PostfilterConfig {
    fn default() -> Self {
        Self {
            n: thresholds::RECOMMENDATIONS_PER_USER,
            missing_category: MissingCategoryPolicy::default(),
        }
    }
}

impl PostfilterConfig {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    pub fn with_missing_category(mut self, policy: MissingCategoryPolicy) -> Self {
        self.missing_category = policy;
        self
    }

    pub fn from_json(json: &str) -> BasketResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BasketResult<()> {
        if self.n == 0 {
            return invalid("n must be positive".to_string());
        }
        Ok(())
    }
}

fn invalid(reason: String) -> BasketResult<()> {
    log::warn!("rejecting filter config: {}", reason);
    Err(BasketError::InvalidConfig(reason))
}
