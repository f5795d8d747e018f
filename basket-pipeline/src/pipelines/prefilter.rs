use std::collections::HashSet;

use basket_core::popularity::quantity_sold;
use basket_core::{
    BasketError, BasketResult, ItemCatalog, ItemId, PrefilterConfig, Purchase, Transaction,
};

use crate::components::long_tail_relabeler::LongTailRelabeler;
use crate::components::price_band_filter::PriceBandFilter;
use crate::components::rare_department_filter::RareDepartmentFilter;
use crate::components::stale_item_filter::StaleItemFilter;
use crate::components::top_sellers_selector::TopSellersSelector;
use crate::components::user_share_filter::UserShareFilter;
use crate::components::zero_quantity_filter::ZeroQuantityFilter;
use crate::filter::Filter;
use crate::selector::Selector;
use crate::types::{PrefilterOutput, PrefilterRequest, StageReport};

/// The catalog-narrowing prefilter.
///
/// Pipeline flow, each stage seeing only what the previous kept:
/// 1. ZeroQuantityFilter drops zero-quantity rows
/// 2. UserShareFilter drops over-popular and too-rare items
/// 3. StaleItemFilter drops items not sold in the trailing window
/// 4. RareDepartmentFilter drops items of small departments
/// 5. PriceBandFilter drops rows priced outside the promotion band
/// 6. TopSellersSelector ranks items by units sold and keeps the top N
/// 7. LongTailRelabeler relabels every other item to `ItemId::Other`
pub struct PrefilterPipeline {
    filters: Vec<Box<dyn Filter<PrefilterRequest, Purchase>>>,
    selector: TopSellersSelector,
    relabeler: LongTailRelabeler,
}

impl PrefilterPipeline {
    pub fn new(catalog: &ItemCatalog, config: &PrefilterConfig) -> BasketResult<Self> {
        config.validate()?;

        let filters: Vec<Box<dyn Filter<PrefilterRequest, Purchase>>> = vec![
            Box::new(ZeroQuantityFilter),
            Box::new(UserShareFilter::from(config)),
            Box::new(StaleItemFilter::new(config.purchases_weeks)),
            Box::new(RareDepartmentFilter::new(catalog, config.min_department_items)),
            Box::new(PriceBandFilter::from(config)),
        ];

        Ok(Self {
            filters,
            selector: TopSellersSelector::new(config.take_n_popular),
            relabeler: LongTailRelabeler,
        })
    }

    pub fn filters(&self) -> &[Box<dyn Filter<PrefilterRequest, Purchase>>] {
        &self.filters
    }

    pub fn run(
        &self,
        request: &PrefilterRequest,
        transactions: &[Transaction],
    ) -> BasketResult<PrefilterOutput> {
        let purchases = transactions.iter().map(Purchase::from).collect();
        self.run_purchases(request, purchases)
    }

    /// Run over rows that are already priced, e.g. a previous run's output.
    pub fn run_purchases(
        &self,
        request: &PrefilterRequest,
        purchases: Vec<Purchase>,
    ) -> BasketResult<PrefilterOutput> {
        let input_rows = purchases.len();
        let mut stages = Vec::with_capacity(self.filters.len() + 1);
        let mut candidates = purchases;

        for filter in self.filters.iter().filter(|f| f.enable(request)) {
            let result = filter
                .filter(request, candidates)
                .map_err(|e| BasketError::StageFailed {
                    stage: filter.name().to_string(),
                    reason: e.to_string(),
                })?;
            log::debug!(
                "request_id={} stage={} kept={} removed={}",
                request.request_id,
                filter.name(),
                result.kept.len(),
                result.removed.len()
            );
            stages.push(StageReport {
                stage: filter.name().to_string(),
                kept: result.kept.len(),
                removed: result.removed.len(),
            });
            candidates = result.kept;
        }

        let retained_items: Vec<ItemId> = self
            .selector
            .select(quantity_sold(&candidates))
            .into_iter()
            .map(|sales| sales.item)
            .collect();
        let retained: HashSet<ItemId> = retained_items.iter().copied().collect();

        let (purchases, relabeled) = self.relabeler.relabel(&retained, candidates);
        stages.push(StageReport {
            stage: self.selector.name().to_string(),
            kept: purchases.len() - relabeled,
            removed: relabeled,
        });

        log::info!(
            "request_id={} prefilter rows_in={} rows_out={} retained_items={} relabeled={}",
            request.request_id,
            input_rows,
            purchases.len(),
            retained_items.len(),
            relabeled
        );

        Ok(PrefilterOutput {
            purchases,
            retained_items,
            relabeled,
            stages,
        })
    }
}

/// One-shot prefilter over a raw transaction log.
pub fn prefilter_items(
    transactions: &[Transaction],
    catalog: &ItemCatalog,
    config: &PrefilterConfig,
) -> BasketResult<Vec<Purchase>> {
    let pipeline = PrefilterPipeline::new(catalog, config)?;
    Ok(pipeline
        .run(&PrefilterRequest::default(), transactions)?
        .purchases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterResult;

    struct RejectingFilter;

    impl Filter<PrefilterRequest, Purchase> for RejectingFilter {
        fn filter(
            &self,
            _query: &PrefilterRequest,
            _candidates: Vec<Purchase>,
        ) -> BasketResult<FilterResult<Purchase>> {
            Err(BasketError::InvalidConfig("rejected".into()))
        }
    }

    fn open_config() -> PrefilterConfig {
        PrefilterConfig {
            max_user_share: 1.0,
            min_user_share: 0.0,
            min_department_items: 0,
            ..PrefilterConfig::default()
        }
    }

    fn tx(user_id: u64, item_id: u64, quantity: i64, sales_value: f64) -> Transaction {
        Transaction {
            user_id,
            item_id,
            quantity,
            sales_value,
            week_no: 10,
        }
    }

    #[test]
    fn stage_reports_follow_rule_order() {
        let pipeline = PrefilterPipeline::new(&ItemCatalog::default(), &open_config()).unwrap();
        let output = pipeline
            .run(&PrefilterRequest::new("t-1"), &[tx(1, 1, 1, 2.0), tx(1, 2, 0, 2.0)])
            .unwrap();
        let names: Vec<&str> = output.stages.iter().map(|s| s.stage.as_str()).collect();
        // RareDepartmentFilter is disabled: the catalog has no departments
        assert_eq!(
            names,
            vec![
                "ZeroQuantityFilter",
                "UserShareFilter",
                "StaleItemFilter",
                "PriceBandFilter",
                "TopSellersSelector"
            ]
        );
        assert_eq!(output.stages[0].removed, 1);
        assert_eq!(output.purchases.len(), 1);
    }

    #[test]
    fn long_tail_is_relabeled_not_dropped() {
        let config = PrefilterConfig {
            take_n_popular: 1,
            ..open_config()
        };
        let pipeline = PrefilterPipeline::new(&ItemCatalog::default(), &config).unwrap();
        let output = pipeline
            .run(
                &PrefilterRequest::default(),
                &[tx(1, 1, 1, 2.0), tx(2, 2, 3, 6.0), tx(3, 3, 1, 2.0)],
            )
            .unwrap();
        assert_eq!(output.retained_items, vec![ItemId::Known(2)]);
        assert_eq!(output.relabeled, 2);
        let items: Vec<ItemId> = output.purchases.iter().map(|p| p.item).collect();
        assert_eq!(items, vec![ItemId::Other, ItemId::Known(2), ItemId::Other]);
    }

    #[test]
    fn filters_are_wired_in_rule_order() {
        let pipeline = PrefilterPipeline::new(&ItemCatalog::default(), &open_config()).unwrap();
        let names: Vec<&str> = pipeline.filters().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "ZeroQuantityFilter",
                "UserShareFilter",
                "StaleItemFilter",
                "RareDepartmentFilter",
                "PriceBandFilter"
            ]
        );
    }

    #[test]
    fn failing_stage_is_reported_by_name() {
        let mut pipeline = PrefilterPipeline::new(&ItemCatalog::default(), &open_config()).unwrap();
        pipeline.filters.insert(1, Box::new(RejectingFilter));
        let err = pipeline
            .run(&PrefilterRequest::default(), &[tx(1, 1, 1, 2.0)])
            .unwrap_err();
        match err {
            BasketError::StageFailed { stage, reason } => {
                assert_eq!(stage, "RejectingFilter");
                assert!(reason.contains("rejected"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = PrefilterConfig {
            take_n_popular: 0,
            ..PrefilterConfig::default()
        };
        assert!(PrefilterPipeline::new(&ItemCatalog::default(), &config).is_err());
    }
}
