use rayon::prelude::*;

use basket_core::{BasketResult, ItemCatalog, ItemId, PostfilterConfig};

use crate::components::category_diversity_reranker::rerank_with;

/// Category-diversified list of exactly `config.n` items.
pub fn postfilter_items(
    recommendations: &[ItemId],
    catalog: &ItemCatalog,
    config: &PostfilterConfig,
) -> BasketResult<Vec<ItemId>> {
    config.validate()?;
    rerank_with(catalog, config, recommendations)
}

/// Post-filter many users' candidate lists in parallel.
///
/// Results come back in input order, one per list; a list that cannot be
/// filled fails on its own without affecting the others.
pub fn postfilter_batch(
    recommendations: &[Vec<ItemId>],
    catalog: &ItemCatalog,
    config: &PostfilterConfig,
) -> BasketResult<Vec<BasketResult<Vec<ItemId>>>> {
    config.validate()?;

    let results: Vec<BasketResult<Vec<ItemId>>> = recommendations
        .par_iter()
        .map(|candidates| rerank_with(catalog, config, candidates))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        log::warn!(
            "postfilter batch: {} of {} candidate lists could not be filled",
            failed,
            results.len()
        );
    }
    Ok(results)
}
