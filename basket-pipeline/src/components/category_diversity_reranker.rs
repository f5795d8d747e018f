use std::collections::HashSet;
use std::sync::Arc;

use basket_core::{
    BasketError, BasketResult, ItemCatalog, ItemId, MissingCategoryPolicy, PostfilterConfig,
};

/// Re-ranks a candidate list so the head covers as many categories as
/// possible, then pads or truncates to exactly `n` items.
///
/// 1. Duplicates are dropped, first occurrence wins.
/// 2. Walking in rank order, the first item of each category goes to the
///    diverse list; later items of a seen category go to the repeat list.
/// 3. The diverse list is padded from the repeat list (rank order kept)
///    or truncated to `n`.
///
/// Fewer than `n` usable distinct candidates is an error, never a short list.
pub struct CategoryDiversityReranker {
    catalog: Arc<ItemCatalog>,
    config: PostfilterConfig,
}

/// Category identity used for the "already seen" check.
#[derive(Debug, PartialEq, Eq, Hash)]
enum CategoryKey<'a> {
    Named(&'a str),
    /// An uncategorized item under `MissingCategoryPolicy::Distinct`.
    Own(ItemId),
}

impl CategoryDiversityReranker {
    pub fn new(catalog: Arc<ItemCatalog>, config: PostfilterConfig) -> BasketResult<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn config(&self) -> &PostfilterConfig {
        &self.config
    }

    pub fn rerank(&self, recommendations: &[ItemId]) -> BasketResult<Vec<ItemId>> {
        rerank_with(&self.catalog, &self.config, recommendations)
    }
}

pub(crate) fn rerank_with(
    catalog: &ItemCatalog,
    config: &PostfilterConfig,
    recommendations: &[ItemId],
) -> BasketResult<Vec<ItemId>> {
    let n = config.n;

    let mut seen = HashSet::new();
    let unique: Vec<ItemId> = recommendations
        .iter()
        .copied()
        .filter(|item| seen.insert(*item))
        .collect();

    let mut used: HashSet<CategoryKey<'_>> = HashSet::new();
    let mut diverse = Vec::with_capacity(n.min(unique.len()));
    let mut repeats = Vec::new();

    for item in unique {
        let key = match catalog.category(item) {
            Some(category) => CategoryKey::Named(category),
            None => match config.missing_category {
                MissingCategoryPolicy::Reject => {
                    return Err(BasketError::MissingCategory(item));
                }
                MissingCategoryPolicy::Distinct => CategoryKey::Own(item),
                MissingCategoryPolicy::Skip => {
                    log::warn!("skipping uncategorized candidate item={}", item);
                    continue;
                }
            },
        };
        if used.insert(key) {
            diverse.push(item);
        } else {
            repeats.push(item);
        }
    }

    let available = diverse.len() + repeats.len();
    let mut selected = diverse;
    if selected.len() < n {
        let missing = n - selected.len();
        selected.extend(repeats.into_iter().take(missing));
    } else {
        selected.truncate(n);
    }

    if selected.len() != n {
        return Err(BasketError::InsufficientCandidates {
            requested: n,
            available,
        });
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::ItemFeatures;

    fn catalog(rows: &[(u64, &str)]) -> Arc<ItemCatalog> {
        let features: Vec<ItemFeatures> = rows
            .iter()
            .map(|&(item_id, category)| ItemFeatures {
                item_id,
                department: Some("GROCERY".into()),
                sub_commodity_desc: Some(category.into()),
            })
            .collect();
        Arc::new(ItemCatalog::new(&features))
    }

    fn ids(raw: &[u64]) -> Vec<ItemId> {
        raw.iter().map(|&id| ItemId::Known(id)).collect()
    }

    #[test]
    fn pads_with_repeated_categories() {
        let reranker = CategoryDiversityReranker::new(
            catalog(&[(10, "A"), (20, "A"), (30, "B")]),
            PostfilterConfig::new(3),
        )
        .unwrap();
        let result = reranker.rerank(&ids(&[10, 20, 10, 30])).unwrap();
        assert_eq!(result, ids(&[10, 30, 20]));
    }

    #[test]
    fn truncates_when_enough_categories() {
        let reranker = CategoryDiversityReranker::new(
            catalog(&[(1, "A"), (2, "B"), (3, "A"), (4, "C"), (5, "D")]),
            PostfilterConfig::new(2),
        )
        .unwrap();
        assert_eq!(reranker.rerank(&ids(&[1, 3, 2, 4, 5])).unwrap(), ids(&[1, 2]));
    }

    #[test]
    fn too_few_candidates_is_an_error() {
        let reranker =
            CategoryDiversityReranker::new(catalog(&[(1, "A"), (2, "B")]), PostfilterConfig::new(3))
                .unwrap();
        let err = reranker.rerank(&ids(&[1, 2, 1, 2])).unwrap_err();
        assert!(matches!(
            err,
            BasketError::InsufficientCandidates {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn oversized_n_is_an_error_not_an_allocation() {
        let config = PostfilterConfig::from_json(r#"{"n": 18446744073709551615}"#).unwrap();
        let reranker = CategoryDiversityReranker::new(catalog(&[(1, "A")]), config).unwrap();
        let err = reranker.rerank(&ids(&[1])).unwrap_err();
        assert!(matches!(
            err,
            BasketError::InsufficientCandidates {
                requested: usize::MAX,
                available: 1
            }
        ));
    }

    #[test]
    fn reject_policy_names_the_item() {
        let reranker =
            CategoryDiversityReranker::new(catalog(&[(1, "A")]), PostfilterConfig::new(1)).unwrap();
        let err = reranker.rerank(&ids(&[1, 7])).unwrap_err();
        assert!(matches!(err, BasketError::MissingCategory(ItemId::Known(7))));
    }

    #[test]
    fn distinct_policy_treats_each_unknown_as_new() {
        let config = PostfilterConfig::new(3).with_missing_category(MissingCategoryPolicy::Distinct);
        let reranker =
            CategoryDiversityReranker::new(catalog(&[(1, "A"), (2, "A")]), config).unwrap();
        let mut candidates = ids(&[1, 2, 8]);
        candidates.push(ItemId::Other);
        let result = reranker.rerank(&candidates).unwrap();
        assert_eq!(result, vec![ItemId::Known(1), ItemId::Known(8), ItemId::Other]);
    }

    #[test]
    fn skip_policy_drops_unknowns() {
        let config = PostfilterConfig::new(2).with_missing_category(MissingCategoryPolicy::Skip);
        let reranker =
            CategoryDiversityReranker::new(catalog(&[(1, "A"), (2, "A")]), config).unwrap();
        assert_eq!(reranker.rerank(&ids(&[9, 1, 2])).unwrap(), ids(&[1, 2]));
    }

    #[test]
    fn zero_length_config_is_rejected() {
        let result = CategoryDiversityReranker::new(catalog(&[]), PostfilterConfig::new(0));
        assert!(matches!(result, Err(BasketError::InvalidConfig(_))));
    }
}
