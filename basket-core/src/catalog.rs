//! Item metadata and the lookups the filters need from it.
//!
//! Expected columns:
//!   item_id, department, sub_commodity_desc
//!
//! The same item may appear on several rows (e.g. after a category join).
//! Category lookup takes the first row that carries one; department sizes
//! count distinct items.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// One row of item metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFeatures {
    pub item_id: u64,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub sub_commodity_desc: Option<String>,
}

/// Indexed item metadata.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    categories: HashMap<u64, String>,
    departments: HashMap<String, HashSet<u64>>,
    rows: usize,
}

impl ItemCatalog {
    pub fn new(rows: &[ItemFeatures]) -> Self {
        let mut categories = HashMap::new();
        let mut departments: HashMap<String, HashSet<u64>> = HashMap::new();

        for row in rows {
            if let Some(category) = non_blank(&row.sub_commodity_desc) {
                categories
                    .entry(row.item_id)
                    .or_insert_with(|| category.to_string());
            }
            if let Some(department) = non_blank(&row.department) {
                departments
                    .entry(department.to_string())
                    .or_default()
                    .insert(row.item_id);
            }
        }

        Self {
            categories,
            departments,
            rows: rows.len(),
        }
    }

    /// Number of metadata rows the catalog was built from.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Category (`sub_commodity_desc`) of an item. `Other` has none.
    pub fn category(&self, item: ItemId) -> Option<&str> {
        match item {
            ItemId::Known(id) => self.categories.get(&id).map(String::as_str),
            ItemId::Other => None,
        }
    }

    /// Distinct item count per department, largest first (ties by name).
    pub fn department_sizes(&self) -> Vec<(&str, usize)> {
        let mut sizes: Vec<(&str, usize)> = self
            .departments
            .iter()
            .map(|(name, items)| (name.as_str(), items.len()))
            .collect();
        sizes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sizes
    }

    /// Departments holding fewer than `min_items` distinct items.
    pub fn rare_departments(&self, min_items: usize) -> HashSet<&str> {
        self.departments
            .iter()
            .filter(|(_, items)| items.len() < min_items)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Every item listed under at least one rare department.
    pub fn items_in_rare_departments(&self, min_items: usize) -> HashSet<ItemId> {
        self.departments
            .values()
            .filter(|items| items.len() < min_items)
            .flat_map(|items| items.iter().map(|&id| ItemId::Known(id)))
            .collect()
    }
}

impl From<Vec<ItemFeatures>> for ItemCatalog {
    fn from(rows: Vec<ItemFeatures>) -> Self {
        Self::new(&rows)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
item_id,department,sub_commodity_desc
25671,GROCERY,FRZN ICE
26081,MISC. TRANS.,NO SUBCOMMODITY DESCRIPTION
26093,PASTRY,BREAD:ITALIAN/FRENCH
26190,GROCERY,FRUIT - SHELF STABLE
26190,GROCERY,VEGETABLES - SHELF STABLE
26355,GROCERY,
26426,,SPICES & SEASONINGS
";

    fn catalog() -> ItemCatalog {
        let rows: Vec<ItemFeatures> = csv::Reader::from_reader(SAMPLE_CSV.as_bytes())
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        ItemCatalog::new(&rows)
    }

    #[test]
    fn category_takes_first_match() {
        let catalog = catalog();
        assert_eq!(catalog.category(ItemId::Known(26190)), Some("FRUIT - SHELF STABLE"));
        assert_eq!(catalog.category(ItemId::Known(26355)), None);
        assert_eq!(catalog.category(ItemId::Known(1)), None);
        assert_eq!(catalog.category(ItemId::Other), None);
    }

    #[test]
    fn department_sizes_count_distinct_items() {
        let catalog = catalog();
        let sizes = catalog.department_sizes();
        assert_eq!(sizes[0], ("GROCERY", 3));
        assert_eq!(sizes.len(), 3);
    }

    #[test]
    fn rare_department_items() {
        let catalog = catalog();
        let rare = catalog.rare_departments(2);
        assert!(rare.contains("PASTRY"));
        assert!(!rare.contains("GROCERY"));

        let items = catalog.items_in_rare_departments(2);
        assert!(items.contains(&ItemId::Known(26093)));
        assert!(items.contains(&ItemId::Known(26081)));
        assert!(!items.contains(&ItemId::Known(25671)));
        // blank department is ignored, not treated as a department
        assert!(!items.contains(&ItemId::Known(26426)));
    }

    #[test]
    fn empty_catalog_has_no_rare_departments() {
        let catalog = ItemCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.items_in_rare_departments(150).is_empty());
    }
}
