use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::CatalogError;
use crate::models::{Category, TipRecord};

/// Immutable mapping from category id to its ordered tips, plus the ordered
/// category registry that drives the tab layout.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    categories: Vec<Category>,
    tips: HashMap<String, Vec<TipRecord>>,
}

impl ContentCatalog {
    /// Assemble and validate a catalog. Categories without tips get an empty
    /// entry so every registered id resolves.
    pub fn new<I>(categories: Vec<Category>, tips: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, Vec<TipRecord>)>,
    {
        if categories.is_empty() {
            return Err(CatalogError::EmptyRegistry);
        }

        let mut registered = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !registered.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut by_category: HashMap<String, Vec<TipRecord>> = HashMap::new();
        let mut seen_ids: HashMap<u32, String> = HashMap::new();
        for (category_id, records) in tips {
            if !registered.contains(category_id.as_str()) {
                return Err(CatalogError::UnknownCategory(category_id));
            }
            for record in &records {
                if let Some(first) = seen_ids.insert(record.id, category_id.clone()) {
                    return Err(CatalogError::DuplicateTipId {
                        id: record.id,
                        first,
                        second: category_id,
                    });
                }
            }
            by_category.entry(category_id).or_default().extend(records);
        }

        for category in &categories {
            by_category.entry(category.id.clone()).or_default();
        }

        debug!(
            categories = categories.len(),
            tips = seen_ids.len(),
            "content catalog loaded"
        );

        Ok(Self {
            categories,
            tips: by_category,
        })
    }

    /// Registry order, exactly as supplied.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category selected when a session starts.
    pub fn default_category(&self) -> &Category {
        // `new` rejects an empty registry.
        &self.categories[0]
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.tips.contains_key(category_id)
    }

    /// Position of a category within the registry.
    pub fn position(&self, category_id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == category_id)
    }

    /// Tips for a category in catalog order. Unknown ids yield an empty
    /// slice so a filter pass never fails mid-transition.
    pub fn get_tips(&self, category_id: &str) -> &[TipRecord] {
        self.tips
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn tip_count(&self) -> usize {
        self.tips.values().map(Vec::len).sum()
    }
}

/// Build the catalog shipped with the site.
pub fn seed_catalog() -> Result<ContentCatalog, CatalogError> {
    let categories = vec![
        Category::new("nutrition", "Nutrition"),
        Category::new("fitness", "Fitness"),
        Category::new("mentalHealth", "Mental Health"),
        Category::new("sleep", "Sleep"),
    ];

    let tips = vec![
        (
            "nutrition".to_string(),
            vec![
                TipRecord::new(
                    1,
                    "Balanced Diet",
                    "Aim for a balanced diet with a variety of fruits, vegetables, whole grains, and lean proteins.",
                ),
                TipRecord::new(
                    2,
                    "Portion Control",
                    "Practice portion control to maintain a healthy weight and improve digestion.",
                ),
                TipRecord::new(
                    3,
                    "Hydration",
                    "Stay hydrated by drinking at least 8 glasses of water daily.",
                ),
            ],
        ),
        (
            "fitness".to_string(),
            vec![
                TipRecord::new(
                    4,
                    "Regular Exercise",
                    "Aim for at least 150 minutes of moderate-intensity exercise per week.",
                ),
                TipRecord::new(
                    5,
                    "Strength Training",
                    "Incorporate strength training exercises at least twice a week to build muscle and boost metabolism.",
                ),
                TipRecord::new(
                    6,
                    "Active Lifestyle",
                    "Find ways to stay active throughout the day, like taking the stairs or going for short walks.",
                ),
            ],
        ),
        (
            "mentalHealth".to_string(),
            vec![
                TipRecord::new(
                    7,
                    "Mindfulness",
                    "Practice mindfulness or meditation to reduce stress and improve mental clarity.",
                ),
                TipRecord::new(
                    8,
                    "Social Connections",
                    "Maintain strong social connections to support your mental well-being.",
                ),
                TipRecord::new(
                    9,
                    "Stress Management",
                    "Develop healthy coping mechanisms for stress, such as deep breathing or journaling.",
                ),
            ],
        ),
        (
            "sleep".to_string(),
            vec![
                TipRecord::new(
                    10,
                    "Sleep Schedule",
                    "Maintain a consistent sleep schedule, even on weekends.",
                ),
                TipRecord::new(
                    11,
                    "Bedtime Routine",
                    "Create a relaxing bedtime routine to signal your body it's time to sleep.",
                ),
                TipRecord::new(
                    12,
                    "Sleep Environment",
                    "Optimize your sleep environment by keeping it cool, dark, and quiet.",
                ),
            ],
        ),
    ];

    ContentCatalog::new(categories, tips)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(ids: &[&str]) -> Vec<Category> {
        ids.iter().map(|id| Category::new(*id, *id)).collect()
    }

    #[test]
    fn seed_catalog_keeps_registry_order() {
        let catalog = seed_catalog().unwrap();
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["nutrition", "fitness", "mentalHealth", "sleep"]);
        assert_eq!(catalog.default_category().id, "nutrition");
        assert_eq!(catalog.tip_count(), 12);
    }

    #[test]
    fn unknown_category_yields_empty_slice() {
        let catalog = seed_catalog().unwrap();
        assert!(catalog.get_tips("doesNotExist").is_empty());
        assert!(!catalog.contains("doesNotExist"));
    }

    #[test]
    fn registered_category_without_tips_gets_empty_entry() {
        let catalog = ContentCatalog::new(
            registry(&["a", "b"]),
            vec![("a".to_string(), vec![TipRecord::new(1, "t", "c")])],
        )
        .unwrap();
        assert!(catalog.contains("b"));
        assert!(catalog.get_tips("b").is_empty());
    }

    #[test]
    fn rejects_empty_registry() {
        let err = ContentCatalog::new(Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::EmptyRegistry);
    }

    #[test]
    fn rejects_duplicate_category() {
        let err = ContentCatalog::new(registry(&["a", "a"]), Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCategory("a".to_string()));
    }

    #[test]
    fn rejects_tips_for_unregistered_category() {
        let err = ContentCatalog::new(
            registry(&["a"]),
            vec![("z".to_string(), vec![TipRecord::new(1, "t", "c")])],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::UnknownCategory("z".to_string()));
    }

    #[test]
    fn tip_ids_are_unique_across_categories() {
        let err = ContentCatalog::new(
            registry(&["a", "b"]),
            vec![
                ("a".to_string(), vec![TipRecord::new(7, "t", "c")]),
                ("b".to_string(), vec![TipRecord::new(7, "u", "d")]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateTipId {
                id: 7,
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }
}
