//! Catalog store: load-once, read-many collection of animation records.

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::category::Category;
use crate::error::CatalogError;
use crate::filter::{CatalogFilter, CategoryFilter};
use crate::record::AnimationRecord;
use crate::Result;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let raw = include_str!("../data/catalog.json");
    Catalog::from_json(raw).expect("embedded catalog should parse")
});

/// Immutable record collection with an id index.
///
/// Declared order is preserved by every query and defines default browsing order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<AnimationRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The compiled-in catalog shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build from a JSON array of records.
    pub fn from_json(s: &str) -> Result<Self> {
        let records: Vec<AnimationRecord> = serde_json::from_str(s)?;
        Self::from_records(records)
    }

    /// Build from records, rejecting duplicate ids.
    pub fn from_records(records: Vec<AnimationRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            if index.insert(r.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId { id: r.id.clone() });
            }
        }
        tracing::debug!(records = records.len(), "catalog loaded");
        Ok(Self { records, index })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn all_records(&self) -> &[AnimationRecord] {
        &self.records
    }

    /// Fixed category enumeration, independent of which categories have records.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn by_category(&self, category: Category) -> Vec<&AnimationRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Lookup by display name. Unknown names yield an empty result.
    pub fn by_category_name(&self, name: &str) -> Vec<&AnimationRecord> {
        match name.parse::<Category>() {
            Ok(c) => self.by_category(c),
            Err(()) => Vec::new(),
        }
    }

    pub fn by_id(&self, id: &str) -> Result<&AnimationRecord> {
        self.index
            .get(id)
            .map(|&i| &self.records[i])
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// The query is trimmed first; an empty query matches nothing. Callers show
    /// the unfiltered or category view instead (see [`Catalog::filter`]).
    pub fn search(&self, query: &str) -> Vec<&AnimationRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.matches_lowered(&needle))
            .collect()
    }

    /// Browsing view: a non-empty query wins over the category selection.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&AnimationRecord> {
        if filter.has_query() {
            return self.search(&filter.query);
        }
        match filter.category {
            CategoryFilter::All => self.records.iter().collect(),
            CategoryFilter::Only(c) => self.by_category(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AnimationRecord;

    fn rec(id: &str, name: &str, category: Category, description: &str) -> AnimationRecord {
        AnimationRecord {
            id: id.into(),
            name: name.into(),
            category,
            description: description.into(),
            component: name.replace(' ', ""),
            code: format!("<{} />", name.replace(' ', "")),
            preview_type: None,
            props: Vec::new(),
        }
    }

    fn small() -> Catalog {
        Catalog::from_records(vec![
            rec("a", "Alpha", Category::Entrance, "first"),
            rec("b", "Beta", Category::Loop, "second"),
            rec("c", "Gamma", Category::Entrance, "third"),
        ])
        .unwrap()
    }

    #[test]
    fn builtin_catalog_loads() {
        let cat = Catalog::builtin();
        assert!(!cat.is_empty());
        assert!(cat.by_id("fade-in-up").is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_records(vec![
            rec("a", "Alpha", Category::Entrance, ""),
            rec("a", "Again", Category::Exit, ""),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { id: "a".into() });
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let json = r#"[{"id":"x","name":"X","category":"Sparkles","description":"","component":"X","code":""}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn by_category_preserves_order() {
        let cat = small();
        let ids: Vec<_> = cat
            .by_category(Category::Entrance)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(cat.by_category(Category::Modals).is_empty());
        assert!(cat.by_category_name("Nope").is_empty());
        assert_eq!(cat.by_category_name("Loop").len(), 1);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let cat = small();
        assert!(cat.search("").is_empty());
        assert!(cat.search("   ").is_empty());
    }

    #[test]
    fn search_trims_and_ignores_case() {
        let cat = small();
        let ids: Vec<_> = cat.search("  ENTR ").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(cat.search("SECOND").len(), 1);
    }

    #[test]
    fn filter_prefers_query_over_category() {
        let cat = small();
        let f = CatalogFilter {
            category: CategoryFilter::Only(Category::Loop),
            query: "alpha".into(),
        };
        let ids: Vec<_> = cat.filter(&f).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a"]);

        let f = CatalogFilter {
            category: CategoryFilter::Only(Category::Loop),
            query: " ".into(),
        };
        assert_eq!(cat.filter(&f).len(), 1);
        assert_eq!(cat.filter(&CatalogFilter::default()).len(), 3);
    }
}
