use animkit_catalog_core::{
    result_count_label, AnimationRecord, Catalog, CatalogError, CatalogFilter, Category,
    CategoryFilter, PreviewType,
};
use animkit_test_fixtures::catalogs;

fn sample() -> Catalog {
    Catalog::from_json(&catalogs::json("sample").unwrap()).unwrap()
}

fn naive_match(r: &AnimationRecord, q: &str) -> bool {
    let q = q.trim().to_lowercase();
    [r.name.as_str(), r.description.as_str(), r.category.name()]
        .iter()
        .any(|field| field.to_lowercase().contains(&q))
}

#[test]
fn fade_in_up_scenario() {
    let cat = sample();
    let hits: Vec<_> = cat.search("fade").iter().map(|r| r.id.as_str()).collect();
    assert!(hits.contains(&"fade-in-up"));
    assert!(cat.search("ZZZ").is_empty());
    assert!(cat
        .by_category(Category::Entrance)
        .iter()
        .any(|r| r.id == "fade-in-up"));
    assert_eq!(
        cat.by_id("nonexistent"),
        Err(CatalogError::NotFound {
            id: "nonexistent".into()
        })
    );
}

#[test]
fn by_id_round_trips_for_every_builtin_record() {
    let cat = Catalog::builtin();
    for r in cat.all_records() {
        assert_eq!(cat.by_id(&r.id).unwrap(), r);
    }
}

#[test]
fn by_category_only_returns_matching_catalog_records() {
    let cat = Catalog::builtin();
    for &c in cat.categories() {
        for r in cat.by_category(c) {
            assert_eq!(r.category, c);
            assert!(cat.by_id(&r.id).is_ok());
        }
    }
}

#[test]
fn categories_are_fixed_even_without_records() {
    let cat = sample();
    assert_eq!(cat.categories().len(), 14);
    assert_eq!(cat.categories()[0], Category::Entrance);
    assert_eq!(cat.categories()[11], Category::PageTransitions);
    assert!(cat.by_category(Category::Forms).is_empty());
}

#[test]
fn search_is_sound_and_complete() {
    let cat = Catalog::builtin();
    for q in ["fade", "IN", "loop", "hover", "page trans", "spinner", "e", "xyz"] {
        let got: Vec<_> = cat.search(q).iter().map(|r| r.id.clone()).collect();
        let want: Vec<_> = cat
            .all_records()
            .iter()
            .filter(|r| naive_match(r, q))
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(got, want, "query {q:?}");
    }
}

#[test]
fn all_records_order_is_stable() {
    let cat = Catalog::builtin();
    let first: Vec<_> = cat.all_records().iter().map(|r| &r.id).collect();
    let second: Vec<_> = cat.all_records().iter().map(|r| &r.id).collect();
    assert_eq!(first, second);
    assert_eq!(first[0], "fade-in-up");
}

#[test]
fn browsing_filter_matches_page_behaviour() {
    let cat = sample();
    let mut f = CatalogFilter::default();
    assert_eq!(cat.filter(&f).len(), 4);

    f.select(CategoryFilter::Only(Category::PageTransitions));
    let ids: Vec<_> = cat.filter(&f).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["page-fade"]);

    f.set_query("cursor");
    let ids: Vec<_> = cat.filter(&f).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["magnetic"]);
    assert_eq!(result_count_label(ids.len()), "1 animation found");
}

#[test]
fn broken_fixtures_are_rejected() {
    assert_eq!(
        Catalog::from_json(&catalogs::json("duplicate-id").unwrap()).unwrap_err(),
        CatalogError::DuplicateId { id: "pulse".into() }
    );
    assert!(matches!(
        Catalog::from_json(&catalogs::json("unknown-category").unwrap()),
        Err(CatalogError::Parse { .. })
    ));
}

#[test]
fn builtin_preview_types_and_user_driven_records() {
    let cat = Catalog::builtin();
    let magnetic = cat.by_id("magnetic").unwrap();
    assert_eq!(magnetic.preview(), PreviewType::Button);
    assert!(magnetic.is_user_driven());
    assert!(cat.by_id("hover-lift").unwrap().is_user_driven());
    assert!(!cat.by_id("pulse").unwrap().is_user_driven());
    assert_eq!(cat.by_id("spinner").unwrap().code, "<Spinner size=\"md\" color=\"primary\" />");
}
