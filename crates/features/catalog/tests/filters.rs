mod fixtures;

use fixtures::{furniture, names, seeded};
use pcat_catalog::{FilterPipeline, apply_filters};
use proptest::prelude::*;

#[test]
fn empty_parameters_return_everything_unchanged() {
    let enriched = seeded().enriched();
    assert_eq!(apply_filters(&enriched, "", ""), enriched);
}

#[test]
fn owner_filter_keeps_only_exact_name() {
    let enriched = seeded().enriched();
    let result = apply_filters(&enriched, "Max", "");

    assert_eq!(names(&result), ["Jacket", "Sweater"]);
    assert!(result.iter().all(|p| p.user_name() == Some("Max")));
}

#[test]
fn owner_filter_excludes_products_without_owner() {
    let enriched = furniture().enriched();
    let result = apply_filters(&enriched, "Max", "");

    assert_eq!(names(&result), ["Table"]);
}

#[test]
fn owner_without_products_yields_empty_result() {
    let enriched = seeded().enriched();
    assert!(apply_filters(&enriched, "John", "").is_empty());
    assert!(apply_filters(&enriched, "Nobody", "").is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let enriched = furniture().enriched();
    let result = apply_filters(&enriched, "", "able");

    assert_eq!(names(&result), ["Table", "Side table"]);
    assert!(!names(&result).contains(&"Chair"));
    assert_eq!(apply_filters(&enriched, "", "TABLE"), result);
}

#[test]
fn filters_compose_in_order() {
    let enriched = seeded().enriched();

    assert_eq!(names(&apply_filters(&enriched, "", "s")), ["Eggs", "Sugar", "Sausage", "Sweater"]);
    assert_eq!(names(&apply_filters(&enriched, "Max", "s")), ["Sweater"]);
    assert_eq!(names(&apply_filters(&enriched, "Anna", "sa")), ["Sausage"]);
}

#[test]
fn pipeline_matches_free_function() {
    let enriched = seeded().enriched();
    let pipeline = FilterPipeline::new("Anna", "e");

    assert_eq!(pipeline.apply(&enriched), apply_filters(&enriched, "Anna", "e"));
}

proptest! {
    #[test]
    fn filtering_is_idempotent(owner in prop_oneof![Just(""), Just("Max"), Just("Anna"), Just("Roma")], query in "[a-zA-Z ]{0,3}") {
        let enriched = seeded().enriched();
        let once = apply_filters(&enriched, owner, &query);
        let twice = apply_filters(&once, owner, &query);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn result_is_an_ordered_subsequence(query in "[a-z]{0,2}") {
        let enriched = seeded().enriched();
        let result = apply_filters(&enriched, "", &query);

        let mut source = enriched.iter();
        for kept in &result {
            prop_assert!(source.any(|p| p == kept));
        }
    }
}
