use super::*;
use crate::net::types::UnitType;

fn record(id: i64, name: &str, calories: f64) -> IngredientRecord {
    IngredientRecord {
        id,
        name: name.to_owned(),
        calories,
        protein: 3.0,
        fat: 2.0,
        carbohydrates: 5.0,
        serving_size_grams: 0.0,
        serving_calories: 0.0,
        serving_protein: 0.0,
        serving_fat: 0.0,
        serving_carbohydrates: 0.0,
        added_by_image: false,
        image_base64: None,
        unit_type: UnitType::Grams,
    }
}

fn page(records: Vec<IngredientRecord>, total_count: u64, total_pages: u32, current_page: u32) -> IngredientListResponse {
    IngredientListResponse {
        ingredients: records,
        total_count,
        total_pages,
        current_page,
        page_size: PAGE_SIZE,
    }
}

// =============================================================
// ListQuery
// =============================================================

#[test]
fn default_query_is_unfiltered_page_one() {
    let query = ListQuery::default();
    assert_eq!(query.search, "");
    assert_eq!(query.sort_by, None);
    assert!(!query.descending);
    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, 10);
}

#[test]
fn request_mirrors_query_term_and_page() {
    let mut state = IngredientsState::default();
    state.set_search_term("奶");
    state.set_page(2);
    let request = state.query.to_request();
    assert_eq!(request.name, "奶");
    assert_eq!(request.page, 2);
    assert_eq!(request.page_size, 10);
    assert!(!request.with_image);
}

#[test]
fn search_term_change_preserves_current_page() {
    let mut state = IngredientsState::default();
    state.set_page(3);
    state.set_search_term("豆");
    assert_eq!(state.query.page, 3);
}

// =============================================================
// Sort toggling
// =============================================================

#[test]
fn new_sort_field_starts_ascending() {
    let mut state = IngredientsState::default();
    state.toggle_sort(SortField::Calories);
    assert_eq!(state.query.sort_by, Some(SortField::Calories));
    assert!(!state.query.descending);
}

#[test]
fn same_field_toggles_direction() {
    let mut state = IngredientsState::default();
    state.toggle_sort(SortField::Name);
    state.toggle_sort(SortField::Name);
    assert!(state.query.descending);
    state.toggle_sort(SortField::Protein);
    assert_eq!(state.query.sort_by, Some(SortField::Protein));
    assert!(!state.query.descending);
}

#[test]
fn toggling_same_field_twice_restores_original_order() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(
        seq,
        page(vec![record(1, "b", 10.0), record(2, "a", 20.0), record(3, "c", 5.0)], 3, 1, 1),
    );

    state.toggle_sort(SortField::Calories);
    let ascending: Vec<i64> = state.sorted_rows().iter().map(|r| r.id).collect();
    assert_eq!(ascending, vec![3, 1, 2]);

    state.toggle_sort(SortField::Calories);
    state.toggle_sort(SortField::Calories);
    let again: Vec<i64> = state.sorted_rows().iter().map(|r| r.id).collect();
    assert_eq!(again, ascending);
}

#[test]
fn name_sort_is_case_insensitive() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(
        seq,
        page(vec![record(1, "Oat", 10.0), record(2, "almond", 20.0)], 2, 1, 1),
    );
    state.toggle_sort(SortField::Name);
    let names: Vec<String> = state.sorted_rows().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["almond", "Oat"]);
}

// =============================================================
// Page application
// =============================================================

#[test]
fn apply_page_replaces_rather_than_appends() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(seq, page(vec![record(1, "a", 1.0), record(2, "b", 2.0)], 2, 1, 1));

    let seq = state.begin_fetch();
    state.apply_page(seq, page(vec![record(3, "c", 3.0)], 1, 1, 1));

    let ids: Vec<i64> = state.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);
    assert!(!state.loading);
}

#[test]
fn apply_page_drops_duplicate_ids() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(
        seq,
        page(vec![record(1, "a", 1.0), record(1, "a again", 1.0), record(2, "b", 2.0)], 3, 1, 1),
    );
    let ids: Vec<i64> = state.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn fifteen_matches_split_across_two_pages() {
    let mut state = IngredientsState::default();
    state.set_search_term("奶");

    let first: Vec<IngredientRecord> =
        (1..=10).map(|i| record(i, &format!("奶 {i}"), f64::from(i as i32))).collect();
    let seq = state.begin_fetch();
    state.apply_page(seq, page(first, 15, 2, 1));
    assert_eq!(state.rows.len(), 10);
    assert_eq!(state.total_pages, 2);
    assert_eq!(state.query.page, 1);

    state.set_page(2);
    let rest: Vec<IngredientRecord> =
        (11..=15).map(|i| record(i, &format!("奶 {i}"), f64::from(i as i32))).collect();
    let seq = state.begin_fetch();
    state.apply_page(seq, page(rest, 15, 2, 2));
    assert_eq!(state.rows.len(), 5);
    assert_eq!(state.query.page, 2);
}

#[test]
fn stale_response_is_dropped() {
    let mut state = IngredientsState::default();
    let old_seq = state.begin_fetch();
    let new_seq = state.begin_fetch();

    assert!(!state.apply_page(old_seq, page(vec![record(1, "stale", 1.0)], 1, 1, 1)));
    assert!(state.rows.is_empty());
    assert!(state.loading);

    assert!(state.apply_page(new_seq, page(vec![record(2, "fresh", 2.0)], 1, 1, 1)));
    assert_eq!(state.rows[0].id, 2);
}

#[test]
fn stale_failure_does_not_clear_loading_flag() {
    let mut state = IngredientsState::default();
    let old_seq = state.begin_fetch();
    let _new_seq = state.begin_fetch();
    assert!(!state.fetch_failed(old_seq));
    assert!(state.loading);
}

#[test]
fn failed_fetch_leaves_prior_rows_intact() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(seq, page(vec![record(1, "a", 1.0)], 1, 1, 1));

    let seq = state.begin_fetch();
    assert!(state.fetch_failed(seq));
    assert_eq!(state.rows.len(), 1);
    assert!(!state.loading);
}

// =============================================================
// Local mutations
// =============================================================

#[test]
fn delete_removes_exactly_one_row_without_refetch() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(
        seq,
        page(vec![record(1, "a", 1.0), record(2, "b", 2.0), record(3, "c", 3.0)], 3, 1, 1),
    );

    assert!(state.remove_record(2));
    let ids: Vec<i64> = state.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(!state.remove_record(2));
}

#[test]
fn deleting_only_row_on_last_page_keeps_the_page_number() {
    let mut state = IngredientsState::default();
    state.set_page(2);
    let seq = state.begin_fetch();
    state.apply_page(seq, page(vec![record(42, "last", 1.0)], 11, 2, 2));

    assert!(state.remove_record(42));
    assert!(state.rows.is_empty());
    assert_eq!(state.query.page, 2);
}

#[test]
fn edit_replaces_only_the_matching_row() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(seq, page(vec![record(1, "a", 1.0), record(2, "b", 2.0)], 2, 1, 1));

    let mut updated = record(2, "b edited", 99.0);
    updated.protein = 42.0;
    state.replace_record(updated);

    assert_eq!(state.rows[0].name, "a");
    assert_eq!(state.rows[0].calories, 1.0);
    assert_eq!(state.rows[1].name, "b edited");
    assert_eq!(state.rows[1].protein, 42.0);
}

#[test]
fn replacing_a_record_not_on_the_page_is_a_noop() {
    let mut state = IngredientsState::default();
    let seq = state.begin_fetch();
    state.apply_page(seq, page(vec![record(1, "a", 1.0)], 1, 1, 1));

    state.replace_record(record(9, "elsewhere", 9.0));
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].id, 1);
}

#[test]
fn reset_query_discards_search_sort_and_page() {
    let mut state = IngredientsState::default();
    state.set_search_term("奶");
    state.toggle_sort(SortField::Fat);
    state.set_page(4);

    state.reset_query();
    assert_eq!(state.query, ListQuery::default());
}
