//! Ingredient list controller state: query, current page, and the
//! synchronization rules for create/edit/delete.
//!
//! The server owns filtering and pagination; this state holds no rows
//! beyond the current page and only ever replaces them wholesale
//! (page-replace, never append). Ordering within the fetched page is
//! applied locally by [`IngredientsState::sorted_rows`].

#[cfg(test)]
#[path = "ingredients_test.rs"]
mod ingredients_test;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::net::types::{IngredientListRequest, IngredientListResponse, IngredientRecord};

/// Fixed server page size.
pub const PAGE_SIZE: u32 = 10;

/// Trailing-edge debounce window for search keystrokes.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Sortable columns of the ingredient table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Calories,
    Protein,
    Fat,
    Carbohydrates,
}

/// The tuple driving the current server fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub search: String,
    pub sort_by: Option<SortField>,
    pub descending: bool,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: None,
            descending: false,
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// Wire request for this query. Sort is not part of the endpoint body;
    /// it is applied to the fetched page locally.
    pub fn to_request(&self) -> IngredientListRequest {
        IngredientListRequest {
            name: self.search.clone(),
            with_image: false,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// State behind the paginated ingredient table.
#[derive(Clone, Debug, Default)]
pub struct IngredientsState {
    pub query: ListQuery,
    pub rows: Vec<IngredientRecord>,
    pub total_count: u64,
    pub total_pages: u32,
    pub loading: bool,
    /// Sequence token of the most recently issued list fetch. Responses
    /// carrying an older token are dropped instead of overwriting newer
    /// state; in-flight requests themselves are never cancelled.
    fetch_seq: u64,
}

impl IngredientsState {
    /// Update the search term. The current page is preserved; the caller
    /// debounces the refetch.
    pub fn set_search_term(&mut self, term: &str) {
        self.query.search = term.to_owned();
    }

    /// Reselecting the current sort field toggles direction; a new field
    /// starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.query.sort_by == Some(field) {
            self.query.descending = !self.query.descending;
        } else {
            self.query.sort_by = Some(field);
            self.query.descending = false;
        }
    }

    /// Move to page `n` (1-based). The caller refetches afterwards.
    pub fn set_page(&mut self, n: u32) {
        self.query.page = n.max(1);
    }

    /// Discard search/sort/page state and return to a fresh page-1 query,
    /// used after a successful create.
    pub fn reset_query(&mut self) {
        self.query = ListQuery::default();
    }

    /// Mark a new list fetch as issued and return its sequence token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a fetched page if `seq` is still the latest issued fetch.
    /// Returns `false` when the response is stale and was dropped.
    pub fn apply_page(&mut self, seq: u64, response: IngredientListResponse) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        let mut seen = HashSet::new();
        self.rows = response
            .ingredients
            .into_iter()
            .filter(|record| seen.insert(record.id))
            .collect();
        self.total_count = response.total_count;
        self.total_pages = response.total_pages;
        self.query.page = response.current_page.max(1);
        true
    }

    /// Record a failed fetch. Prior rows stay untouched; returns `false`
    /// when a newer fetch has already superseded `seq`.
    pub fn fetch_failed(&mut self, seq: u64) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        true
    }

    /// Replace the row with the same id by a server-returned copy.
    /// No-op when the record is not on the current page.
    pub fn replace_record(&mut self, updated: IngredientRecord) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == updated.id) {
            *row = updated;
        }
    }

    /// Remove one row by id without refetching. The page number is kept
    /// even if this empties the page. Returns whether a row was removed.
    pub fn remove_record(&mut self, id: i64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    /// Current page rows in the query's sort order.
    pub fn sorted_rows(&self) -> Vec<IngredientRecord> {
        let mut rows = self.rows.clone();
        if let Some(field) = self.query.sort_by {
            rows.sort_by(|a, b| field_cmp(a, b, field));
            if self.query.descending {
                rows.reverse();
            }
        }
        rows
    }
}

fn field_cmp(a: &IngredientRecord, b: &IngredientRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Calories => f64_cmp(a.calories, b.calories),
        SortField::Protein => f64_cmp(a.protein, b.protein),
        SortField::Fat => f64_cmp(a.fat, b.fat),
        SortField::Carbohydrates => f64_cmp(a.carbohydrates, b.carbohydrates),
    }
}

fn f64_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
