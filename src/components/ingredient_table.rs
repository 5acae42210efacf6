//! Paginated, searchable, sortable ingredient table.
//!
//! This is the list controller's view: it owns the debounced search input,
//! the sortable headers, pagination, and the record-level actions (detail,
//! edit, delete) that keep the rendered page consistent with the server.
//! Edit and delete mutate the in-memory page in place; create resets to a
//! fresh page-1 fetch.

use leptos::prelude::*;

use crate::components::edit_ingredient_modal::EditIngredientModal;
use crate::components::ingredient_detail::IngredientDetail;
use crate::net::types::IngredientRecord;
use crate::state::ingredients::{IngredientsState, SortField};
use crate::state::notifications::NotificationsState;
use crate::util::debounce::Debounce;

/// Issue a list fetch for the current query. Each fetch carries a sequence
/// token; a response that resolves after a newer fetch was issued is
/// dropped instead of overwriting it. In-flight requests are never
/// cancelled.
pub fn spawn_list_fetch(
    ingredients: RwSignal<IngredientsState>,
    notices: RwSignal<NotificationsState>,
) {
    #[cfg(feature = "hydrate")]
    {
        let mut seq = 0u64;
        ingredients.update(|s| seq = s.begin_fetch());
        let request = ingredients.with_untracked(|s| s.query.to_request());

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_ingredient_list(&request).await {
                Ok(response) => {
                    ingredients.update(|s| {
                        if !s.apply_page(seq, response) {
                            leptos::logging::log!("dropped stale ingredient list response");
                        }
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("ingredient list fetch failed: {e}");
                    ingredients.update(|s| {
                        s.fetch_failed(seq);
                    });
                    notices.update(|n| {
                        n.error("載入失敗", "無法取得食材清單");
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ingredients, notices);
    }
}

/// The ingredient table with search, sort, pagination, and row actions.
#[component]
pub fn IngredientTable() -> impl IntoView {
    let ingredients = expect_context::<RwSignal<IngredientsState>>();
    let notices = expect_context::<RwSignal<NotificationsState>>();

    let debounce = RwSignal::new(Debounce::default());
    let detail_for = RwSignal::new(None::<IngredientRecord>);
    let editing = RwSignal::new(None::<IngredientRecord>);
    let deleting = RwSignal::new(None::<IngredientRecord>);

    // Initial fetch on mount.
    let started = RwSignal::new(false);
    Effect::new(move || {
        if !started.get_untracked() {
            started.set(true);
            spawn_list_fetch(ingredients, notices);
        }
    });

    let on_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        // Current page is preserved on a term change.
        ingredients.update(|s| s.set_search_term(&term));

        let mut token = 0u64;
        debounce.update(|d| token = d.arm());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::state::ingredients::SEARCH_DEBOUNCE_MS,
            )))
            .await;
            if debounce.with_untracked(|d| d.is_current(token)) {
                spawn_list_fetch(ingredients, notices);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let on_detail_close = Callback::new(move |()| detail_for.set(None));
    let on_edit_close = Callback::new(move |()| editing.set(None));
    let on_delete_close = Callback::new(move |()| deleting.set(None));
    let on_update = Callback::new(move |updated: IngredientRecord| {
        ingredients.update(|s| s.replace_record(updated));
    });

    view! {
        <div class="ingredient-table">
            <input
                class="ingredient-table__search"
                type="text"
                placeholder="Search ingredients"
                prop:value=move || ingredients.get().query.search
                on:input=on_search
            />

            <table class="ingredient-table__table">
                <thead>
                    <tr>
                        <Th label="Name" field=SortField::Name/>
                        <Th label="Calories" field=SortField::Calories/>
                        <Th label="Protein" field=SortField::Protein/>
                        <Th label="Fat" field=SortField::Fat/>
                        <Th label="Carbohydrates" field=SortField::Carbohydrates/>
                        <th class="ingredient-table__th"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = ingredients.get();
                        if state.loading {
                            return (0..state.query.page_size)
                                .map(|_| {
                                    view! {
                                        <tr class="ingredient-table__skeleton-row">
                                            <td colspan="6">
                                                <div class="skeleton"></div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any();
                        }

                        let rows = state.sorted_rows();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="6" class="ingredient-table__empty">
                                        "Nothing found"
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }

                        rows.into_iter()
                            .map(|record| {
                                let macros = record.display_macros();
                                let detail_record = record.clone();
                                let edit_record = record.clone();
                                let delete_record = record.clone();
                                view! {
                                    <tr class="ingredient-table__row">
                                        <td>{record.name.clone()}</td>
                                        <td>{format!("{:.1}", macros.calories)}</td>
                                        <td>{format!("{:.1}", macros.protein)}</td>
                                        <td>{format!("{:.1}", macros.fat)}</td>
                                        <td>{format!("{:.1}", macros.carbohydrates)}</td>
                                        <td class="ingredient-table__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| detail_for.set(Some(detail_record.clone()))
                                            >
                                                "Detail"
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| editing.set(Some(edit_record.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| deleting.set(Some(delete_record.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            <Pagination/>

            {move || {
                detail_for.get().map(|record| {
                    view! { <IngredientDetail record=record on_close=on_detail_close/> }
                })
            }}

            {move || {
                editing.get().map(|record| {
                    view! {
                        <EditIngredientModal
                            record=record
                            on_close=on_edit_close
                            on_update=on_update
                        />
                    }
                })
            }}

            {move || {
                deleting.get().map(|record| {
                    view! { <ConfirmDeleteDialog record=record on_cancel=on_delete_close/> }
                })
            }}
        </div>
    }
}

/// Sortable column header. Reselecting the active column flips direction;
/// selecting a new column starts ascending. Either way the current page is
/// refetched immediately.
#[component]
fn Th(label: &'static str, field: SortField) -> impl IntoView {
    let ingredients = expect_context::<RwSignal<IngredientsState>>();
    let notices = expect_context::<RwSignal<NotificationsState>>();

    let indicator = move || {
        let query = ingredients.get().query;
        if query.sort_by == Some(field) {
            if query.descending { "▼" } else { "▲" }
        } else {
            "↕"
        }
    };

    let on_sort = move |_| {
        ingredients.update(|s| s.toggle_sort(field));
        spawn_list_fetch(ingredients, notices);
    };

    view! {
        <th class="ingredient-table__th">
            <button class="ingredient-table__sort" on:click=on_sort>
                <span>{label}</span>
                <span class="ingredient-table__sort-icon">{indicator}</span>
            </button>
        </th>
    }
}

/// Page switcher. The server reports `total_pages`; every click replaces
/// the rendered set with the requested page.
#[component]
fn Pagination() -> impl IntoView {
    let ingredients = expect_context::<RwSignal<IngredientsState>>();
    let notices = expect_context::<RwSignal<NotificationsState>>();

    let go_to = move |n: u32| {
        ingredients.update(|s| s.set_page(n));
        spawn_list_fetch(ingredients, notices);
    };

    view! {
        <div class="pagination">
            {move || {
                let state = ingredients.get();
                let current = state.query.page;
                let total = state.total_pages.max(1);
                (1..=total)
                    .map(|n| {
                        let class = if n == current {
                            "pagination__page pagination__page--active"
                        } else {
                            "pagination__page"
                        };
                        view! {
                            <button class=class disabled={n == current} on:click=move |_| go_to(n)>
                                {n}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Confirmation step before the destructive delete call. On success the
/// row is dropped from the in-memory page without a refetch; the page
/// number is kept even if this empties the page. On failure the page is
/// left unchanged.
#[component]
fn ConfirmDeleteDialog(record: IngredientRecord, on_cancel: Callback<()>) -> impl IntoView {
    let ingredients = expect_context::<RwSignal<IngredientsState>>();
    let notices = expect_context::<RwSignal<NotificationsState>>();

    let id = record.id;
    let name = record.name.clone();

    let on_confirm = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = name.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_ingredient(id).await {
                    Ok(_) => {
                        ingredients.update(|s| {
                            s.remove_record(id);
                        });
                        notices.update(|n| {
                            n.success("食材已刪除", &format!("{name} 已成功刪除"));
                        });
                    }
                    Err(e) => {
                        leptos::logging::warn!("ingredient delete failed: {e}");
                        notices.update(|n| {
                            n.error("刪除失敗", "無法刪除食材");
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &name, ingredients, notices);
        }
        on_cancel.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"刪除食材"</h2>
                <p class="dialog__text">{format!("確定要刪除 {} 嗎？", record.name)}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "取消"
                    </button>
                    <button class="btn btn--danger" on:click=on_confirm>
                        "刪除"
                    </button>
                </div>
            </div>
        </div>
    }
}
