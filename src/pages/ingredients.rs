//! Ingredients page — the composition root for the list controller and
//! its modal collaborators. Redirects to `/login` if no session exists.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::create_ingredient_modal::CreateIngredientModal;
use crate::components::ingredient_table::{IngredientTable, spawn_list_fetch};
use crate::state::ingredients::IngredientsState;
use crate::state::notifications::NotificationsState;
use crate::state::session::{self, SessionState};

#[component]
pub fn IngredientsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ingredients = expect_context::<RwSignal<IngredientsState>>();
    let notices = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();

    // Redirect to login once session hydration finishes with no user.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let show_create = RwSignal::new(false);

    let on_create_close = Callback::new(move |()| show_create.set(false));

    // A successful create discards search/sort/page state and refetches
    // from page 1.
    let on_created = Callback::new(move |()| {
        ingredients.update(|s| s.reset_query());
        spawn_list_fetch(ingredients, notices);
    });

    let on_sign_out = move |_| {
        session.update(|s| s.sign_out());
        session::clear_persisted();
    };

    view! {
        <div class="ingredients-page">
            <header class="ingredients-page__header">
                <h1>"Macrolog"</h1>
                <div class="ingredients-page__header-actions">
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ Add Ingredient"
                    </button>
                    <button class="btn" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </header>

            <IngredientTable/>

            <footer class="ingredients-page__footer">
                <p>
                    "Log your diet and keep track of it. Search for the food you eat and log it."
                </p>
            </footer>

            {move || {
                show_create.get().then(|| {
                    view! {
                        <CreateIngredientModal on_close=on_create_close on_created=on_created/>
                    }
                })
            }}
        </div>
    }
}
