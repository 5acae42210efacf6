//! Ingredient detail modal.
//!
//! Opens instantly with the partial record from the table row, then swaps
//! in the full record (including the image payload) once the detail fetch
//! resolves. A failed fetch leaves the partial record visible and surfaces
//! a transient toast.

use leptos::prelude::*;

use crate::net::types::IngredientRecord;
use crate::state::notifications::NotificationsState;

#[component]
pub fn IngredientDetail(record: IngredientRecord, on_close: Callback<()>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationsState>>();

    let id = record.id;
    let full = RwSignal::new(record);
    let fetched = RwSignal::new(false);

    Effect::new(move || {
        if fetched.get_untracked() {
            return;
        }
        fetched.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_ingredient(id).await {
                Ok(detail) => full.set(detail),
                Err(e) => {
                    leptos::logging::warn!("ingredient detail fetch failed: {e}");
                    notices.update(|n| {
                        n.error("載入失敗", "無法取得食材詳細資訊");
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, notices);
    });

    let badge = move || {
        if full.get().added_by_image {
            ("badge badge--green", "Image Scan")
        } else {
            ("badge badge--blue", "Manual Entry")
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog ingredient-detail" on:click=move |ev| ev.stop_propagation()>
                <h2>"Ingredient Details"</h2>

                <div class="ingredient-detail__header">
                    <h3>{move || full.get().name}</h3>
                    <span class=move || badge().0>{move || badge().1}</span>
                </div>

                <div class="ingredient-detail__macros">
                    {move || {
                        let macros = full.get().display_macros();
                        view! {
                            <div class="ingredient-detail__macro">
                                <strong>{format!("{:.1}", macros.calories)}</strong>
                                <span>"Calories"</span>
                            </div>
                            <div class="ingredient-detail__macro">
                                <strong>{format!("{:.1}g", macros.protein)}</strong>
                                <span>"Protein"</span>
                            </div>
                            <div class="ingredient-detail__macro">
                                <strong>{format!("{:.1}g", macros.fat)}</strong>
                                <span>"Fat"</span>
                            </div>
                            <div class="ingredient-detail__macro">
                                <strong>{format!("{:.1}g", macros.carbohydrates)}</strong>
                                <span>"Carbs"</span>
                            </div>
                        }
                    }}
                </div>

                <p class="ingredient-detail__serving">
                    {move || format!("Serving Size: {:.0}g", full.get().serving_size_grams)}
                </p>

                {move || {
                    full.get().image_base64.map(|src| {
                        view! { <img class="ingredient-detail__image" src=src alt="Product"/> }
                    })
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
