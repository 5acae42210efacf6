//! Edit-ingredient modal.
//!
//! Prefills from the full record (the table row copy lacks the image
//! payload), submits a whole-record replace, and hands the server-returned
//! copy back to the table via `on_update` so only the matching row changes.

use leptos::prelude::*;

use crate::net::types::{IngredientRecord, IngredientUpdate, UnitType};
use crate::state::notifications::NotificationsState;

fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[component]
pub fn EditIngredientModal(
    record: IngredientRecord,
    on_close: Callback<()>,
    on_update: Callback<IngredientRecord>,
) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationsState>>();

    let id = record.id;
    let name = RwSignal::new(record.name.clone());
    let calories = RwSignal::new(record.calories.to_string());
    let protein = RwSignal::new(record.protein.to_string());
    let fat = RwSignal::new(record.fat.to_string());
    let carbohydrates = RwSignal::new(record.carbohydrates.to_string());
    let serving = RwSignal::new(record.serving_size_grams.to_string());
    let unit_type = RwSignal::new(record.unit_type);
    let image_base64 = RwSignal::new(record.image_base64);
    let saving = RwSignal::new(false);

    // Prefill from the full record once it arrives; macro fields show the
    // per-serving values for servings records.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_ingredient(id).await {
                Ok(detail) => {
                    let macros = detail.display_macros();
                    name.set(detail.name.clone());
                    calories.set(macros.calories.to_string());
                    protein.set(macros.protein.to_string());
                    fat.set(macros.fat.to_string());
                    carbohydrates.set(macros.carbohydrates.to_string());
                    serving.set(detail.serving_size_grams.to_string());
                    unit_type.set(detail.unit_type);
                    image_base64.set(detail.image_base64);
                }
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

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if crate::util::upload::exceeds_image_cap(file.size()) {
                notices.update(|n| {
                    n.error("檔案過大", "請上傳小於 5MB 的圖片");
                });
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::util::upload::file_to_data_url(&file).await {
                    Ok(url) => image_base64.set(Some(url)),
                    Err(e) => {
                        leptos::logging::warn!("image read failed: {e}");
                        notices.update(|n| {
                            n.error("載入失敗", "無法讀取圖片");
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let body = IngredientUpdate {
            id,
            name: name.get_untracked(),
            calories: parse_quantity(&calories.get_untracked()),
            fat: parse_quantity(&fat.get_untracked()),
            protein: parse_quantity(&protein.get_untracked()),
            carbohydrates: parse_quantity(&carbohydrates.get_untracked()),
            serving_size_grams: parse_quantity(&serving.get_untracked()),
            image_base64: image_base64.get_untracked().unwrap_or_default(),
        };
        if body.name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_ingredient(&body).await {
                    Ok(updated) => {
                        notices.update(|n| {
                            n.success("食材已修改", &format!("{} 已成功修改", updated.name));
                        });
                        on_update.run(updated);
                        on_close.run(());
                    }
                    Err(e) => {
                        leptos::logging::warn!("ingredient update failed: {e}");
                        notices.update(|n| {
                            n.error("食材修改失敗", "無法成功修改食材");
                        });
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    let unit_label = move || {
        if unit_type.get() == UnitType::Servings { "每份" } else { "100g" }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"編輯食材"</h2>

                <label class="dialog__label">
                    "名稱"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="毛豆 🫛"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__unit">
                    {move || {
                        if unit_type.get() == UnitType::Servings { "份" } else { "克" }
                    }}
                </div>

                <label class="dialog__label">
                    "熱量"
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.1"
                        prop:value=move || calories.get()
                        on:input=move |ev| calories.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    {move || format!("蛋白質 ({})", unit_label())}
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.1"
                        prop:value=move || protein.get()
                        on:input=move |ev| protein.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    {move || format!("脂肪 ({})", unit_label())}
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.1"
                        prop:value=move || fat.get()
                        on:input=move |ev| fat.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    {move || format!("碳水化合物 ({})", unit_label())}
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.1"
                        prop:value=move || carbohydrates.get()
                        on:input=move |ev| carbohydrates.set(event_target_value(&ev))
                    />
                </label>

                {move || {
                    (unit_type.get() == UnitType::Grams).then(|| {
                        view! {
                            <label class="dialog__label">
                                "每份重量 (g)"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    step="1"
                                    prop:value=move || serving.get()
                                    on:input=move |ev| serving.set(event_target_value(&ev))
                                />
                            </label>
                        }
                    })
                }}

                <label class="dialog__label">
                    "產品圖片"
                    <input class="dialog__file" type="file" accept="image/*" on:change=on_file/>
                </label>
                {move || {
                    image_base64.get().map(|src| {
                        view! { <img class="dialog__preview" src=src alt="Product preview"/> }
                    })
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "取消"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get()
                        on:click=submit
                    >
                        "編輯"
                    </button>
                </div>
            </div>
        </div>
    }
}
