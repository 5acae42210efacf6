//! Create-ingredient modal.
//!
//! Two creation paths share the modal: manual macro entry (JSON body) and
//! photo recognition (multipart upload, server fills in the macros). On
//! success the list controller is signalled through `on_created` to reset
//! to a fresh page-1 fetch.

use leptos::prelude::*;

use crate::net::types::{NewIngredient, UnitType};
use crate::state::notifications::NotificationsState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CreateMode {
    Manual,
    Photo,
}

/// A selected photo, read eagerly into memory so the modal state stays
/// plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PhotoAttachment {
    filename: String,
    mime: String,
    bytes: Vec<u8>,
}

fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn parse_optional_quantity(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

#[component]
pub fn CreateIngredientModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationsState>>();

    let mode = RwSignal::new(CreateMode::Manual);
    let name = RwSignal::new(String::new());
    let unit_type = RwSignal::new(UnitType::Grams);
    let calories = RwSignal::new(String::new());
    let protein = RwSignal::new(String::new());
    let fat = RwSignal::new(String::new());
    let carbohydrates = RwSignal::new(String::new());
    let serving = RwSignal::new(String::new());
    let image_base64 = RwSignal::new(None::<String>);
    let photo = RwSignal::new(None::<PhotoAttachment>);
    let saving = RwSignal::new(false);

    let on_attach = move |ev: leptos::ev::Event| {
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
            let filename = file.name();
            let mime = file.type_();
            leptos::task::spawn_local(async move {
                match crate::util::upload::read_file_bytes(&file).await {
                    Ok(bytes) => {
                        if mode.get_untracked() == CreateMode::Photo {
                            photo.set(Some(PhotoAttachment { filename, mime, bytes }));
                        } else {
                            image_base64.set(Some(crate::util::upload::data_url(&mime, &bytes)));
                        }
                    }
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
        let entered_name = name.get_untracked();
        if entered_name.trim().is_empty() {
            return;
        }

        match mode.get_untracked() {
            CreateMode::Manual => {
                let body = NewIngredient {
                    unit_type: unit_type.get_untracked(),
                    name: entered_name,
                    calories: parse_quantity(&calories.get_untracked()),
                    fat: parse_quantity(&fat.get_untracked()),
                    protein: parse_quantity(&protein.get_untracked()),
                    carbohydrates: parse_quantity(&carbohydrates.get_untracked()),
                    serving_size_grams: parse_optional_quantity(&serving.get_untracked()),
                    image_base64: image_base64.get_untracked(),
                };

                #[cfg(feature = "hydrate")]
                {
                    saving.set(true);
                    leptos::task::spawn_local(async move {
                        match crate::net::api::create_ingredient(&body).await {
                            Ok(created) => {
                                notices.update(|n| {
                                    n.success("食材已新增", &format!("{} 已成功新增", created.name));
                                });
                                on_created.run(());
                                on_close.run(());
                            }
                            Err(e) => {
                                leptos::logging::warn!("ingredient create failed: {e}");
                                notices.update(|n| {
                                    n.error("食材新增失敗", "無法成功新增食材");
                                });
                            }
                        }
                        saving.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = body;
            }
            CreateMode::Photo => {
                let Some(attachment) = photo.get_untracked() else {
                    return;
                };

                #[cfg(feature = "hydrate")]
                {
                    saving.set(true);
                    leptos::task::spawn_local(async move {
                        let result = crate::net::api::create_ingredient_by_image(
                            &entered_name,
                            &attachment.filename,
                            &attachment.mime,
                            &attachment.bytes,
                        )
                        .await;
                        match result {
                            Ok(created) => {
                                notices.update(|n| {
                                    n.success("食材已新增", &format!("{} 已成功新增", created.name));
                                });
                                on_created.run(());
                                on_close.run(());
                            }
                            Err(e) => {
                                leptos::logging::warn!("ingredient photo create failed: {e}");
                                notices.update(|n| {
                                    n.error("食材新增失敗", "無法成功新增食材");
                                });
                            }
                        }
                        saving.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = (attachment, entered_name);
            }
        }
    };

    let mode_class = move |m: CreateMode| {
        if mode.get() == m {
            "segmented__option segmented__option--active"
        } else {
            "segmented__option"
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"新增食材"</h2>

                <div class="segmented">
                    <button class=move || mode_class(CreateMode::Manual) on:click=move |_| mode.set(CreateMode::Manual)>
                        "手動輸入"
                    </button>
                    <button class=move || mode_class(CreateMode::Photo) on:click=move |_| mode.set(CreateMode::Photo)>
                        "拍照辨識"
                    </button>
                </div>

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

                {move || {
                    (mode.get() == CreateMode::Manual)
                        .then(|| {
                            view! {
                                <div class="segmented">
                                    <button
                                        class=move || {
                                            if unit_type.get() == UnitType::Grams {
                                                "segmented__option segmented__option--active"
                                            } else {
                                                "segmented__option"
                                            }
                                        }
                                        on:click=move |_| unit_type.set(UnitType::Grams)
                                    >
                                        "克"
                                    </button>
                                    <button
                                        class=move || {
                                            if unit_type.get() == UnitType::Servings {
                                                "segmented__option segmented__option--active"
                                            } else {
                                                "segmented__option"
                                            }
                                        }
                                        on:click=move |_| unit_type.set(UnitType::Servings)
                                    >
                                        "份"
                                    </button>
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
                                    "蛋白質"
                                    <input
                                        class="dialog__input"
                                        type="number"
                                        step="0.1"
                                        prop:value=move || protein.get()
                                        on:input=move |ev| protein.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "脂肪"
                                    <input
                                        class="dialog__input"
                                        type="number"
                                        step="0.1"
                                        prop:value=move || fat.get()
                                        on:input=move |ev| fat.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "碳水化合物"
                                    <input
                                        class="dialog__input"
                                        type="number"
                                        step="0.1"
                                        prop:value=move || carbohydrates.get()
                                        on:input=move |ev| carbohydrates.set(event_target_value(&ev))
                                    />
                                </label>
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
                    {move || {
                        if mode.get() == CreateMode::Photo { "產品照片" } else { "產品圖片 (選填)" }
                    }}
                    <input class="dialog__file" type="file" accept="image/*" on:change=on_attach/>
                </label>
                {move || {
                    photo
                        .get()
                        .filter(|_| mode.get() == CreateMode::Photo)
                        .map(|attachment| {
                            view! {
                                <p class="dialog__hint">{format!("已選擇: {}", attachment.filename)}</p>
                            }
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
                        "新增"
                    </button>
                </div>
            </div>
        </div>
    }
}
