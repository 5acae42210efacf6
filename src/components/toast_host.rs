//! Transient toast notifications rendered in the top-right corner.
//!
//! Each toast auto-dismisses after
//! [`TOAST_DISMISS_MS`](crate::state::notifications::TOAST_DISMISS_MS);
//! clicking one
//! dismisses it early. Failures and successes share the same non-blocking
//! surface.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::notifications::{NoticeKind, NotificationsState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationsState>>();
    let scheduled = RwSignal::new(HashSet::<u64>::new());

    // Arm one dismissal timer per toast.
    Effect::new(move || {
        let items = notices.get().items;

        #[cfg(feature = "hydrate")]
        for notice in items {
            if scheduled.with_untracked(|s| s.contains(&notice.id)) {
                continue;
            }
            scheduled.update(|s| {
                s.insert(notice.id);
            });
            let id = notice.id;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    crate::state::notifications::TOAST_DISMISS_MS,
                )))
                .await;
                notices.update(|n| n.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (items, scheduled);
    });

    view! {
        <div class="toast-host">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "toast toast--success",
                            NoticeKind::Error => "toast toast--error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=class on:click=move |_| notices.update(|n| n.dismiss(id))>
                                <strong class="toast__title">{notice.title}</strong>
                                <span class="toast__message">{notice.message}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
