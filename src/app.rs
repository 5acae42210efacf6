//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{ingredients::IngredientsPage, login::LoginPage};
use crate::state::ingredients::IngredientsState;
use crate::state::notifications::NotificationsState;
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// The session is hydrated exactly once from persisted storage.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ingredients = RwSignal::new(IngredientsState::default());
    let notices = RwSignal::new(NotificationsState::default());

    provide_context(session);
    provide_context(ingredients);
    provide_context(notices);

    let hydrated = RwSignal::new(false);
    Effect::new(move || {
        if hydrated.get_untracked() {
            return;
        }
        hydrated.set(true);
        session.update(|s| s.hydrate(session::load_persisted()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/macrolog.css"/>
        <Title text="Macrolog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=IngredientsPage/>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
