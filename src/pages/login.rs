//! Login page with Google OAuth redirect button.

use leptos::prelude::*;

use crate::net::api::api_base;

/// Login page — clicking the button navigates to the Google OAuth endpoint.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Macrolog"</h1>
            <p>"Track what you eat, keep your macros honest."</p>
            <a href=format!("{}/auth/google", api_base()) class="login-button">
                "Sign in with Google"
            </a>
        </div>
    }
}
