//! Signed-in user session, hydrated once from `localStorage` at startup.
//!
//! The session is an explicit context provided by the app root rather than
//! a module-level global: components read it through
//! `expect_context::<RwSignal<SessionState>>()`. Persistence is write-through
//! and torn down on logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "macrolog_session";

/// Identity of the signed-in user as issued by the auth collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub google_id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Session state tracking the current user and hydration status.
///
/// `loading` starts `true` so the login redirect does not fire before the
/// persisted session has been read.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Install the persisted user (if any) and finish hydration.
    pub fn hydrate(&mut self, user: Option<UserInfo>) {
        self.user = user;
        self.loading = false;
    }

    /// Tear the session down. The caller also clears persistence.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Read the persisted session from `localStorage`.
pub fn load_persisted() -> Option<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session to `localStorage`.
pub fn persist(user: &UserInfo) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(raw) = serde_json::to_string(user) {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the persisted session on logout.
pub fn clear_persisted() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
