//! REST API helpers for the ingredient endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Transport`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call site gets a typed [`ApiError`] so failures can be logged and
//! surfaced as a transient toast without crashing hydration. No call is
//! retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    DeleteResponse, IngredientListRequest, IngredientListResponse, IngredientRecord,
    IngredientUpdate, NewIngredient,
};

/// Failure of one network operation, classified at the call boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network/transport failure).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body did not match the documented schema.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Backend base URL, set at build time via `MACROLOG_API_URL`.
/// Defaults to same-origin relative paths.
pub fn api_base() -> &'static str {
    option_env!("MACROLOG_API_URL").unwrap_or("")
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let url = format!("{}{path}", api_base());
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch one page of ingredients via `POST /ingredient/get_ingredient_list`.
pub async fn fetch_ingredient_list(
    request: &IngredientListRequest,
) -> Result<IngredientListResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ingredient/get_ingredient_list", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch one full record (including image payload) via
/// `GET /ingredient/get_ingredient?id=<id>`.
pub async fn fetch_ingredient(id: i64) -> Result<IngredientRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/ingredient/get_ingredient?id={id}", api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<IngredientRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create an ingredient from manually entered values via `POST /ingredient/add`.
pub async fn create_ingredient(body: &NewIngredient) -> Result<IngredientRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ingredient/add", body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create an ingredient from a product photo via `POST /ingredient/add`
/// (multipart form with an `image` file and a `name` field). The server
/// runs image recognition and fills in the macro values; the created
/// record carries `added_by_image = true`.
pub async fn create_ingredient_by_image(
    name: &str,
    filename: &str,
    mime: &str,
    bytes: &[u8],
) -> Result<IngredientRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form_err = || ApiError::Transport("form construction failed".to_owned());

        let parts = js_sys::Array::of1(js_sys::Uint8Array::from(bytes).as_ref());
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime);
        let file = web_sys::File::new_with_u8_array_sequence_and_options(
            &parts, filename, &options,
        )
        .map_err(|_| form_err())?;

        let form = web_sys::FormData::new().map_err(|_| form_err())?;
        form.append_with_blob("image", &file).map_err(|_| form_err())?;
        form.append_with_str("name", name).map_err(|_| form_err())?;

        let url = format!("{}/ingredient/add", api_base());
        let resp = gloo_net::http::Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<IngredientRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, filename, mime, bytes);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Replace a record wholesale via `POST /ingredient/update`.
pub async fn update_ingredient(body: &IngredientUpdate) -> Result<IngredientRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ingredient/update", body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Delete a record via `POST /ingredient/delete`.
pub async fn delete_ingredient(id: i64) -> Result<DeleteResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ingredient/delete", &super::types::DeleteRequest { id }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
