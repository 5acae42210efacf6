//! Image upload helpers: size cap and data-URL encoding.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Client-side cap on attached product images.
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Whether a file of `size` bytes exceeds the image cap.
pub fn exceeds_image_cap(size: f64) -> bool {
    size > MAX_IMAGE_BYTES
}

/// Encode raw image bytes as a `data:` URL, the format the backend stores
/// in `image_base64`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a browser `File` into its raw bytes.
#[cfg(feature = "hydrate")]
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "failed to read file".to_owned())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Read a browser `File` into a base64 data URL.
#[cfg(feature = "hydrate")]
pub async fn file_to_data_url(file: &web_sys::File) -> Result<String, String> {
    let bytes = read_file_bytes(file).await?;
    Ok(data_url(&file.type_(), &bytes))
}
