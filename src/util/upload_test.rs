use super::*;

// =============================================================
// Size cap
// =============================================================

#[test]
fn cap_allows_exactly_five_megabytes() {
    assert!(!exceeds_image_cap(MAX_IMAGE_BYTES));
}

#[test]
fn cap_rejects_anything_larger() {
    assert!(exceeds_image_cap(MAX_IMAGE_BYTES + 1.0));
}

#[test]
fn cap_allows_small_files() {
    assert!(!exceeds_image_cap(1024.0));
}

// =============================================================
// Data URL encoding
// =============================================================

#[test]
fn data_url_carries_mime_and_base64_payload() {
    let url = data_url("image/png", b"ping");
    assert_eq!(url, "data:image/png;base64,cGluZw==");
}

#[test]
fn data_url_of_empty_payload_is_well_formed() {
    assert_eq!(data_url("image/jpeg", b""), "data:image/jpeg;base64,");
}
