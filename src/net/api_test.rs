use super::*;

// =============================================================
// ApiError display
// =============================================================

#[test]
fn transport_error_names_the_cause() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[test]
fn status_error_carries_the_code() {
    let err = ApiError::Status(503);
    assert_eq!(err.to_string(), "server returned status 503");
}

#[test]
fn decode_error_names_the_shape_problem() {
    let err = ApiError::Decode("missing field `total_pages`".to_owned());
    assert!(err.to_string().contains("total_pages"));
}

// =============================================================
// Base URL
// =============================================================

#[test]
fn api_base_defaults_to_same_origin() {
    assert_eq!(api_base(), "");
}
