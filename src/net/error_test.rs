use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    let err = ApiError::from_status(401, r#"{"detail":"Not authenticated"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[test]
fn from_status_keeps_detail_message() {
    let err = ApiError::from_status(400, r#"{"detail":"Username already registered"}"#);
    assert_eq!(err.detail(), Some("Username already registered"));
    assert_eq!(err.to_string(), "request failed (400): Username already registered");
}

#[test]
fn from_status_without_body_has_no_detail() {
    let err = ApiError::from_status(500, "Internal Server Error");
    assert_eq!(err, ApiError::Rejected { status: 500, detail: None });
    assert_eq!(err.to_string(), "request failed (500)");
}

#[test]
fn extract_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","username"],"msg":"field required"},{"msg":"too short"}]}"#;
    assert_eq!(extract_detail(body), Some("field required; too short".to_owned()));
}

#[test]
fn extract_detail_ignores_blank_and_unknown_shapes() {
    assert_eq!(extract_detail(r#"{"detail":"  "}"#), None);
    assert_eq!(extract_detail(r#"{"detail":42}"#), None);
    assert_eq!(extract_detail(r#"{"message":"x"}"#), None);
}
