use super::*;

#[test]
fn detail_message_reads_string_detail() {
    let body = serde_json::json!({ "detail": "Incorrect email or password" });
    assert_eq!(detail_message(&body).as_deref(), Some("Incorrect email or password"));
}

#[test]
fn detail_message_reads_first_validation_msg() {
    let body = serde_json::json!({
        "detail": [
            { "loc": ["body", "email"], "msg": "value is not a valid email address" },
            { "loc": ["body", "password"], "msg": "field required" }
        ]
    });
    assert_eq!(
        detail_message(&body).as_deref(),
        Some("value is not a valid email address")
    );
}

#[test]
fn detail_message_ignores_blank_and_missing_detail() {
    assert_eq!(detail_message(&serde_json::json!({ "detail": "  " })), None);
    assert_eq!(detail_message(&serde_json::json!({ "error": "x" })), None);
    assert_eq!(detail_message(&serde_json::Value::Null), None);
}

#[test]
fn rejection_maps_401_to_authentication() {
    let err = rejection(401, &serde_json::json!({ "detail": "bad" }), "fallback");
    assert_eq!(err, AuthError::Authentication { message: "bad".to_owned() });
    assert!(err.is_rejection());
}

#[test]
fn rejection_uses_fallback_without_payload() {
    let err = rejection(500, &serde_json::Value::Null, "Registration failed. Please try again.");
    assert_eq!(
        err,
        AuthError::Remote {
            status: 500,
            message: "Registration failed. Please try again.".to_owned(),
        }
    );
    assert!(!err.is_rejection());
}

#[test]
fn transport_errors_surface_generic_message() {
    let err = AuthError::from(TransportError::Network("connection refused".to_owned()));
    assert_eq!(err.user_message(), NETWORK_FAILED);
}

#[test]
fn remote_errors_surface_payload_message() {
    let err = AuthError::Remote {
        status: 400,
        message: "Username already registered".to_owned(),
    };
    assert_eq!(err.user_message(), "Username already registered");
}
