use super::*;

fn sample_user() -> User {
    User {
        user_id: 7,
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        first_name: None,
        last_name: None,
        created_at: "2024-05-01T10:00:00".to_owned(),
    }
}

#[test]
fn user_decodes_without_optional_names() {
    let user: User = serde_json::from_value(serde_json::json!({
        "user_id": 7,
        "username": "alice",
        "email": "a@x.com",
        "created_at": "2024-05-01T10:00:00"
    }))
    .expect("user");
    assert_eq!(user, sample_user());
}

#[test]
fn user_decodes_null_names() {
    let user: User = serde_json::from_value(serde_json::json!({
        "user_id": 7,
        "username": "alice",
        "email": "a@x.com",
        "first_name": null,
        "last_name": "Liddell",
        "created_at": "2024-05-01T10:00:00"
    }))
    .expect("user");
    assert_eq!(user.first_name, None);
    assert_eq!(user.last_name.as_deref(), Some("Liddell"));
}

#[test]
fn display_name_prefers_full_name() {
    let mut user = sample_user();
    user.first_name = Some("Alice".to_owned());
    user.last_name = Some("Liddell".to_owned());
    assert_eq!(user.display_name(), "Alice Liddell");
}

#[test]
fn display_name_uses_single_known_part() {
    let mut user = sample_user();
    user.last_name = Some("Liddell".to_owned());
    assert_eq!(user.display_name(), "Liddell");
}

#[test]
fn display_name_falls_back_to_username_for_blank_names() {
    let mut user = sample_user();
    user.first_name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "alice");
}

#[test]
fn auth_response_tolerates_missing_token_type() {
    let response: AuthResponse = serde_json::from_value(serde_json::json!({
        "access_token": "T",
        "user_id": 1,
        "email": "a@x.com",
        "username": "alice"
    }))
    .expect("auth response");
    assert_eq!(response.access_token, "T");
    assert!(response.token_type.is_empty());
}

#[test]
fn user_update_omits_absent_fields() {
    let update = UserUpdate {
        first_name: Some("Alice".to_owned()),
        ..UserUpdate::default()
    };
    assert_eq!(
        serde_json::to_value(&update).expect("encode"),
        serde_json::json!({ "first_name": "Alice" })
    );
    assert!(!update.is_empty());
    assert!(UserUpdate::default().is_empty());
}

#[test]
fn subscription_decodes_backend_payload() {
    let sub: Subscription = serde_json::from_value(serde_json::json!({
        "subscription_id": 3,
        "package_name": "Pro",
        "is_active": true,
        "start_date": "2024-01-01T00:00:00",
        "end_date": "2025-01-01T00:00:00"
    }))
    .expect("subscription");
    assert_eq!(sub.package_name, "Pro");
    assert!(sub.is_active);
}
