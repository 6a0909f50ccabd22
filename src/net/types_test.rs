use super::*;

fn sample_user_json() -> &'static str {
    r#"{"id":1,"email":"ada@example.com","name":"Ada","createdAt":"2024-03-05T10:15:30"}"#
}

#[test]
fn user_deserializes_camel_case_timestamp() {
    let user: User = serde_json::from_str(sample_user_json()).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.created_at, "2024-03-05T10:15:30");
}

#[test]
fn user_without_name_deserializes() {
    let raw = r#"{"id":2,"email":"no-name@example.com","name":null,"createdAt":"2024-01-01T00:00:00"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert!(user.name.is_none());
}

#[test]
fn display_name_prefers_name_over_email() {
    let user: User = serde_json::from_str(sample_user_json()).unwrap();
    assert_eq!(user.display_name(), "Ada");
}

#[test]
fn display_name_falls_back_to_email() {
    let mut user: User = serde_json::from_str(sample_user_json()).unwrap();
    user.name = None;
    assert_eq!(user.display_name(), "ada@example.com");
    user.name = Some(String::new());
    assert_eq!(user.display_name(), "ada@example.com");
}

#[test]
fn blog_round_trips_camel_case_keys() {
    let raw = format!(
        r#"{{"id":7,"title":"Hello","content":"Body","author":{},"createdAt":"2024-03-05T10:15:30","updatedAt":"2024-03-06T08:00:00"}}"#,
        sample_user_json()
    );
    let blog: Blog = serde_json::from_str(&raw).unwrap();
    assert_eq!(blog.id, 7);
    assert_eq!(blog.updated_at, "2024-03-06T08:00:00");

    let encoded = serde_json::to_string(&blog).unwrap();
    assert!(encoded.contains("\"createdAt\""));
    assert!(encoded.contains("\"updatedAt\""));
    assert!(!encoded.contains("\"created_at\""));
}

#[test]
fn auth_response_maps_type_keyword() {
    let raw = format!(
        r#"{{"token":"jwt-abc","type":"Bearer","user":{}}}"#,
        sample_user_json()
    );
    let auth: AuthResponse = serde_json::from_str(&raw).unwrap();
    assert_eq!(auth.token, "jwt-abc");
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.user.email, "ada@example.com");
}

#[test]
fn envelope_with_null_data_deserializes() {
    let raw = r#"{"success":true,"message":"Blog deleted successfully","data":null}"#;
    let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data, serde_json::Value::Null);
}

#[test]
fn signup_request_omits_absent_name() {
    let request = SignupRequest {
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        name: None,
    };
    let encoded = serde_json::to_string(&request).unwrap();
    assert!(!encoded.contains("name"));
}
