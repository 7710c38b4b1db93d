//! Request payloads shared by the integration tests

use serde_json::{json, Value};

pub const ADMIN_EMAIL: &str = "yoga@studio.com";
pub const ADMIN_PASSWORD: &str = "test!1234";

/// Session payload in the shape clients send (teacher id as a string)
pub fn session_payload(name: &str) -> Value {
    json!({
        "name": name,
        "date": "2023-10-15",
        "teacher_id": "1",
        "description": "Description de la session de test"
    })
}

/// Payload missing `name` and carrying an unparseable date
pub fn invalid_session_payload() -> Value {
    json!({
        "date": "InvalidDate",
        "teacher_id": "1",
        "description": "Description de la session de test"
    })
}

pub fn signup_payload(email: &str) -> Value {
    json!({
        "email": email,
        "firstName": "Toto",
        "lastName": "Tata",
        "password": "password123"
    })
}

pub fn login_payload(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}
