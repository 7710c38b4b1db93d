//! Authentication payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email, length(max = 50))]
    pub email: String,
    #[validate(length(min = 3, max = 20))]
    pub first_name: String,
    #[validate(length(min = 3, max = 20))]
    pub last_name: String,
    #[validate(length(min = 6, max = 40))]
    pub password: String,
}

/// Returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        let valid = SignupRequest {
            email: "test@example.com".into(),
            first_name: "Test".into(),
            last_name: "Example".into(),
            password: "password".into(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest { email: "not-an-email".into(), ..valid.clone() };
        assert!(bad_email.validate().is_err());

        let short_password = SignupRequest { password: "abc".into(), ..valid.clone() };
        assert!(short_password.validate().is_err());

        let short_name = SignupRequest { first_name: "Al".into(), ..valid };
        assert!(short_name.validate().is_err());
    }

    #[test]
    fn test_jwt_response_wire_shape() {
        let response = JwtResponse {
            token: "abc".into(),
            token_type: "Bearer".into(),
            id: 1,
            username: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            last_name: "Admin".into(),
            admin: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "Bearer");
        assert_eq!(json["firstName"], "Admin");
        assert_eq!(json["admin"], true);
    }
}
