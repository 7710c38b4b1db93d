//! Session model
//!
//! A session is a scheduled yoga class. Participants are kept as an ordered
//! list of user ids; the store holds them in a separate join table.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::utils::helpers::{deserialize_flexible_date, deserialize_lenient_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub teacher_id: i64,
    pub description: String,
    pub users: Vec<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Whether the user is in the participant list
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.users.contains(&user_id)
    }
}

/// Row of the `sessions` table, without participants
#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub teacher_id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRow {
    pub fn into_session(self, users: Vec<i64>) -> Session {
        Session {
            id: self.id,
            name: self.name,
            date: self.date,
            teacher_id: self.teacher_id,
            description: self.description,
            users,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Payload for creating or updating a session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionRequest {
    #[validate(length(max = 50), custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_lenient_id")]
    pub teacher_id: i64,
    #[validate(length(max = 2500))]
    pub description: String,
    /// Replaces the participant list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<i64>>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_accepts_plain_date_and_string_teacher_id() {
        let request: SessionRequest = serde_json::from_str(
            r#"{"name":"Session Name","description":"Description","date":"2023-10-15","teacher_id":"1"}"#,
        )
        .unwrap();

        assert_eq!(request.teacher_id, 1);
        assert_eq!(request.date, Utc.with_ymd_and_hms(2023, 10, 15, 0, 0, 0).unwrap());
        assert!(request.users.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_invalid_date() {
        let parsed = serde_json::from_str::<SessionRequest>(
            r#"{"description":"Description","date":"InvalidDate"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_blank_and_long_names_fail_validation() {
        let mut request: SessionRequest = serde_json::from_str(
            r#"{"name":"   ","description":"d","date":"2023-10-15","teacher_id":1}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());

        request.name = "x".repeat(51);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_session_wire_shape() {
        let now = Utc::now();
        let session = Session {
            id: 1,
            name: "Débutant".into(),
            date: now,
            teacher_id: 1,
            description: "Session de découverte".into(),
            users: vec![3, 4],
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["teacher_id"], 1);
        assert_eq!(json["users"], serde_json::json!([3, 4]));
        assert!(json.get("createdAt").is_some());
        assert!(session.has_participant(3));
        assert!(!session.has_participant(5));
    }
}
