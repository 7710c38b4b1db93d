//! Authentication service
//!
//! Handles account registration and credential login. Tokens are issued by
//! [`JwtService`] and checked on every protected request by the JWT middleware.

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::database::{DatabaseService, UserRepository};
use crate::models::auth::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};
use crate::models::user::CreateUserRequest;
use crate::security::{password, JwtService};
use crate::utils::errors::{Result, YogaStudioError};
use crate::utils::helpers::normalize_email;
use crate::utils::logging::{log_auth_failure, log_user_action};

pub const BAD_CREDENTIALS: &str = "Bad credentials";
pub const REGISTERED_MESSAGE: &str = "User registered successfully!";
const TOKEN_TYPE: &str = "Bearer";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(database: &DatabaseService, jwt: JwtService) -> Self {
        Self {
            users: database.users.clone(),
            jwt,
        }
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// Check credentials and issue a bearer token
    pub async fn login(&self, request: LoginRequest) -> Result<JwtResponse> {
        request.validate()?;
        let email = normalize_email(&request.email);
        debug!(email = %email, "Login attempt");

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                log_auth_failure(&email, "unknown account");
                return Err(YogaStudioError::Authentication(BAD_CREDENTIALS.to_string()));
            }
        };

        if let Err(e) = password::verify_password(&request.password, &user.password) {
            log_auth_failure(&email, "password mismatch");
            return Err(e);
        }

        let token = self.jwt.issue(&user)?;
        info!(user_id = user.id, "User logged in");

        Ok(JwtResponse {
            token,
            token_type: TOKEN_TYPE.to_string(),
            id: user.id,
            username: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            admin: user.admin,
        })
    }

    /// Create a regular (non-admin) account
    pub async fn register(&self, request: SignupRequest) -> Result<MessageResponse> {
        request.validate()?;
        let email = normalize_email(&request.email);

        if self.users.exists_by_email(&email).await? {
            debug!(email = %email, "Registration refused, email already taken");
            return Err(YogaStudioError::EmailAlreadyTaken);
        }

        let user = self
            .users
            .create(CreateUserRequest {
                email,
                first_name: request.first_name,
                last_name: request.last_name,
                password: password::hash_password(&request.password)?,
                admin: false,
            })
            .await?;

        log_user_action(user.id, "register", None);
        Ok(MessageResponse::new(REGISTERED_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::database::seed;
    use assert_matches::assert_matches;

    async fn setup() -> AuthService {
        let settings = Settings::default();
        let database = DatabaseService::in_memory();
        seed::run(&database, &settings.bootstrap).await.unwrap();
        AuthService::new(&database, JwtService::new(&settings.jwt))
    }

    fn signup(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            first_name: "Toto".to_string(),
            last_name: "Tata".to_string(),
            password: "password123".to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_admin_login() {
        let service = setup().await;
        let response = service.login(login("yoga@studio.com", "test!1234")).await.unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.username, "yoga@studio.com");
        assert_eq!(response.first_name, "Admin");
        assert!(response.admin);

        let claims = service.jwt().validate(&response.token).unwrap();
        assert_eq!(claims.sub, "yoga@studio.com");
        assert_eq!(claims.uid, response.id);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let service = setup().await;
        assert_matches!(
            service.login(login("yoga@studio.com", "nope")).await,
            Err(YogaStudioError::Authentication(msg)) if msg == BAD_CREDENTIALS
        );
    }

    #[tokio::test]
    async fn test_unknown_email() {
        let service = setup().await;
        assert_matches!(
            service.login(login("ghost@studio.com", "test!1234")).await,
            Err(YogaStudioError::Authentication(_))
        );
    }

    #[tokio::test]
    async fn test_blank_login_is_invalid() {
        let service = setup().await;
        assert_matches!(service.login(login("", "")).await, Err(YogaStudioError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = setup().await;
        let message = service.register(signup("toto@todo.com")).await.unwrap();
        assert_eq!(message.message, REGISTERED_MESSAGE);

        let response = service.login(login("toto@todo.com", "password123")).await.unwrap();
        assert!(!response.admin);
        assert_eq!(response.last_name, "Tata");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = setup().await;
        assert_matches!(
            service.register(signup("Yoga@Studio.com")).await,
            Err(YogaStudioError::EmailAlreadyTaken)
        );
    }

    #[tokio::test]
    async fn test_register_invalid_payload() {
        let service = setup().await;
        assert_matches!(
            service.register(signup("not-an-email")).await,
            Err(YogaStudioError::Validation(_))
        );
    }
}
