//! User service implementation
//!
//! Account lookup and self-service deletion.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::database::{DatabaseService, UserRepository};
use crate::models::user::User;
use crate::utils::errors::{Result, YogaStudioError};
use crate::utils::helpers::normalize_email;
use crate::utils::logging::log_user_action;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(database: &DatabaseService) -> Self {
        Self {
            users: database.users.clone(),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        debug!(user_id = id, "Getting user by ID");
        self.users.find_by_id(id).await
    }

    /// Remove an account. Existence is not checked here.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.users.delete(id).await?;
        log_user_action(id, "delete", None);
        Ok(())
    }

    /// Delete an account on behalf of the authenticated caller
    ///
    /// Only the owner of the account (matched by email) may delete it.
    pub async fn delete_account(&self, id: i64, requester_email: &str) -> Result<()> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(YogaStudioError::UserNotFound { user_id: id })?;

        if user.email != normalize_email(requester_email) {
            warn!(user_id = id, requester = %requester_email, "Refused to delete another user's account");
            return Err(YogaStudioError::Authentication(
                "Not allowed to delete this account".to_string(),
            ));
        }

        self.delete(id).await
    }
}
