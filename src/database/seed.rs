//! Reference data inserted at startup
//!
//! Both steps are idempotent: teachers are only inserted into an empty table
//! and the admin account only when its email is unknown.

use tracing::info;

use crate::config::BootstrapConfig;
use crate::database::DatabaseService;
use crate::models::{CreateTeacherRequest, CreateUserRequest};
use crate::security::password;
use crate::utils::errors::Result;
use crate::utils::helpers::normalize_email;
use crate::utils::logging::log_seed;

/// Teachers available out of the box (first name, last name)
pub const DEFAULT_TEACHERS: [(&str, &str); 2] = [("Margot", "DELAHAYE"), ("Hélène", "THIERCELIN")];

/// Run every seed step allowed by the configuration
pub async fn run(database: &DatabaseService, config: &BootstrapConfig) -> Result<()> {
    if config.seed_teachers {
        seed_teachers(database).await?;
    }
    seed_admin(database, config).await?;
    Ok(())
}

/// Insert the default teachers when none exist
pub async fn seed_teachers(database: &DatabaseService) -> Result<usize> {
    if database.teachers.count().await? > 0 {
        log_seed("teacher", 0);
        return Ok(0);
    }

    for (first_name, last_name) in DEFAULT_TEACHERS {
        database
            .teachers
            .create(CreateTeacherRequest {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
            .await?;
    }

    log_seed("teacher", DEFAULT_TEACHERS.len());
    Ok(DEFAULT_TEACHERS.len())
}

/// Create the configured admin account when it does not exist yet
pub async fn seed_admin(database: &DatabaseService, config: &BootstrapConfig) -> Result<bool> {
    let email = normalize_email(&config.admin_email);
    if database.users.exists_by_email(&email).await? {
        log_seed("admin", 0);
        return Ok(false);
    }

    let user = database
        .users
        .create(CreateUserRequest {
            email,
            first_name: config.admin_first_name.clone(),
            last_name: config.admin_last_name.clone(),
            password: password::hash_password(&config.admin_password)?,
            admin: true,
        })
        .await?;

    info!(user_id = user.id, email = %user.email, "Bootstrap admin account created");
    log_seed("admin", 1);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let database = DatabaseService::in_memory();
        let config = Settings::default().bootstrap;

        run(&database, &config).await.unwrap();
        run(&database, &config).await.unwrap();

        assert_eq!(database.teachers.count().await.unwrap(), 2);
        assert_eq!(database.users.count().await.unwrap(), 1);

        let admin = database.users.find_by_email("yoga@studio.com").await.unwrap().unwrap();
        assert!(admin.admin);
        assert_eq!(admin.first_name, "Admin");
        assert!(password::verify_password("test!1234", &admin.password).is_ok());
    }

    #[tokio::test]
    async fn test_teacher_seed_can_be_disabled() {
        let database = DatabaseService::in_memory();
        let mut config = Settings::default().bootstrap;
        config.seed_teachers = false;

        run(&database, &config).await.unwrap();
        assert_eq!(database.teachers.count().await.unwrap(), 0);
    }
}
