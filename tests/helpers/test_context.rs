//! Test context for unified test setup
//!
//! Builds the service layer on top of a seeded in-memory store so the HTTP
//! tests run without external infrastructure.

use std::sync::Once;

use YogaStudio::config::{Settings, StorageBackend};
use YogaStudio::database::{seed, DatabaseService};
use YogaStudio::models::auth::LoginRequest;
use YogaStudio::models::CreateUserRequest;
use YogaStudio::security::password;
use YogaStudio::services::ServiceFactory;

use super::test_data::{ADMIN_EMAIL, ADMIN_PASSWORD};

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Services over a freshly seeded store
pub struct TestContext {
    pub services: ServiceFactory,
    pub database: DatabaseService,
    pub settings: Settings,
}

impl TestContext {
    pub async fn new() -> Self {
        init_test_logging();

        let mut settings = Settings::default();
        settings.database.backend = StorageBackend::Memory;

        let database = DatabaseService::in_memory();
        seed::run(&database, &settings.bootstrap)
            .await
            .expect("Failed to seed test store");

        let services = ServiceFactory::new(database.clone(), &settings);
        Self { services, database, settings }
    }

    /// Token for the seeded admin account
    pub async fn admin_token(&self) -> String {
        self.token_for(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    pub async fn token_for(&self, email: &str, password: &str) -> String {
        self.services
            .auth_service
            .login(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .expect("Failed to log in test account")
            .token
    }

    /// Insert a regular account and return its id
    pub async fn create_user(&self, email: &str, password: &str) -> i64 {
        self.database
            .users
            .create(CreateUserRequest {
                email: email.to_string(),
                first_name: "Toto".to_string(),
                last_name: "Tata".to_string(),
                password: password::hash_password(password).expect("Failed to hash password"),
                admin: false,
            })
            .await
            .expect("Failed to create test user")
            .id
    }
}

/// Initialize the full application against a [`TestContext`]
#[macro_export]
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new().configure(|cfg| YogaStudio::configure(cfg, &$ctx.services)),
        )
        .await
    };
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
