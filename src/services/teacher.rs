//! Teacher service implementation

use std::sync::Arc;

use tracing::debug;

use crate::database::{DatabaseService, TeacherRepository};
use crate::models::teacher::Teacher;
use crate::utils::errors::Result;

/// Read-only access to the teacher catalogue
#[derive(Clone)]
pub struct TeacherService {
    teachers: Arc<dyn TeacherRepository>,
}

impl TeacherService {
    pub fn new(database: &DatabaseService) -> Self {
        Self {
            teachers: database.teachers.clone(),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Teacher>> {
        debug!("Listing teachers");
        self.teachers.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        debug!(teacher_id = id, "Getting teacher by ID");
        self.teachers.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::database::seed;

    #[tokio::test]
    async fn test_find_all_returns_seeded_teachers() {
        let database = DatabaseService::in_memory();
        seed::run(&database, &Settings::default().bootstrap).await.unwrap();
        let service = TeacherService::new(&database);

        let teachers = service.find_all().await.unwrap();
        assert_eq!(teachers.len(), 2);
        assert_eq!(teachers[0].last_name, "DELAHAYE");
        assert_eq!(teachers[1].first_name, "Hélène");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let database = DatabaseService::in_memory();
        seed::seed_teachers(&database).await.unwrap();
        let service = TeacherService::new(&database);

        let teacher = service.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(teacher.first_name, "Margot");
        assert!(service.find_by_id(0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_catalogue() {
        let service = TeacherService::new(&DatabaseService::in_memory());
        assert!(service.find_all().await.unwrap().is_empty());
    }
}
