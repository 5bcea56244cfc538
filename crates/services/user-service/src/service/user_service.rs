//! User service - the single entry point the HTTP layer depends on.
//!
//! Today it only delegates to the repository. Business rules such as
//! filtering or authorization attach here without touching the API or
//! storage layers.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get all users exactly as the repository returns them.
    async fn get_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_users(&self) -> AppResult<Vec<User>> {
        // No retry and no fallback: store errors surface as-is.
        Ok(self.repo.list_users().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::{AppError, StoreError};
    use sea_orm::DbErr;
    use tokio_test::{assert_err, assert_ok};

    fn sample_users() -> Vec<User> {
        vec![
            User::new(1, "john@example.com", Some("johndoe".to_string())),
            User::new(2, "jane@example.com", None),
            User::new(3, "bob@example.com", Some("bobsmith".to_string())),
        ]
    }

    #[tokio::test]
    async fn test_get_users_returns_repository_result_unchanged() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users()
            .times(1)
            .returning(|| Ok(sample_users()));

        let service = UserManager::new(Arc::new(repo));
        let users = assert_ok!(service.get_users().await);

        assert_eq!(users, sample_users());
    }

    #[tokio::test]
    async fn test_get_users_empty_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users().returning(|| Ok(vec![]));

        let service = UserManager::new(Arc::new(repo));
        let users = assert_ok!(service.get_users().await);

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_get_users_propagates_store_error_without_retry() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users().times(1).returning(|| {
            Err(StoreError::Database(DbErr::Custom(
                "connection refused".to_string(),
            )))
        });

        let service = UserManager::new(Arc::new(repo));
        let err = assert_err!(service.get_users().await);

        match err {
            AppError::Store(StoreError::Database(DbErr::Custom(msg))) => {
                assert_eq!(msg, "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_users_queries_store_on_every_call() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users()
            .times(2)
            .returning(|| Ok(sample_users()));

        let service = UserManager::new(Arc::new(repo));
        let first = assert_ok!(service.get_users().await);
        let second = assert_ok!(service.get_users().await);

        assert_eq!(first, second);
    }
}
