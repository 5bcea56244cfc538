//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{StoreError, StoreResult};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations hold no state between calls; every call is a fresh
/// round trip to the store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user, ordered by ascending id.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Insert a user. Uniqueness breaches fail with `StoreError::ConstraintViolation`.
    async fn create(&self, user: NewUser) -> StoreResult<User>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(StoreError::from)?;

        tracing::debug!(count = models.len(), "Listed users");
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(user.email),
            username: Set(user.username),
        };

        let model = active_model.insert(&self.db).await.map_err(StoreError::from)?;
        tracing::debug!(id = model.id, "Inserted user");
        Ok(User::from(model))
    }
}
