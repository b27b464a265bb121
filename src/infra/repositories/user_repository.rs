//! User repository - the persistence component for user records.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{UpdateUser, User};
use crate::errors::{AppError, AppResult};

/// User repository trait for dependency injection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, primary-key order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find user by exact email address (case-sensitive)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users in a department (exact match)
    async fn find_by_department(&self, department: &str) -> AppResult<Vec<User>>;

    /// Find users whose name contains the fragment, case-insensitively
    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>>;

    /// Check whether a user with this email exists
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Total number of users
    async fn count(&self) -> AppResult<u64>;

    /// Create a new user; the store assigns the id
    async fn create(&self, email: String, name: String, department: String) -> AppResult<User>;

    /// Overwrite the provided fields of an existing user
    async fn update(&self, id: i64, fields: UpdateUser) -> AppResult<User>;

    /// Remove a user permanently
    async fn delete(&self, id: i64) -> AppResult<()>;
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

/// Translate constraint violations into the typed conflict error.
///
/// Email uniqueness is enforced by the storage engine's unique index;
/// this keeps concurrent inserts correct without application-level locking.
fn write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("email"),
        _ => AppError::Database(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_department(&self, department: &str) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Department.eq(department))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>> {
        let pattern = format!("%{}%", fragment.to_lowercase());
        let models = UserEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(user::Column::Name))).like(pattern))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, email: String, name: String, department: String) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(email),
            name: Set(name),
            department: Set(department),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(write_error)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i64, fields: UpdateUser) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(email) = fields.email {
            active.email = Set(email);
        }
        if let Some(name) = fields.name {
            active.name = Set(name);
        }
        if let Some(department) = fields.department {
            active.department = Set(department);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(write_error)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
