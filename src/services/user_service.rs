//! User service - Translates API requests into store operations.
//!
//! No business logic beyond delegation and promoting missing rows
//! to typed errors for the HTTP layer.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Get user by exact email address
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// List users in a department
    async fn list_users_by_department(&self, department: &str) -> AppResult<Vec<User>>;

    /// Search users by name fragment (case-insensitive)
    async fn search_users_by_name(&self, fragment: &str) -> AppResult<Vec<User>>;

    /// Create a new user
    async fn create_user(&self, payload: CreateUser) -> AppResult<User>;

    /// Update user fields
    async fn update_user(&self, id: i64, fields: UpdateUser) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Total number of users
    async fn count_users(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserService over a user repository.
pub struct DirectoryService {
    repo: Arc<dyn UserRepository>,
}

impl DirectoryService {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for DirectoryService {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn list_users_by_department(&self, department: &str) -> AppResult<Vec<User>> {
        self.repo.find_by_department(department).await
    }

    async fn search_users_by_name(&self, fragment: &str) -> AppResult<Vec<User>> {
        self.repo.search_by_name(fragment).await
    }

    async fn create_user(&self, payload: CreateUser) -> AppResult<User> {
        // Fast typed rejection; the unique index remains the authoritative
        // guard under concurrent inserts.
        if self.repo.exists_by_email(&payload.email).await? {
            return Err(AppError::conflict("email"));
        }

        self.repo
            .create(payload.email, payload.name, payload.department)
            .await
    }

    async fn update_user(&self, id: i64, fields: UpdateUser) -> AppResult<User> {
        self.repo.update(id, fields).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }

    async fn count_users(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}
