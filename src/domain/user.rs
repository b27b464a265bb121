//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier, assigned by the store on creation
    #[schema(example = 1)]
    pub id: i64,
    /// User email address (unique across all users)
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Department the user belongs to
    #[schema(example = "Engineering")]
    pub department: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Department the user belongs to
    #[schema(example = "Engineering")]
    pub department: String,
}

/// User update data transfer object
///
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New email address (must stay unique)
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// New display name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New department
    #[schema(example = "Marketing")]
    pub department: Option<String>,
}
