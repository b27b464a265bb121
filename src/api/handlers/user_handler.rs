//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::state::AppState;
use crate::config::HEALTH_MESSAGE;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppResult;

/// Query parameters for the name search endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Name fragment to match (case-insensitive)
    pub name: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/count", get(count_users))
        .route("/health", get(health_check))
        .route("/search", get(search_users))
        .route("/email/:email", get(get_user_by_email))
        .route("/department/:department", get(list_users_by_department))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Get user by email address
#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email address (exact match)")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user_by_email(&email).await?;
    Ok(Json(user))
}

/// List users in a department
#[utoipa::path(
    get,
    path = "/api/users/department/{department}",
    tag = "Users",
    params(
        ("department" = String, Path, description = "Department name (exact match)")
    ),
    responses(
        (status = 200, description = "Users in the department", body = Vec<User>)
    )
)]
pub async fn list_users_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> AppResult<Json<Vec<User>>> {
    let users = state
        .user_service
        .list_users_by_department(&department)
        .await?;
    Ok(Json(users))
}

/// Search users by name
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "Users",
    params(SearchParams),
    responses(
        (status = 200, description = "Users whose name contains the fragment", body = Vec<User>)
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.search_users_by_name(&params.name).await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Total number of users
#[utoipa::path(
    get,
    path = "/api/users/count",
    tag = "Users",
    responses(
        (status = 200, description = "Total user count", body = u64)
    )
)]
pub async fn count_users(State(state): State<AppState>) -> AppResult<Json<u64>> {
    let count = state.user_service.count_users().await?;
    Ok(Json(count))
}

/// API health check
#[utoipa::path(
    get,
    path = "/api/users/health",
    tag = "Users",
    responses(
        (status = 200, description = "API is up", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}
