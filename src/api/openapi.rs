//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UpdateUser, User};

/// OpenAPI documentation for the User Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "A CRUD API for user records with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::get_user_by_email,
        user_handler::list_users_by_department,
        user_handler::search_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::count_users,
        user_handler::health_check,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
