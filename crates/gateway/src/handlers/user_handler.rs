//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::{AppResult, ErrorResponse};
use domain::{UserResponse, USERS_PATH};

use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route(USERS_PATH, get(list_users))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all registered users", body = Vec<UserResponse>),
        (status = 500, description = "The users could not be loaded", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.get_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
