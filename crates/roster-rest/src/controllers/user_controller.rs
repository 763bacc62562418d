//! User management controller.

use crate::{
    extractors::{JsonBody, UserIdPath},
    responses::{created, not_found, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use roster_service::{DeleteUserResponse, UserPayload, UserResponse};
use tracing::debug;

/// Creates the user router.
///
/// Each path also answers with a trailing slash. Methods without a handler
/// fall through to the JSON 404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", collection_routes())
        .route("/users/", collection_routes())
        .route("/users/:id", member_routes())
        .route("/users/:id/", member_routes())
}

fn collection_routes() -> MethodRouter<AppState> {
    get(list_users).post(create_user).fallback(not_found)
}

fn member_routes() -> MethodRouter<AppState> {
    get(get_user)
        .put(update_user)
        .delete(delete_user)
        .fallback(not_found)
}

/// List all users.
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let response = state.user_service.list_users().await?;
    ok(response)
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Create user request");

    let response = state.user_service.create_user(payload).await?;
    Ok(created(response))
}

/// Get a user by ID.
async fn get_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", user_id);

    let response = state.user_service.get_user(user_id).await?;
    ok(response)
}

/// Replace a user's fields.
async fn update_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    JsonBody(payload): JsonBody<UserPayload>,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", user_id);

    let response = state.user_service.update_user(user_id, payload).await?;
    ok(response)
}

/// Delete a user.
async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<DeleteUserResponse> {
    debug!("Delete user request: {}", user_id);

    let user = state.user_service.delete_user(user_id).await?;
    ok(DeleteUserResponse::from(user))
}
