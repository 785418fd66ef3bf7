use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SaveListDto},
        user::User,
    },
    server::{
        controller::COLLECTION_VERSION_HEADER, error::AppError, model::collection::ReplaceParams,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// Returns the entire users collection; the current collection version is
/// carried in the `x-collection-version` response header.
///
/// # Arguments
/// - `state` - Application state containing the collection store
///
/// # Returns
/// - `200 OK` - The full user list
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The full user list", body = Vec<User>)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (version, users) = UserService::new(&state.store).get_all().await;

    Ok((
        StatusCode::OK,
        [(COLLECTION_VERSION_HEADER, version.to_string())],
        Json(users),
    ))
}

/// Replace the users collection.
///
/// Replaces the stored user list wholesale with the submitted one. The body
/// must set `reset: true`; names must be non-empty and unique; the protected
/// admin account cannot be dropped.
///
/// # Arguments
/// - `state` - Application state containing the collection store
/// - `payload` - Save body with the full new user list
///
/// # Returns
/// - `200 OK` - The saved list, with the new version in the header
/// - `400 Bad Request` - Missing reset flag or invalid user data
/// - `409 Conflict` - Stale `expectedVersion`
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = SaveListDto<User>,
    responses(
        (status = 200, description = "The saved user list", body = Vec<User>),
        (status = 400, description = "Missing reset flag or invalid user data", body = ErrorDto),
        (status = 409, description = "Stale expectedVersion", body = ErrorDto)
    ),
)]
pub async fn save_users(
    State(state): State<AppState>,
    Json(payload): Json<SaveListDto<User>>,
) -> Result<impl IntoResponse, AppError> {
    let params = ReplaceParams::from_dto(payload);

    let (version, saved) = UserService::new(&state.store).replace_all(params).await?;

    Ok((
        StatusCode::OK,
        [(COLLECTION_VERSION_HEADER, version.to_string())],
        Json(saved),
    ))
}
