use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SaveListDto},
        player::Player,
    },
    server::{
        controller::COLLECTION_VERSION_HEADER, error::AppError, model::collection::ReplaceParams,
        service::player::PlayerService, state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Get all roster members.
///
/// Returns the entire players collection in stored order; the current
/// collection version is carried in the `x-collection-version` header.
///
/// # Arguments
/// - `state` - Application state containing the collection store
///
/// # Returns
/// - `200 OK` - The full roster
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "The full roster", body = Vec<Player>)
    ),
)]
pub async fn get_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (version, players) = PlayerService::new(&state.store).get_all().await;

    Ok((
        StatusCode::OK,
        [(COLLECTION_VERSION_HEADER, version.to_string())],
        Json(players),
    ))
}

/// Replace the players collection.
///
/// Replaces the stored roster wholesale with the submitted one. The body must
/// set `reset: true`; names must be non-empty and unique; non-empty join
/// dates must be valid `DD.MM.YYYY` dates and are normalized to zero-padded
/// form.
///
/// # Arguments
/// - `state` - Application state containing the collection store
/// - `payload` - Save body with the full new roster
///
/// # Returns
/// - `200 OK` - The saved roster, with the new version in the header
/// - `400 Bad Request` - Missing reset flag or invalid player data
/// - `409 Conflict` - Stale `expectedVersion`
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = SaveListDto<Player>,
    responses(
        (status = 200, description = "The saved roster", body = Vec<Player>),
        (status = 400, description = "Missing reset flag or invalid player data", body = ErrorDto),
        (status = 409, description = "Stale expectedVersion", body = ErrorDto)
    ),
)]
pub async fn save_players(
    State(state): State<AppState>,
    Json(payload): Json<SaveListDto<Player>>,
) -> Result<impl IntoResponse, AppError> {
    let params = ReplaceParams::from_dto(payload);

    let (version, saved) = PlayerService::new(&state.store).replace_all(params).await?;

    Ok((
        StatusCode::OK,
        [(COLLECTION_VERSION_HEADER, version.to_string())],
        Json(saved),
    ))
}
