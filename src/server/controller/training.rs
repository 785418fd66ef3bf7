use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SaveListDto},
        training::Training,
    },
    server::{
        controller::COLLECTION_VERSION_HEADER, error::AppError, model::collection::ReplaceParams,
        service::training::TrainingService, state::AppState,
    },
};

/// Tag for grouping training endpoints in OpenAPI documentation
pub static TRAINING_TAG: &str = "training";

/// Get all training sessions.
///
/// Returns the entire trainings collection in stored order; the current
/// collection version is carried in the `x-collection-version` header.
///
/// # Arguments
/// - `state` - Application state containing the collection store
///
/// # Returns
/// - `200 OK` - The full training list
#[utoipa::path(
    get,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    responses(
        (status = 200, description = "The full training list", body = Vec<Training>)
    ),
)]
pub async fn get_trainings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (version, trainings) = TrainingService::new(&state.store).get_all().await;

    Ok((
        StatusCode::OK,
        [(COLLECTION_VERSION_HEADER, version.to_string())],
        Json(trainings),
    ))
}

/// Replace the trainings collection.
///
/// Replaces the stored training list wholesale with the submitted one. The
/// body must set `reset: true`; every training date must be a valid display
/// date and is normalized to `"<Weekday>, DD.MM.YYYY"`; edit-audit stamps
/// must be valid `DD.MM.YYYY HH:MM` timestamps when present.
///
/// # Arguments
/// - `state` - Application state containing the collection store
/// - `payload` - Save body with the full new training list
///
/// # Returns
/// - `200 OK` - The saved list, with the new version in the header
/// - `400 Bad Request` - Missing reset flag or invalid training data
/// - `409 Conflict` - Stale `expectedVersion`
#[utoipa::path(
    post,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    request_body = SaveListDto<Training>,
    responses(
        (status = 200, description = "The saved training list", body = Vec<Training>),
        (status = 400, description = "Missing reset flag or invalid training data", body = ErrorDto),
        (status = 409, description = "Stale expectedVersion", body = ErrorDto)
    ),
)]
pub async fn save_trainings(
    State(state): State<AppState>,
    Json(payload): Json<SaveListDto<Training>>,
) -> Result<impl IntoResponse, AppError> {
    let params = ReplaceParams::from_dto(payload);

    let (version, saved) = TrainingService::new(&state.store)
        .replace_all(params)
        .await?;

    Ok((
        StatusCode::OK,
        [(COLLECTION_VERSION_HEADER, version.to_string())],
        Json(saved),
    ))
}
