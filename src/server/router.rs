use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{player, report, training, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "teamboard API",
    description = "REST backend for roster, training and attendance management"
))]
struct ApiDoc;

/// Builds the application router.
///
/// Registers the collection and report endpoints, collects their OpenAPI
/// documentation, and serves the interactive docs at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::save_users))
        .routes(routes!(player::get_players, player::save_players))
        .routes(routes!(training::get_trainings, training::save_trainings))
        .routes(routes!(report::get_attendance_report))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
