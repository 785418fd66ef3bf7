use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, report::AttendanceReportDto},
    server::{
        error::AppError, model::report::ReportRange, service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

#[derive(Deserialize)]
pub struct ReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Get the attendance report over a date range.
///
/// Computes, for every non-trainer player, the percentage of trainings inside
/// the inclusive range `[from, to]` with an attending status, plus a
/// per-training detail list. Players appear in roster order.
///
/// # Arguments
/// - `state` - Application state containing the collection store
/// - `query` - Range boundaries as ISO dates (`YYYY-MM-DD`)
///
/// # Returns
/// - `200 OK` - The attendance report
/// - `400 Bad Request` - End date before start date
/// - `404 Not Found` - No training falls inside the range
#[utoipa::path(
    get,
    path = "/api/reports/attendance",
    tag = REPORT_TAG,
    params(
        ("from" = NaiveDate, Query, description = "First day of the range, inclusive (ISO format)"),
        ("to" = NaiveDate, Query, description = "Last day of the range, inclusive (ISO format)")
    ),
    responses(
        (status = 200, description = "The attendance report", body = AttendanceReportDto),
        (status = 400, description = "End date before start date", body = ErrorDto),
        (status = 404, description = "No training falls inside the range", body = ErrorDto)
    ),
)]
pub async fn get_attendance_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = ReportRange::new(query.from, query.to)?;

    let report = ReportService::new(&state.store).attendance(range).await?;

    Ok((StatusCode::OK, Json(report)))
}
