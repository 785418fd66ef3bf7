use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Attendance percentages over an inclusive date range.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Number of trainings that fell into the range.
    pub training_count: usize,
    /// One entry per non-trainer player, in roster order.
    pub players: Vec<PlayerAttendanceDto>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttendanceDto {
    pub name: String,
    pub join_date: String,
    /// round(100 × attended / selected trainings), half up.
    pub percent: u32,
    pub details: Vec<TrainingDetailDto>,
}

/// Per-training line of a player's report entry.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDetailDto {
    /// Display date of the session, `"<Weekday>, DD.MM.YYYY"`.
    pub date: String,
    pub status_text: String,
}
