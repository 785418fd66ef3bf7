use crate::{
    model::{
        report::{AttendanceReportDto, PlayerAttendanceDto, TrainingDetailDto},
        training::AttendanceIcon,
    },
    server::{
        data::{player::PlayerRepository, store::JsonStore, training::TrainingRepository},
        error::AppError,
        model::report::ReportRange,
        util::date,
    },
};

pub struct ReportService<'a> {
    store: &'a JsonStore,
}

impl<'a> ReportService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Computes the attendance report over an inclusive date range.
    ///
    /// Selects the trainings in range (both boundary days included) and
    /// produces one entry per non-trainer player in roster order: percentage
    /// of selected trainings with an attending icon, plus a per-training
    /// detail line of date and status phrase. The percentage is computed over
    /// the whole range regardless of the player's join date.
    ///
    /// # Arguments
    /// - `range` - Validated inclusive date range
    ///
    /// # Returns
    /// - `Ok(AttendanceReportDto)` - The report
    /// - `Err(AppError::NotFound)` - No training falls inside the range; a
    ///   report over zero trainings is refused rather than reported as 0%
    pub async fn attendance(&self, range: ReportRange) -> Result<AttendanceReportDto, AppError> {
        let trainings = TrainingRepository::new(self.store)
            .get_in_range(range.from, range.to)
            .await;
        if trainings.is_empty() {
            return Err(AppError::NotFound(format!(
                "no trainings between {} and {}",
                range.from.format(date::DATE_FORMAT),
                range.to.format(date::DATE_FORMAT)
            )));
        }

        let total = trainings.len();
        let players = PlayerRepository::new(self.store)
            .get_all_ordered()
            .await
            .into_iter()
            .filter(|player| !player.is_trainer)
            .map(|player| {
                let mut attended = 0usize;
                let details = trainings
                    .iter()
                    .map(|training| {
                        let icon = training.icon_for(&player.name);
                        if icon == AttendanceIcon::Attending {
                            attended += 1;
                        }
                        TrainingDetailDto {
                            date: training.date.clone(),
                            status_text: icon.phrase().to_string(),
                        }
                    })
                    .collect();

                PlayerAttendanceDto {
                    name: player.name,
                    join_date: player.join_date,
                    percent: percentage(attended, total),
                    details,
                }
            })
            .collect();

        Ok(AttendanceReportDto {
            from: range.from,
            to: range.to,
            training_count: total,
            players,
        })
    }
}

/// round(100 × attended / total), ties rounding half up. `total` is never
/// zero here; an empty selection aborts the report before this point.
fn percentage(attended: usize, total: usize) -> u32 {
    (attended as f64 * 100.0 / total as f64).round() as u32
}
