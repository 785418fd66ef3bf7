use crate::{
    model::training::Training,
    server::{
        data::{store::JsonStore, training::TrainingRepository},
        error::AppError,
        model::collection::ReplaceParams,
        util::date,
    },
};

pub struct TrainingService<'a> {
    store: &'a JsonStore,
}

impl<'a> TrainingService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the collection version and all trainings in stored order.
    pub async fn get_all(&self) -> (u64, Vec<Training>) {
        TrainingRepository::new(self.store).get_all().await
    }

    /// Validates and applies a full replace of the trainings collection.
    ///
    /// Every training date must parse as a display date and is normalized to
    /// the canonical `"<Weekday>, DD.MM.YYYY"` form; range filtering compares
    /// parsed dates, but normalization keeps the stored strings zero-padded
    /// and prefixed consistently. Edit-audit stamps, when present, must parse
    /// as `DD.MM.YYYY HH:MM` and are normalized the same way.
    pub async fn replace_all(
        &self,
        params: ReplaceParams<Training>,
    ) -> Result<(u64, Vec<Training>), AppError> {
        params.ensure_reset()?;

        let mut trainings = Vec::with_capacity(params.list.len());
        for mut training in params.list {
            let day = date::parse_display(&training.date).map_err(|_| {
                AppError::BadRequest(format!("invalid training date '{}'", training.date))
            })?;
            training.date = date::format_display(day);

            if let Some(stamp) = &mut training.last_edited {
                let at = date::parse_timestamp(&stamp.at).map_err(|_| {
                    AppError::BadRequest(format!("invalid edit timestamp '{}'", stamp.at))
                })?;
                stamp.at = date::format_timestamp(at);
            }

            trainings.push(training);
        }

        Ok(TrainingRepository::new(self.store)
            .replace_all(trainings, params.expected_version)
            .await?)
    }
}
