//! Training collection repository.

use chrono::NaiveDate;

use crate::{
    model::training::Training,
    server::{
        data::store::{JsonStore, StoreError},
        util::date,
    },
};

/// Repository providing access to the trainings collection.
pub struct TrainingRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> TrainingRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the collection version and all trainings in stored order.
    pub async fn get_all(&self) -> (u64, Vec<Training>) {
        self.store.trainings().get_all().await
    }

    /// Selects trainings whose date lies in `[from, to]`, both ends
    /// inclusive, ordered by date ascending.
    ///
    /// Trainings whose display date does not parse are not selected; the
    /// service layer rejects such dates on save, so they can only occur in
    /// hand-edited collection files.
    ///
    /// # Arguments
    /// - `from` - First day of the range
    /// - `to` - Last day of the range
    ///
    /// # Returns
    /// - The matching trainings, sorted by date ascending
    pub async fn get_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<Training> {
        let (_, trainings) = self.store.trainings().get_all().await;

        let mut selected: Vec<(NaiveDate, Training)> = trainings
            .into_iter()
            .filter_map(|training| match date::parse_display(&training.date) {
                Ok(day) if from <= day && day <= to => Some((day, training)),
                _ => None,
            })
            .collect();
        selected.sort_by_key(|(day, _)| *day);

        selected.into_iter().map(|(_, training)| training).collect()
    }

    /// Replaces the trainings collection wholesale.
    ///
    /// # Arguments
    /// - `trainings` - The full new training list
    /// - `expected_version` - Optional compare-and-swap token
    ///
    /// # Returns
    /// - `Ok((version, trainings))` - The new version and the saved list
    /// - `Err(StoreError)` - Version conflict or persistence failure
    pub async fn replace_all(
        &self,
        trainings: Vec<Training>,
        expected_version: Option<u64>,
    ) -> Result<(u64, Vec<Training>), StoreError> {
        self.store
            .trainings()
            .replace_all(trainings, expected_version)
            .await
    }
}
