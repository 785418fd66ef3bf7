//! Player collection repository.

use crate::{
    model::player::{sort_roster, Player},
    server::data::store::{JsonStore, StoreError},
};

/// Repository providing access to the players collection.
pub struct PlayerRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the collection version and all players in stored order.
    pub async fn get_all(&self) -> (u64, Vec<Player>) {
        self.store.players().get_all().await
    }

    /// Returns all players in roster order: trainers first, alphabetical
    /// within each group. This is the ordering reports follow.
    pub async fn get_all_ordered(&self) -> Vec<Player> {
        let (_, mut players) = self.store.players().get_all().await;
        sort_roster(&mut players);

        players
    }

    /// Replaces the players collection wholesale.
    ///
    /// # Arguments
    /// - `players` - The full new roster
    /// - `expected_version` - Optional compare-and-swap token
    ///
    /// # Returns
    /// - `Ok((version, players))` - The new version and the saved roster
    /// - `Err(StoreError)` - Version conflict or persistence failure
    pub async fn replace_all(
        &self,
        players: Vec<Player>,
        expected_version: Option<u64>,
    ) -> Result<(u64, Vec<Player>), StoreError> {
        self.store
            .players()
            .replace_all(players, expected_version)
            .await
    }
}
