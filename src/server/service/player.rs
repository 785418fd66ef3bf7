use std::collections::HashSet;

use crate::{
    model::player::Player,
    server::{
        data::{player::PlayerRepository, store::JsonStore},
        error::AppError,
        model::collection::ReplaceParams,
        util::date,
    },
};

pub struct PlayerService<'a> {
    store: &'a JsonStore,
}

impl<'a> PlayerService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the collection version and all players in stored order.
    pub async fn get_all(&self) -> (u64, Vec<Player>) {
        PlayerRepository::new(self.store).get_all().await
    }

    /// Validates and applies a full replace of the players collection.
    ///
    /// Names must be non-empty and unique. A non-empty join date must parse
    /// as `DD.MM.YYYY` and is normalized to zero-padded form, so later
    /// comparisons against formatted dates cannot miss on padding.
    pub async fn replace_all(
        &self,
        params: ReplaceParams<Player>,
    ) -> Result<(u64, Vec<Player>), AppError> {
        params.ensure_reset()?;

        let mut seen = HashSet::new();
        let mut players = Vec::with_capacity(params.list.len());
        for mut player in params.list {
            if player.name.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "player name must not be empty".to_string(),
                ));
            }
            if !seen.insert(player.name.clone()) {
                return Err(AppError::BadRequest(format!(
                    "duplicate player name '{}'",
                    player.name
                )));
            }
            if !player.join_date.trim().is_empty() {
                let joined = date::parse_display(&player.join_date).map_err(|_| {
                    AppError::BadRequest(format!(
                        "invalid join date '{}' for player '{}'",
                        player.join_date, player.name
                    ))
                })?;
                player.join_date = joined.format(date::DATE_FORMAT).to_string();
            }
            players.push(player);
        }

        Ok(PlayerRepository::new(self.store)
            .replace_all(players, params.expected_version)
            .await?)
    }
}
