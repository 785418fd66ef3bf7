use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A roster member, either a regular player or a trainer.
///
/// The name doubles as the key into the per-training status maps, so renaming
/// a player orphans their prior attendance records.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub is_trainer: bool,
    /// Date the player joined the team, in `DD.MM.YYYY` display format.
    pub join_date: String,
    #[serde(default)]
    pub note: String,
}

/// Sorts a roster in display order: trainers first, then alphabetically by
/// name within each group.
pub fn sort_roster(players: &mut [Player]) {
    players.sort_by(|a, b| {
        b.is_trainer
            .cmp(&a.is_trainer)
            .then_with(|| a.name.cmp(&b.name))
    });
}
