use serde_json::{json, Map, Value};

/// Creates a training record fixture with participant icons.
///
/// # Arguments
/// - `date` - Display date, e.g. `"Mo, 02.06.2025"`
/// - `participants` - Pairs of player name and attendance icon
pub fn training(date: &str, participants: &[(&str, &str)]) -> Value {
    json!({
        "date": date,
        "participants": icon_map(participants),
        "trainerStatus": {},
        "createdBy": "fixture"
    })
}

/// Creates a training record fixture with participant icons and trainer
/// commitments.
///
/// # Arguments
/// - `date` - Display date, e.g. `"Mo, 02.06.2025"`
/// - `participants` - Pairs of player name and attendance icon
/// - `trainer_status` - Pairs of trainer name and status text
pub fn training_with_trainers(
    date: &str,
    participants: &[(&str, &str)],
    trainer_status: &[(&str, &str)],
) -> Value {
    json!({
        "date": date,
        "participants": icon_map(participants),
        "trainerStatus": icon_map(trainer_status),
        "createdBy": "fixture"
    })
}

fn icon_map(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_string(), json!(value)))
        .collect()
}
