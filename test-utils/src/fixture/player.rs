use serde_json::{json, Value};

/// Creates a non-trainer player record fixture.
///
/// # Arguments
/// - `name` - Player name, also the key used in training status maps
/// - `join_date` - Join date in `DD.MM.YYYY` display format
pub fn player(name: &str, join_date: &str) -> Value {
    json!({ "name": name, "isTrainer": false, "joinDate": join_date, "note": "" })
}

/// Creates a trainer record fixture.
pub fn trainer(name: &str, join_date: &str) -> Value {
    json!({ "name": name, "isTrainer": true, "joinDate": join_date, "note": "" })
}
