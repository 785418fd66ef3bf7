use serde_json::{json, Value};

/// Creates a user record fixture.
pub fn user(name: &str, password: &str) -> Value {
    json!({ "name": name, "password": password })
}
