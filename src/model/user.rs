use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An account that can sign in to the application.
///
/// Passwords are stored and compared in plaintext; hardening the login is an
/// explicit non-goal of this system.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
pub struct User {
    pub name: String,
    pub password: String,
}
