use std::collections::HashSet;

use crate::{
    model::user::User,
    server::{
        data::{store::JsonStore, user::UserRepository},
        error::AppError,
        model::collection::ReplaceParams,
    },
};

/// The super-user account that must never disappear from the collection.
pub const PROTECTED_ADMIN: &str = "Matthias";

pub struct UserService<'a> {
    store: &'a JsonStore,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the collection version and all users.
    pub async fn get_all(&self) -> (u64, Vec<User>) {
        UserRepository::new(self.store).get_all().await
    }

    /// Validates and applies a full replace of the users collection.
    ///
    /// Rules enforced, in order: the reset flag must be set, every name must
    /// be non-empty, names must be unique, and the protected admin account
    /// may not be dropped from a collection that currently contains it.
    pub async fn replace_all(
        &self,
        params: ReplaceParams<User>,
    ) -> Result<(u64, Vec<User>), AppError> {
        params.ensure_reset()?;

        let mut seen = HashSet::new();
        for user in &params.list {
            if user.name.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "user name must not be empty".to_string(),
                ));
            }
            if !seen.insert(user.name.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "duplicate user name '{}'",
                    user.name
                )));
            }
        }

        let repo = UserRepository::new(self.store);

        let admin_kept = params.list.iter().any(|user| user.name == PROTECTED_ADMIN);
        if !admin_kept && repo.exists(PROTECTED_ADMIN).await {
            return Err(AppError::BadRequest(format!(
                "the admin account '{PROTECTED_ADMIN}' cannot be deleted"
            )));
        }

        Ok(repo.replace_all(params.list, params.expected_version).await?)
    }
}
