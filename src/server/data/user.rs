//! User collection repository.

use crate::{
    model::user::User,
    server::data::store::{JsonStore, StoreError},
};

/// Repository providing access to the users collection.
pub struct UserRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> UserRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the collection version and all users in stored order.
    pub async fn get_all(&self) -> (u64, Vec<User>) {
        self.store.users().get_all().await
    }

    /// Checks whether a user with the given name exists.
    ///
    /// # Arguments
    /// - `name` - Account name to look up, compared exactly
    ///
    /// # Returns
    /// - `true` - A stored user carries that name
    /// - `false` - No such user
    pub async fn exists(&self, name: &str) -> bool {
        let (_, users) = self.store.users().get_all().await;

        users.iter().any(|user| user.name == name)
    }

    /// Replaces the users collection wholesale.
    ///
    /// # Arguments
    /// - `users` - The full new user list
    /// - `expected_version` - Optional compare-and-swap token
    ///
    /// # Returns
    /// - `Ok((version, users))` - The new version and the saved list
    /// - `Err(StoreError)` - Version conflict or persistence failure
    pub async fn replace_all(
        &self,
        users: Vec<User>,
        expected_version: Option<u64>,
    ) -> Result<(u64, Vec<User>), StoreError> {
        self.store.users().replace_all(users, expected_version).await
    }
}
