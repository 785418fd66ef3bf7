use serde_json::Value;
use tempfile::TempDir;

use crate::{context::TestContext, error::TestError};

/// Builder for seeding a temporary data directory with collection fixtures.
///
/// Use the fluent interface to add collection contents, then call `build()`
/// to write each as a pretty-printed JSON file into a fresh temp directory.
/// Collections that are not added simply have no file, which a store opens
/// as empty.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_players(json!([fixture::player("Anna", false, "01.01.2024")]))
///     .build()
///     .unwrap();
/// let store = JsonStore::open(test.data_dir()).await.unwrap();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    collections: Vec<(&'static str, Value)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the users collection.
    pub fn with_users(self, users: Value) -> Self {
        self.with_collection("users", users)
    }

    /// Seeds the players collection.
    pub fn with_players(self, players: Value) -> Self {
        self.with_collection("players", players)
    }

    /// Seeds the trainings collection.
    pub fn with_trainings(self, trainings: Value) -> Self {
        self.with_collection("trainings", trainings)
    }

    /// Seeds an arbitrary collection file, useful for corrupt-content cases.
    ///
    /// # Arguments
    /// - `name` - Collection name; the file is written as `<name>.json`
    /// - `content` - JSON content written verbatim
    pub fn with_collection(mut self, name: &'static str, content: Value) -> Self {
        self.collections.push((name, content));
        self
    }

    /// Writes the configured fixtures into a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the seeded directory
    /// - `Err(TestError)` - Directory creation or a file write failed
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = TempDir::new()?;
        for (name, content) in &self.collections {
            let path = dir.path().join(format!("{name}.json"));
            std::fs::write(path, serde_json::to_vec_pretty(content)?)?;
        }

        Ok(TestContext::new(dir))
    }
}
