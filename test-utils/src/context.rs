use std::path::Path;

use tempfile::TempDir;

/// A seeded test environment.
///
/// Owns the temporary data directory; it is removed when the context drops,
/// so every test runs against isolated collection files.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub(crate) fn new(dir: TempDir) -> Self {
        Self { dir }
    }

    /// Path of the data directory seeded for this test.
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }
}
