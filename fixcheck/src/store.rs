use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::error::Error;

/// Read-only lookup of fixture bytes by logical name.
///
/// Names resolve to files directly under the store root. Resolution is
/// case-sensitive: `testZIP.zip` and `testZip.zip` are two distinct fixtures.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the whole body of the named fixture.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceMissing` if no fixture by that name exists, or
    /// `Error::Io` if the file cannot be read.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn read(&self, name: &str) -> Result<Vec<u8>, Error> {
        let path = self.root.join(name);
        if !path.is_file() {
            tracing::error!(name, "fixture lookup failed");
            return Err(Error::ResourceMissing(name.to_owned()));
        }
        Ok(std::fs::read(path)?)
    }
}

impl Default for FixtureStore {
    /// Store rooted at the conventional `tests/fixtures` directory.
    fn default() -> Self {
        Self::new("tests/fixtures")
    }
}
