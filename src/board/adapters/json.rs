//! JSON-file snapshot store backed by a capability-scoped directory.
//!
//! Each scope persists to one `<scope>.json` file holding the serialized
//! [`SnapshotSet`]. Commit writes a sibling temp file and renames it over
//! the target, so a crash mid-write leaves the previous state intact and
//! the next load never observes a half-written mapping.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::Write;

use crate::board::{
    domain::ScopeId,
    ports::{SnapshotSet, SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Snapshot store persisting one JSON file per scope.
///
/// All file access goes through a [`Dir`] capability, so a hostile scope
/// identifier cannot escape the store directory.
#[derive(Debug)]
pub struct JsonSnapshotStore {
    dir: Dir,
}

impl JsonSnapshotStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> SnapshotStoreResult<Self> {
        std::fs::create_dir_all(path.as_std_path()).map_err(SnapshotStoreError::io)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(SnapshotStoreError::io)?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    fn file_name(scope: &ScopeId) -> String {
        format!("{scope}.json")
    }

    fn temp_name(scope: &ScopeId) -> String {
        format!("{scope}.json.tmp")
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn load(&self, scope: &ScopeId) -> SnapshotStoreResult<SnapshotSet> {
        let contents = match self.dir.read_to_string(Self::file_name(scope)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SnapshotSet::new());
            }
            Err(err) => return Err(SnapshotStoreError::io(err)),
        };

        serde_json::from_str(&contents).map_err(|err| SnapshotStoreError::corrupt(scope, err))
    }

    async fn commit(&self, scope: &ScopeId, snapshots: &SnapshotSet) -> SnapshotStoreResult<()> {
        let payload =
            serde_json::to_vec_pretty(snapshots).map_err(SnapshotStoreError::io)?;

        let temp_name = Self::temp_name(scope);
        let mut file = self.dir.create(&temp_name).map_err(SnapshotStoreError::io)?;
        file.write_all(&payload).map_err(SnapshotStoreError::io)?;
        file.sync_all().map_err(SnapshotStoreError::io)?;
        drop(file);

        self.dir
            .rename(&temp_name, &self.dir, Self::file_name(scope))
            .map_err(SnapshotStoreError::io)
    }
}
