use crate::identity::{
    IdentityError, IdentityResult, IdentityStore, LoadResult, StorageStep, StoredIdentity,
};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Identity kept as a JSON file, normally `<config dir>/identity.json`.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the identity file without acting on corruption.
    ///
    /// Returns:
    /// - `Ok(LoadResult { identity: Some(...), corruption_error: None })` - loaded successfully
    /// - `Ok(LoadResult { identity: None, corruption_error: None })` - file doesn't exist (first launch)
    /// - `Ok(LoadResult { identity: None, corruption_error: Some(...) })` - file exists but corrupted
    pub fn load_detailed(&self) -> IdentityResult<LoadResult> {
        if !self.path.exists() {
            info!("No identity file at {:?} (first launch)", self.path);
            return Ok(LoadResult {
                identity: None,
                corruption_error: None,
            });
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| IdentityError::storage(StorageStep::Read, &self.path, e))?;

        match serde_json::from_str::<StoredIdentity>(&contents) {
            Ok(identity) => {
                info!(
                    "Loaded identity: {} (schema v{})",
                    identity.user_id, identity.schema_version
                );
                Ok(LoadResult {
                    identity: Some(identity),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Identity file corrupted at {:?}: {e}", self.path);
                Ok(LoadResult {
                    identity: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    /// Backs up a corrupted identity file for debugging.
    ///
    /// Renames `identity.json` to `identity.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> IdentityResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.sibling(&format!("corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .map_err(|e| IdentityError::storage(StorageStep::Backup, &self.path, e))?;

        warn!("Backed up corrupted identity to {backup_path:?}");
        Ok(Some(backup_path))
    }

    /// `<file name>.<suffix>` next to the identity file
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

impl IdentityStore for FileIdentityStore {
    /// A corrupted file is backed up and treated as "not registered".
    fn load(&self) -> IdentityResult<Option<StoredIdentity>> {
        let result = self.load_detailed()?;
        if result.corruption_error.is_some() {
            self.backup_corrupted()?;
        }
        Ok(result.identity)
    }

    /// Saves the identity using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&self, identity: &StoredIdentity) -> IdentityResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .map_err(|e| IdentityError::storage(StorageStep::CreateDir, dir, e))?;
        }

        let temp_path = self.sibling(&format!("tmp.{}", std::process::id()));

        // Pretty printed for debuggability
        let json = serde_json::to_string_pretty(identity)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| IdentityError::storage(StorageStep::Write, &temp_path, e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| IdentityError::storage(StorageStep::Write, &temp_path, e))?;

            file.sync_all()
                .map_err(|e| IdentityError::storage(StorageStep::Write, &temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            IdentityError::storage(StorageStep::Rename, &self.path, e)
        })?;

        info!("Saved identity: {}", identity.user_id);
        Ok(())
    }

    fn clear(&self) -> IdentityResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared identity at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IdentityError::storage(StorageStep::Remove, &self.path, e)),
        }
    }
}
