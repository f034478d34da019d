use crate::identity::StoredIdentity;

/// Result of loading identity - distinguishes "not found" from corruption.
#[derive(Debug)]
pub struct LoadResult {
    pub identity: Option<StoredIdentity>,
    /// Present if file exists but is corrupted
    pub corruption_error: Option<String>,
}
