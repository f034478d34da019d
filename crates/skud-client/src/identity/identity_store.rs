use crate::identity::{IdentityResult, StoredIdentity};

/// Client-side storage for the single persisted identity.
///
/// Each call is atomic on its own; callers never hold a lock across calls.
pub trait IdentityStore: Send + Sync {
    /// `Ok(None)` when nothing has been registered on this device.
    fn load(&self) -> IdentityResult<Option<StoredIdentity>>;

    /// Replace the stored identity.
    fn save(&self, identity: &StoredIdentity) -> IdentityResult<()>;

    /// Forget the stored identity. Clearing an empty store is not an error.
    fn clear(&self) -> IdentityResult<()>;
}
