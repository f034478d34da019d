use crate::identity::{IdentityError, IdentityResult, IdentityStore, StoredIdentity};

use std::sync::Mutex;

/// Non-persistent store, for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    identity: Mutex<Option<StoredIdentity>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: StoredIdentity) -> Self {
        Self {
            identity: Mutex::new(Some(identity)),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> IdentityResult<Option<StoredIdentity>> {
        self.identity
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| IdentityError::poisoned())
    }

    fn save(&self, identity: &StoredIdentity) -> IdentityResult<()> {
        let mut guard = self.identity.lock().map_err(|_| IdentityError::poisoned())?;
        *guard = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> IdentityResult<()> {
        let mut guard = self.identity.lock().map_err(|_| IdentityError::poisoned())?;
        *guard = None;
        Ok(())
    }
}
