pub(crate) mod error;
pub(crate) mod file_identity_store;
pub(crate) mod identity_store;
pub(crate) mod load_result;
pub(crate) mod memory_identity_store;
pub(crate) mod stored_identity;

pub use error::{IdentityError, Result as IdentityResult, StorageStep};
pub use file_identity_store::FileIdentityStore;
pub use identity_store::IdentityStore;
pub use load_result::LoadResult;
pub use memory_identity_store::MemoryIdentityStore;
pub use stored_identity::StoredIdentity;
