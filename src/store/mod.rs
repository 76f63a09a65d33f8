// Keyfob — Store Module
//
// Credential storage backed by a single JSON document on disk. The whole
// mapping is read and rewritten on every operation; the last write for a
// website key wins.

mod error;
mod file;
mod models;
mod repository;

pub use error::StoreError;
pub use file::{Document, StoreFile};
pub use models::{Credential, CredentialSummary, NewCredential, StoredCredential};
pub use repository::{CredentialStore, JsonCredentialStore};
