// Keyfob — Credential data models
//
// SECURITY: password fields are intentionally private. They are never
// included in Debug output or log messages. Access goes through explicit
// getter methods.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A full credential record returned by lookups.
/// The `password` field is private — access only via `password()`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    pub website: String,
    pub email: String,
    /// The stored password — never printed in logs or Debug-displayed
    password: String,
}

impl Credential {
    pub fn new(website: String, email: String, password: String) -> Self {
        Self {
            website,
            email,
            password,
        }
    }

    /// Access the raw password value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Custom Debug implementation that NEVER reveals the password.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("website", &self.website)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Custom Display that shows a human-readable summary without the password.
impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.website, self.email)
    }
}

/// A lightweight view of a credential, used for listing.
/// Never contains the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialSummary {
    pub website: String,
    pub email: String,
}

impl fmt::Display for CredentialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.website, self.email)
    }
}

/// Input struct for saving a credential.
pub struct NewCredential {
    pub website: String,
    pub email: String,
    pub password: String,
}

/// The on-disk value shape: `website` maps to `{ "email": ..., "password": ... }`.
/// This layout is contractual; the store file must stay readable as exactly
/// this mapping.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub email: String,
    pub password: String,
}

/// Debug output for the on-disk shape redacts the password too.
impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
