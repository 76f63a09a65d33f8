// Keyfob — Credential Store Repository
//
// Implements the save/find/list operations over the JSON store file. Every
// operation reads the whole document and save rewrites it; a second save for
// the same website overwrites the first (no history kept).

use super::file::StoreFile;
use super::models::{Credential, CredentialSummary, NewCredential, StoredCredential};
use super::StoreError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over credential storage operations.
pub trait CredentialStore {
    /// Save a credential. An existing entry for the same website is replaced.
    fn save(&self, credential: NewCredential) -> Result<(), StoreError>;

    /// Look up a credential by exact website key. Case-sensitive.
    fn find(&self, website: &str) -> Result<Option<Credential>, StoreError>;

    /// List all credentials (website and email only, no passwords).
    fn list(&self) -> Result<Vec<CredentialSummary>, StoreError>;
}

// ─── JSON-file Implementation ────────────────────────────────────────────────

pub struct JsonCredentialStore<'a> {
    file: &'a StoreFile,
}

impl<'a> JsonCredentialStore<'a> {
    pub fn new(file: &'a StoreFile) -> Self {
        Self { file }
    }
}

impl<'a> CredentialStore for JsonCredentialStore<'a> {
    fn save(&self, credential: NewCredential) -> Result<(), StoreError> {
        let mut document = self.file.load()?;

        let replaced = document
            .insert(
                credential.website.clone(),
                StoredCredential {
                    email: credential.email,
                    password: credential.password,
                },
            )
            .is_some();

        self.file.save(&document)?;

        tracing::info!(
            website = %credential.website,
            replaced = replaced,
            "Credential stored successfully"
        );

        Ok(())
    }

    fn find(&self, website: &str) -> Result<Option<Credential>, StoreError> {
        let document = self.file.load()?;

        Ok(document.get(website).map(|value| {
            Credential::new(
                website.to_string(),
                value.email.clone(),
                value.password.clone(),
            )
        }))
    }

    fn list(&self) -> Result<Vec<CredentialSummary>, StoreError> {
        let document = self.file.load()?;

        // BTreeMap iteration gives the summaries sorted by website.
        Ok(document
            .into_iter()
            .map(|(website, value)| CredentialSummary {
                website,
                email: value.email,
            })
            .collect())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store(dir: &tempfile::TempDir) -> StoreFile {
        StoreFile::new(dir.path().join("credentials.json"))
    }

    #[test]
    fn test_save_then_find_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        store
            .save(NewCredential {
                website: "github.com".to_string(),
                email: "a@b.com".to_string(),
                password: "Xk9!mP".to_string(),
            })
            .unwrap();

        let cred = store
            .find("github.com")
            .unwrap()
            .expect("Credential should exist");
        assert_eq!(cred.website, "github.com");
        assert_eq!(cred.email, "a@b.com");
        assert_eq!(cred.password(), "Xk9!mP");
    }

    #[test]
    fn test_find_unknown_website_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        let result = store.find("never-saved.example").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        store
            .save(NewCredential {
                website: "GitHub.com".to_string(),
                email: "a@b.com".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();

        assert!(store.find("github.com").unwrap().is_none());
        assert!(store.find("GitHub.com").unwrap().is_some());
    }

    #[test]
    fn test_second_save_overwrites_first() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        store
            .save(NewCredential {
                website: "github.com".to_string(),
                email: "old@b.com".to_string(),
                password: "old-pw".to_string(),
            })
            .unwrap();
        store
            .save(NewCredential {
                website: "github.com".to_string(),
                email: "new@b.com".to_string(),
                password: "new-pw".to_string(),
            })
            .unwrap();

        let cred = store.find("github.com").unwrap().unwrap();
        assert_eq!(cred.email, "new@b.com");
        assert_eq!(cred.password(), "new-pw");

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 1, "Overwrite must not append a second entry");
    }

    #[test]
    fn test_save_preserves_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        for website in ["github.com", "slack.com", "aws.amazon.com"] {
            store
                .save(NewCredential {
                    website: website.to_string(),
                    email: format!("me@{}", website),
                    password: format!("pw-{}", website),
                })
                .unwrap();
        }

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(
            summaries.iter().map(|s| s.website.as_str()).collect::<Vec<_>>(),
            vec!["aws.amazon.com", "github.com", "slack.com"],
            "List should be sorted by website"
        );
    }

    #[test]
    fn test_list_summaries_never_contain_passwords() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        store
            .save(NewCredential {
                website: "github.com".to_string(),
                email: "a@b.com".to_string(),
                password: "secret-value".to_string(),
            })
            .unwrap();

        for summary in store.list().unwrap() {
            let json = serde_json::to_string(&summary).unwrap();
            assert!(
                !json.contains("secret-value"),
                "Summary must never contain password values"
            );
        }
    }

    #[test]
    fn test_find_on_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        assert!(store.find("github.com").unwrap().is_none());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_refuses_to_replace_corrupt_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").unwrap();

        let file = StoreFile::new(&path);
        let store = JsonCredentialStore::new(&file);

        let err = store
            .save(NewCredential {
                website: "github.com".to_string(),
                email: "a@b.com".to_string(),
                password: "pw".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));

        // The corrupt content must be left intact for the user to inspect.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_on_disk_shape_matches_contract() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup_store(&dir);
        let store = JsonCredentialStore::new(&file);

        store
            .save(NewCredential {
                website: "github.com".to_string(),
                email: "a@b.com".to_string(),
                password: "Xk9!mP".to_string(),
            })
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["github.com"]["email"], "a@b.com");
        assert_eq!(raw["github.com"]["password"], "Xk9!mP");
    }
}
