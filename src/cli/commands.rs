// Keyfob — CLI Command Handlers
//
// Each function handles one CLI subcommand. Input validation happens here,
// before the store is touched: an empty field or an implausible email aborts
// the action with nothing written to disk.

use std::path::{Path, PathBuf};

use crate::clipboard;
use crate::error::KeyfobError;
use crate::generator::{self, PasswordPolicy};
use crate::store::{CredentialStore, JsonCredentialStore, NewCredential, StoreFile};

use super::{Cli, Commands};

/// Default directory for Keyfob data files.
fn data_dir() -> PathBuf {
    let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("keyfob")
}

/// Path to the credential store file.
fn default_store_path() -> PathBuf {
    data_dir().join("credentials.json")
}

/// Execute the parsed CLI command.
pub fn execute(cli: Cli) -> Result<(), KeyfobError> {
    let store_path = cli.store.unwrap_or_else(default_store_path);

    match cli.command {
        Commands::Add {
            website,
            email,
            password,
            generate,
        } => cmd_add(&store_path, website, email, password, generate),
        Commands::Find { website } => cmd_find(&store_path, website),
        Commands::List => cmd_list(&store_path),
        Commands::Generate {
            letters,
            digits,
            symbols,
            no_copy,
        } => cmd_generate(letters, digits, symbols, no_copy),
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// The documented email check: an '@' and a '.' must be present.
/// Deliberately not full RFC validation.
fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

// ─── Add ─────────────────────────────────────────────────────────────────────

fn cmd_add(
    store_path: &Path,
    website: String,
    email: String,
    password: Option<String>,
    generate: bool,
) -> Result<(), KeyfobError> {
    if website.trim().is_empty() {
        return Err(KeyfobError::InvalidInput(
            "website must not be empty".to_string(),
        ));
    }
    if email.trim().is_empty() {
        return Err(KeyfobError::InvalidInput(
            "email must not be empty".to_string(),
        ));
    }
    if !is_plausible_email(&email) {
        return Err(KeyfobError::InvalidInput(format!(
            "'{}' does not look like an email address (expected an '@' and a '.')",
            email
        )));
    }

    let (password, generated) = match password {
        Some(p) if p.is_empty() => {
            return Err(KeyfobError::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }
        Some(p) => (p, false),
        None if generate => (generator::generate(&PasswordPolicy::default()), true),
        None => {
            return Err(KeyfobError::InvalidInput(
                "no password given: pass --password <value> or --generate".to_string(),
            ));
        }
    };

    let file = StoreFile::new(store_path);
    let store = JsonCredentialStore::new(&file);

    store.save(NewCredential {
        website: website.clone(),
        email,
        password: password.clone(),
    })?;

    println!("✓ Credential stored");
    println!("  Website: {}", website);
    if generated {
        // Shown exactly once so the user can record it; it is not logged.
        println!("  Password: {}", password);
        if let Err(e) = clipboard::copy(&password) {
            println!("Failed to copy to clipboard: {}", e);
        } else {
            println!("  (copied to clipboard)");
        }
    }

    Ok(())
}

// ─── Find ────────────────────────────────────────────────────────────────────

fn cmd_find(store_path: &Path, website: String) -> Result<(), KeyfobError> {
    let file = StoreFile::new(store_path);
    let store = JsonCredentialStore::new(&file);

    match store.find(&website)? {
        Some(cred) => {
            println!("Credential for {}:\n", cred.website);
            println!("  Email:    {}", cred.email);
            println!("  Password: {}", cred.password());
        }
        None => {
            println!("No details found for {}", website);
        }
    }

    Ok(())
}

// ─── List ────────────────────────────────────────────────────────────────────

fn cmd_list(store_path: &Path) -> Result<(), KeyfobError> {
    let file = StoreFile::new(store_path);
    let store = JsonCredentialStore::new(&file);

    let summaries = store.list()?;

    if summaries.is_empty() {
        println!("No credentials stored yet.");
        println!("Add one with: keyfob add --website <name> --email <address> --password <value>");
        return Ok(());
    }

    println!("Stored credentials ({}):\n", summaries.len());
    for summary in &summaries {
        println!("  {:30} │ {}", summary.website, summary.email);
    }

    Ok(())
}

// ─── Generate ────────────────────────────────────────────────────────────────

fn cmd_generate(
    letters: Option<usize>,
    digits: Option<usize>,
    symbols: Option<usize>,
    no_copy: bool,
) -> Result<(), KeyfobError> {
    let policy = resolve_policy(letters, digits, symbols);
    let password = generator::generate(&policy);

    println!("{}", password);

    if !no_copy {
        if let Err(e) = clipboard::copy(&password) {
            println!("Failed to copy to clipboard: {}", e);
        }
    }

    Ok(())
}

/// Build the generation policy, pinning any class whose count was given on
/// the command line and keeping the default range for the rest.
fn resolve_policy(
    letters: Option<usize>,
    digits: Option<usize>,
    symbols: Option<usize>,
) -> PasswordPolicy {
    let mut policy = PasswordPolicy::default();
    if let Some(n) = letters {
        policy.letters = n..=n;
    }
    if let Some(n) = digits {
        policy.digits = n..=n;
    }
    if let Some(n) = symbols {
        policy.symbols = n..=n;
    }
    policy
}

// ─── Tests ───────────────────────────────────────────────────────────────────
