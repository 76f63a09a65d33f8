// Keyfob — CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: add, find, list, generate.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::execute;

/// Keyfob — a small password manager for your local machine.
#[derive(Parser, Debug)]
#[command(name = "keyfob")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the credential store file (default: the platform data directory).
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a credential for a website. Replaces any existing entry.
    Add {
        /// The website the credential belongs to (exact key, case-sensitive).
        #[arg(long)]
        website: String,

        /// The email address or username for the account.
        #[arg(long)]
        email: String,

        /// The password to store. Omit and pass --generate to create one.
        #[arg(long, conflicts_with = "generate")]
        password: Option<String>,

        /// Generate a random password, store it, and copy it to the clipboard.
        #[arg(long)]
        generate: bool,
    },

    /// Look up the credential stored for a website.
    Find {
        /// The website to look up (exact key, case-sensitive).
        website: String,
    },

    /// List stored websites and their emails (no passwords).
    List,

    /// Generate a random password and copy it to the clipboard.
    Generate {
        /// Exact number of letters (default: a random count of 8 to 10).
        #[arg(long)]
        letters: Option<usize>,

        /// Exact number of digits (default: a random count of 2 to 5).
        #[arg(long)]
        digits: Option<usize>,

        /// Exact number of symbols (default: a random count of 2 to 5).
        #[arg(long)]
        symbols: Option<usize>,

        /// Print the password only; skip the clipboard copy.
        #[arg(long)]
        no_copy: bool,
    },
}
