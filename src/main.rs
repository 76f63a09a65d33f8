// Keyfob — Application Entry Point
//
// Parses CLI arguments, initializes structured logging, and dispatches to
// the command handler.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use keyfob::cli::{execute, Cli};

fn main() {
    // Initialize tracing with env filter (RUST_LOG=keyfob=debug for verbose output).
    // The default level is `info`, which never includes password values.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keyfob=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
