//! mdslice CLI - chunk markdown documents for retrieval indexing
//!
//! # Examples
//!
//! ```bash
//! # Slice one document
//! mdslice slice notes/guide.md -o out/
//!
//! # Slice a whole directory with overlap injection
//! mdslice slice docs/ --enable-overlap
//!
//! # Show effective configuration
//! mdslice show-config
//! ```

use clap::Parser;
use mdslice::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logging goes to stderr so stdout stays scriptable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("MDSLICE_LOG")
                .unwrap_or_else(|_| "mdslice=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
