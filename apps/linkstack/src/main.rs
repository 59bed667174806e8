//! # linkstack - console stack menu
//!
//! The main binary for the linkstack LIFO stack.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │           apps/linkstack (THE BINARY)        │
//! │                                              │
//! │   ┌─────────────┐        ┌──────────────┐    │
//! │   │    CLI      │        │  Menu / Demo │    │
//! │   │  (clap)     │───────▶│  (stdin/out) │    │
//! │   └─────────────┘        └──────┬───────┘    │
//! │                                 ▼            │
//! │                      ┌──────────────────┐    │
//! │                      │  linkstack-core  │    │
//! │                      │   (THE LOGIC)    │    │
//! │                      └──────────────────┘    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu on the linked backing
//! linkstack
//!
//! # Same menu on the vector backing, no banner
//! linkstack -q --backend vec menu
//!
//! # Scripted scenario
//! linkstack demo
//! ```

use clap::Parser;
use linkstack::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = cli::execute(&cli, stdin.lock(), stdout.lock()) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. Logs always go to stderr so they never
/// interleave with the menu on stdout.
///
/// LINKSTACK_LOG_FORMAT=json enables machine-parseable output; RUST_LOG
/// overrides the default filter.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("LINKSTACK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "linkstack=debug"
    } else {
        "linkstack=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the linkstack startup banner.
fn print_banner() {
    println!(
        r#"
  ┬  ┬┌┐┌┬┌─┌─┐┌┬┐┌─┐┌─┐┬┌─
  │  ││││├┴┐└─┐ │ ├─┤│  ├┴┐
  ┴─┘┴┘└┘┴ ┴└─┘ ┴ ┴ ┴└─┘┴ ┴

  linkstack v{}

  Last In • First Out • Singly Linked
"#,
        env!("CARGO_PKG_VERSION")
    );
}
