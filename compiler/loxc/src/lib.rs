//! The Lox interpreter.
//!
//! [`Session`] wires scanner, parser and interpreter together and turns
//! every fault into a diagnostic for its reporter. Each run returns a
//! [`RunOutcome`] instead of setting process-wide error flags, so one
//! session can serve a whole interactive loop.

pub mod commands;
pub mod exit_code;
mod session;

pub use session::{RunOutcome, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set, so program output stays exactly
/// what the script printed. Events render as an indented tree on stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
