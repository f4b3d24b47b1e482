//! Monkey command-line front end.
//!
//! The binary in `main.rs` only dispatches on arguments; everything it runs
//! lives in [`commands`] so it can be driven from tests with in-memory
//! input and output.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay nothing for
/// instrumentation. Spans render as an indented tree on stderr, which
/// follows the evaluator's recursion.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
