//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter variable checked first.
pub const LOG_ENV: &str = "SLIP_LOG";

/// When set, events are rendered as an indented span tree.
pub const LOG_TREE_ENV: &str = "SLIP_LOG_TREE";

/// Install a global subscriber if `SLIP_LOG` or `RUST_LOG` is set.
///
/// The filter uses `EnvFilter` syntax (`slip_eval=trace,info`). Safe to call
/// more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var(LOG_ENV).is_ok() {
            EnvFilter::from_env(LOG_ENV)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var(LOG_TREE_ENV).is_ok() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}
