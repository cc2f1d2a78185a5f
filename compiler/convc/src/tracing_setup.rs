//! Log output for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Nothing is installed unless `RUST_LOG` is set. With `CONVC_LOG_TREE`
/// set as well, events are printed as an indented span tree instead of
/// flat lines. All log output goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os("CONVC_LOG_TREE").is_some();
        let flat = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let nested = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2).with_targets(true)
        });
        tracing_subscriber::registry()
            .with(flat)
            .with(nested)
            .with(EnvFilter::from_default_env())
            .init();
    });
}
