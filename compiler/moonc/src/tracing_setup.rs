//! Tracing subscriber setup.
//!
//! Logging is opt-in: nothing is installed unless `RUST_LOG` is set, so the
//! token dump on stdout is never interleaved with log output. Logs go to
//! stderr as an indented span tree.
//!
//! ```bash
//! RUST_LOG=debug moonc file.moon
//! RUST_LOG=moon_lexer=debug moonc file.moon
//! ```

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let tree_layer = HierarchicalLayer::default()
            .with_indent_amount(2)
            .with_indent_lines(true)
            .with_targets(true);

        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tree_layer)
            .init();
    });
}
