use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

// ---------------------
// | META TEST HELPERS |
// ---------------------

static TRACING_INIT: Once = Once::new();

/// Installs a logger honoring `RUST_LOG`, once per test binary
pub fn global_setup() {
    TRACING_INIT.call_once(|| {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    });
}
