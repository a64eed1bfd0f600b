//! Tracing subscriber setup shared by the service binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise `crate_target` logs at `level`
/// and tower_http request traces at info.
pub fn init(crate_target: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}={},tower_http=info", crate_target, level).into());

    // try_init: tests and repeated calls must not panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
