//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives: request traces from `tower_http` on, sqlx
/// statement logging off. `RUST_LOG` overrides the whole set.
const DEFAULT_DIRECTIVES: &str = "info,tower_http=debug,sqlx=warn";

pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .init();
}
