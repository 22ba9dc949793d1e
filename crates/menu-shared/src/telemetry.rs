//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetrySettings;

pub fn init_telemetry(settings: &TelemetrySettings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(settings.json.then(|| fmt::layer().json()))
        .with((!settings.json).then(|| fmt::layer().pretty()))
        .init();
}
