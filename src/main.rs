use std::io;

use notifier::{config::Config, demo};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let loaded = Config::load();

    init_tracing(loaded.as_ref().is_ok_and(|config| config.log_json));

    let config = Config::or_default(loaded);

    info!(
        filter_kinds = ?config.filter_kinds,
        validate_destinations = config.validate_destinations,
        "Configuration loaded"
    );

    match demo::run(&config, io::stdout().lock()) {
        Ok(records) => info!(deliveries = records.len(), "Demonstration finished"),
        Err(e) => error!(error = %e, "Demonstration stopped early"),
    }
}

// Logs go to stderr; stdout carries only delivery lines.
fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "notifier=info".into());

    let json_layer = log_json.then(|| fmt::layer().json().with_writer(io::stderr));
    let plain_layer = (!log_json).then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .init();
}
