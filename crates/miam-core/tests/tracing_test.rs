use miam_core::config::LoggingConfig;
use miam_core::tracing::{init_tracing, init_tracing_with_filter};

#[test]
fn init_tracing_is_idempotent() {
    let logging = LoggingConfig {
        level: Some("debug".into()),
        ..Default::default()
    };
    init_tracing(&logging);
    init_tracing(&logging);
    init_tracing_with_filter("miam=trace");
    tracing::info!("tracing initialized");
}
