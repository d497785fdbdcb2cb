//! Tracing subscriber setup for the service.

use episodic_error::ConfigError;
use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "observability")]
use opentelemetry::{KeyValue, global, trace::TracerProvider};
#[cfg(feature = "observability")]
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
#[cfg(feature = "observability")]
use opentelemetry_stdout::SpanExporter;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoggingConfig {
    /// Service name attached to exported spans
    pub service_name: String,
    /// Service version attached to exported spans
    pub service_version: String,
    /// Filter used when `RUST_LOG` is unset (e.g., "info", "debug")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub json_logs: bool,
}

impl LoggingConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the fallback log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Filter to install: `RUST_LOG` when set, else the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        match env::var(EnvFilter::DEFAULT_ENV) {
            Ok(directives) if !directives.is_empty() => EnvFilter::try_new(&directives)
                .map_err(|e| ConfigError::new(format!("Invalid RUST_LOG '{}': {}", directives, e))),
            _ => EnvFilter::try_new(&self.log_level).map_err(|e| {
                ConfigError::new(format!("Invalid log level '{}': {}", self.log_level, e))
            }),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the global tracing subscriber.
///
/// With the `observability` feature, spans are also exported through
/// OpenTelemetry to stdout.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    #[cfg(feature = "observability")]
    let subscriber = {
        let resource = Resource::builder()
            .with_service_name(config.service_name.clone())
            .with_attributes(vec![KeyValue::new(
                "service.version",
                config.service_version.clone(),
            )])
            .build();

        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_resource(resource)
            .build();
        global::set_tracer_provider(provider.clone());

        let tracer = provider.tracer(config.service_name.clone());
        subscriber.with(tracing_opentelemetry::layer().with_tracer(tracer))
    };

    subscriber
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))
}
