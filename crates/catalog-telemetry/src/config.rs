//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Component within the service (gateway, cli, ...)
    pub component: String,

    /// `EnvFilter` directive, e.g. `info` or `cc_04_catalog_service=debug,info`
    pub log_level: String,

    /// Whether to write to stdout at all
    pub console_output: bool,

    /// One JSON object per line instead of human-readable text
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "catalog-anchor".to_string(),
            component: "node".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OTEL_SERVICE_NAME`: Service name (default: catalog-anchor)
    /// - `CATALOG_LOG_LEVEL` or `RUST_LOG`: Filter directive (default: info)
    /// - `CATALOG_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `CATALOG_JSON_LOGS`: JSON lines (default: false, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "catalog-anchor".to_string()),

            component: "node".to_string(),

            log_level: env::var("CATALOG_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("CATALOG_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("CATALOG_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),
        }
    }

    /// Configuration for a named component, e.g. `gateway` or `cli`.
    pub fn for_component(component: &str) -> Self {
        let mut config = Self::from_env();
        config.component = component.to_string();
        config
    }

    /// `service-component`, as it appears in log output.
    pub fn full_service_name(&self) -> String {
        format!("{}-{}", self.service_name, self.component)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
