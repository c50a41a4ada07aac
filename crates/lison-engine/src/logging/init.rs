use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "lison_engine=trace,warn"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &self.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(self.default_level);
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // Another logger may already be installed (e.g. by a test harness).
        if config.builder().try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        let config = LoggingConfig::default();
        assert_eq!(config.default_level, log::LevelFilter::Warn);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn explicit_filter_is_kept() {
        let config = LoggingConfig::with_filter("lison_engine=debug");
        assert_eq!(config.env_filter.as_deref(), Some("lison_engine=debug"));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::with_filter("trace"));
    }
}
