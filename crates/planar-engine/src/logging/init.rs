use std::sync::Once;

use serde::Deserialize;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "planar_layer=debug,planar_engine=warn").
///
/// `colored` maps onto `env_logger::WriteStyle`: `None` = auto-detect.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub colored: Option<bool>,
}

impl LoggingConfig {
    fn write_style(&self) -> env_logger::WriteStyle {
        match self.colored {
            None => env_logger::WriteStyle::Auto,
            Some(true) => env_logger::WriteStyle::Always,
            Some(false) => env_logger::WriteStyle::Never,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter.as_deref() {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style());

        // A host may already have installed a logger (tests, embedding apps).
        if builder.try_init().is_err() {
            log::debug!("logger already installed; keeping existing one");
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_from_json() {
        let cfg: LoggingConfig =
            serde_json::from_str(r#"{ "env_filter": "planar_layer=debug", "colored": false }"#).unwrap();
        assert_eq!(cfg.env_filter.as_deref(), Some("planar_layer=debug"));
        assert!(matches!(cfg.write_style(), env_logger::WriteStyle::Never));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
