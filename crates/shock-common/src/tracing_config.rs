//! Opt-in tracing subscriber for the value crates.
//!
//! `SHOCK_LOG` holds filter directives (`RUST_LOG` is the fallback) and
//! `SHOCK_LOG_FORMAT` picks `text`, `tree` or `json`. Nothing is installed
//! when neither filter variable is set. Output goes to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    /// Indented span tree from `tracing-tree`.
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown names read as [`LogFormat::Text`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives and output format for one subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub directives: String,
    pub format: LogFormat,
}

impl TracingConfig {
    /// `SHOCK_LOG` wins over `RUST_LOG`; `None` when both are unset.
    #[must_use]
    pub fn from_vars(
        shock_log: Option<String>,
        rust_log: Option<String>,
        format: Option<&str>,
    ) -> Option<Self> {
        let directives = shock_log.or(rust_log)?;
        Some(Self {
            directives,
            format: format.map(LogFormat::parse).unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        let format = std::env::var("SHOCK_LOG_FORMAT").ok();
        Self::from_vars(
            std::env::var("SHOCK_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            format.as_deref(),
        )
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }

    /// Installs the global subscriber. `false` if one was already set.
    pub fn install(self) -> bool {
        let filter = self.filter();
        match self.format {
            LogFormat::Text => Registry::default()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .is_ok(),
            LogFormat::Tree => Registry::default()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .try_init()
                .is_ok(),
            LogFormat::Json => Registry::default()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .is_ok(),
        }
    }
}

/// Installs the subscriber described by the environment, if any.
pub fn init_tracing() -> bool {
    TracingConfig::from_env().is_some_and(TracingConfig::install)
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
