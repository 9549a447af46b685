//! Configuration types for clf2tab.
//!
//! [`Config::load`] layers the built-in defaults, an optional TOML file and
//! `CLF2TAB__*` environment variables. [`Config::defaults`] returns the
//! defaults without touching the filesystem or environment (useful in tests).
//! The file is never created; a missing file is simply skipped.

use crate::timestamp::{parse_fixed_offset, TimestampNormalizer};
use crate::tokenizer::Tokenizer;
use crate::validate::FieldValidator;
use chrono::FixedOffset;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[validation]
permissive = false

[time]
# Standard-time offset of the host, e.g. "-0500". Unset means the binary
# reads the host's current offset once at start-up.
"#;

const ENV_PREFIX: &str = "CLF2TAB";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub time: TimeConfig,
}

/// `[validation]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    /// Skip field validation; fields are still split and timestamps still
    /// converted.
    #[serde(default)]
    pub permissive: bool,
}

/// `[time]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeConfig {
    /// `±HHMM`.
    #[serde(default)]
    pub host_utc_offset: Option<String>,
}

impl Config {
    /// Load the layered configuration. `path` overrides the default location
    /// (`$XDG_CONFIG_HOME/clf2tab/config.toml`).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::from(config_path().as_path()).required(false)),
        };

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The configured host offset, if any.
    pub fn host_offset(&self) -> anyhow::Result<Option<FixedOffset>> {
        self.time
            .host_utc_offset
            .as_deref()
            .map(|zone| parse_fixed_offset(zone.trim()))
            .transpose()
            .map_err(Into::into)
    }

    /// Build a tokenizer from this configuration. `fallback_offset` is used
    /// when no host offset is configured.
    pub fn tokenizer(&self, fallback_offset: FixedOffset) -> anyhow::Result<Tokenizer> {
        let host_offset = self.host_offset()?.unwrap_or(fallback_offset);
        Ok(Tokenizer::new(
            FieldValidator::new(self.validation.permissive),
            TimestampNormalizer::new(host_offset),
        ))
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("clf2tab")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
