//! CLI configuration: built-in defaults, then an optional TOML file, then
//! `ISOTOPIA_*` environment variables. Command-line flags are applied last
//! by the caller.

use std::path::Path;

use anyhow::{Context, Result};
use isotopia_core::constants::{
    DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH, DEFAULT_POINTS, DEFAULT_T_END, DEFAULT_T_START,
};
use serde::Deserialize;

/// Environment variable prefix, e.g. `ISOTOPIA_POINTS=200`.
pub const ENV_PREFIX: &str = "ISOTOPIA";

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "isotopia";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CliConfig {
    /// First time point of the generated grid.
    pub t_start: f64,
    /// Last time point of the generated grid.
    pub t_end: f64,
    /// Number of time points.
    pub points: usize,
    /// Chart width in pixels.
    pub plot_width: u32,
    /// Chart height in pixels.
    pub plot_height: u32,
    /// Log level filter string (e.g. "info", "isotopia_decay=debug").
    pub log_level: String,
    /// Log output format, "text" or "json".
    pub log_format: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            t_start: DEFAULT_T_START,
            t_end: DEFAULT_T_END,
            points: DEFAULT_POINTS,
            plot_width: DEFAULT_PLOT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl CliConfig {
    /// Load defaults, the config file and `ISOTOPIA_*` overrides.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_from(file, Some(ENV_PREFIX))
    }

    /// Load with an explicit environment prefix, or none to skip the environment.
    pub fn load_from(file: Option<&Path>, env_prefix: Option<&str>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = ::config::Config::builder()
            .set_default("t_start", defaults.t_start)?
            .set_default("t_end", defaults.t_end)?
            .set_default("points", defaults.points as i64)?
            .set_default("plot_width", i64::from(defaults.plot_width))?
            .set_default("plot_height", i64::from(defaults.plot_height))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format)?;

        builder = match file {
            Some(path) => builder.add_source(::config::File::from(path).required(true)),
            None => builder
                .add_source(::config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        if let Some(prefix) = env_prefix {
            builder =
                builder.add_source(::config::Environment::with_prefix(prefix).try_parsing(true));
        }

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }
}
