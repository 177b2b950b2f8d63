//! Run configuration from a TOML file plus command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use rv_core::RunConfig;

/// Parse a `RunConfig` from TOML text.  Missing keys keep their defaults.
pub fn parse_config(text: &str) -> Result<RunConfig> {
    let config: RunConfig = toml::from_str(text).context("invalid run configuration")?;
    config.validate()?;
    Ok(config)
}

/// Load a `RunConfig` from a TOML file such as:
///
/// ```toml
/// separation            = -12
/// max_steps             = 50000
/// output_interval_steps = 10
/// ```
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// Flags given on the command line; each one overrides the file value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub separation: Option<i64>,
    pub max_steps:  Option<u64>,
    pub interval:   Option<u64>,
}

impl Overrides {
    pub fn apply(self, mut config: RunConfig) -> Result<RunConfig> {
        if let Some(s) = self.separation {
            config.separation = s;
        }
        if let Some(m) = self.max_steps {
            config.max_steps = m;
        }
        if let Some(i) = self.interval {
            config.output_interval_steps = i;
        }
        config.validate()?;
        Ok(config)
    }
}
