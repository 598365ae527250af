//! Game configuration loading for the command-line adapter.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use labyrinth_core::GameConfig;
use tracing::{debug, warn};

/// Values supplied on the command line that take precedence over the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Overrides {
    /// Number of levels to play.
    pub(crate) levels: Option<u32>,
    /// Seed for maze generation.
    pub(crate) seed: Option<u64>,
}

/// Reads the configuration at `path`, or the defaults when no path is given.
pub(crate) fn load(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        debug!("no configuration file given, using defaults");
        return Ok(GameConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file {}", path.display()))?;
    parse(&text).with_context(|| format!("failed to parse configuration file {}", path.display()))
}

/// Parses a TOML document. Missing keys fall back to their defaults.
pub(crate) fn parse(text: &str) -> Result<GameConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Applies command-line overrides on top of a loaded configuration.
pub(crate) fn apply_overrides(mut config: GameConfig, overrides: Overrides) -> GameConfig {
    let defaults = GameConfig::default();

    if let Some(levels) = overrides.levels {
        if config.level_count != defaults.level_count && config.level_count != levels {
            warn!(
                configured = config.level_count,
                levels, "--levels replaces the configured level count"
            );
        }
        config.level_count = levels;
    }

    if let Some(seed) = overrides.seed {
        if let Some(configured) = config.seed.filter(|configured| *configured != seed) {
            warn!(configured, seed, "--seed replaces the configured seed");
        }
        config.seed = Some(seed);
    }

    config
}
