//! Configuration loading and management.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

const DEFAULT_PLOT_DAYS: NonZeroU32 = NonZeroU32::new(7).unwrap();

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one file per punchclock.
    pub storage_root: PathBuf,

    /// Days shown by `clock plot` when `--days` is not given.
    pub plot_days: NonZeroU32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: dirs_data_path().unwrap_or_else(|| PathBuf::from(".punchclock")),
            plot_days: DEFAULT_PLOT_DAYS,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (PUNCHCLOCK_*)
        figment = figment.merge(Env::prefixed("PUNCHCLOCK_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for punchclock.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("punchclock"))
}

/// Returns the platform-specific data directory for punchclock.
///
/// On Linux: `~/.local/share/punchclock`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("punchclock"))
}
