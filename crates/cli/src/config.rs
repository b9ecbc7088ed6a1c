//! Environment-driven CLI configuration.

use std::env;
use std::path::PathBuf;

/// Settings read once at startup. Command-line flags take precedence.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Content directory holding `items.ron`, `option_tables.ron` and
    /// `warehouse.toml`.
    pub data_dir: PathBuf,
    /// Directory for `warehouse.log`; file logging is off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: warehouse_content::bundled_data_dir(),
            log_dir: None,
        }
    }
}

impl CliConfig {
    pub const DATA_DIR_VAR: &'static str = "WAREHOUSE_DATA_DIR";
    pub const LOG_DIR_VAR: &'static str = "WAREHOUSE_LOG_DIR";

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>(Self::DATA_DIR_VAR) {
            config.data_dir = dir;
        }

        config.log_dir = read_env::<PathBuf>(Self::LOG_DIR_VAR);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|value| !value.is_empty())?.parse().ok()
}
