use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use wordwise_config::Config;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "wordwise.json";

/// Where the active config came from
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// An explicit config path that does not exist
    Missing(PathBuf),
    Defaults,
}

/// Load the config file, then apply environment overrides.
///
/// An explicit path that does not exist falls back to defaults; a file that
/// exists but does not parse is an error.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    let path = match explicit {
        Some(path) if path.exists() => path.to_path_buf(),
        Some(path) => return Ok((Config::new(), ConfigSource::Missing(path.to_path_buf()))),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok((Config::new(), ConfigSource::Defaults));
            }
            path
        }
    };

    let mut config = read_config_file(&path)?;
    config.apply_env();
    Ok((config, ConfigSource::File(path)))
}

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
