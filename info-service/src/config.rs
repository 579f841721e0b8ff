use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    // Exact bind address, e.g. "0.0.0.0:8080". Takes precedence over `port`
    // and the PORT environment variable when set.
    pub listen: Option<String>,
    // Default port: used for binding when `listen` and PORT are unset, and as
    // the fallback reported by /api/info. Defaults to 8080.
    pub port: Option<u16>,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let cfg_str = fs::read_to_string(path)?;
        Ok(toml::from_str(&cfg_str)?)
    }

    /// Load the config file if it exists; every field has a default, so a
    /// missing file is not an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
