use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Tree download timeout in seconds.
    #[serde(default = "default_download_timeout")]
    pub download_timeout: u64,
}

fn default_download_timeout() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_timeout: default_download_timeout(),
        }
    }
}

impl Config {
    /// Read `config.toml` from the platform config directory. A missing or
    /// malformed file yields the defaults.
    pub fn load() -> Self {
        ProjectDirs::from("com", "haplocall", "haplocall")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }
}
