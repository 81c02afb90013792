use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

const CHALLENGES_FILE_ENV: &str = "ARENA_CHALLENGES_FILE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub challenges_file: Option<PathBuf>,
}

impl UserConfig {
    pub fn challenges_file(&self) -> PathBuf {
        self.resolve(env::var_os(CHALLENGES_FILE_ENV))
    }

    /// Env override, then the configured file, then the default location.
    fn resolve(&self, env_override: Option<OsString>) -> PathBuf {
        if let Some(path) = env_override {
            return PathBuf::from(path);
        }
        self.challenges_file
            .clone()
            .unwrap_or_else(|| config_dir().join("daily_challenges.json"))
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arena")
}

pub fn get_config_path() -> PathBuf {
    config_dir().join("config.json")
}

pub fn load_config() -> UserConfig {
    load_config_from(&get_config_path())
}

fn load_config_from(path: &Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring invalid config");
            UserConfig::default()
        }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read config");
            UserConfig::default()
        }
    }
}
