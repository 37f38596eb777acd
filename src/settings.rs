use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const API_URL_ENV: &str = "REELFEED_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    pub base_url: String,
    pub language: String,
}

impl AppSettings {
    pub fn config_path() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("reelfeed")
                .join("config.json")
        })
    }

    pub fn load() -> Option<Self> {
        let path = Self::config_path()?;
        let content = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or("Could not determine config path")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, content).map_err(|e| e.to_string())
    }

    /// Settings from the environment, the config file as fallback. The env
    /// variable mirrors the proxy URL the original deployment injects.
    pub fn resolve() -> Option<Self> {
        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            if !base_url.trim().is_empty() {
                return Some(Self {
                    base_url: base_url.trim().to_string(),
                    language: String::from("en-US"),
                });
            }
        }
        Self::load()
    }

    pub fn is_valid(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}
