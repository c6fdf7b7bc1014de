use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chatbox.json";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8027/chat";
pub const DEFAULT_TRANSFER_PATH: &str = "discussion.json";
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Chat endpoint nhận POST với toàn bộ mảng tin nhắn.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Độ trễ "bot đang gõ" (ms) trước khi bắn request.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    #[serde(default)]
    pub dark_mode: bool,
    /// File mặc định cho export/import lịch sử.
    #[serde(default = "default_transfer_path")]
    pub transfer_path: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_typing_delay_ms() -> u64 {
    DEFAULT_TYPING_DELAY_MS
}

fn default_transfer_path() -> String {
    DEFAULT_TRANSFER_PATH.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            typing_delay_ms: default_typing_delay_ms(),
            dark_mode: false,
            transfer_path: default_transfer_path(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("does/not/exist.json");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.typing_delay_ms, DEFAULT_TYPING_DELAY_MS);
        assert_eq!(config.transfer_path, DEFAULT_TRANSFER_PATH);
        assert!(!config.dark_mode);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{oops").unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"endpoint": "http://example.com/chat"}"#).unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.endpoint, "http://example.com/chat");
        assert_eq!(config.typing_delay_ms, DEFAULT_TYPING_DELAY_MS);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/chatbox.json");
        let config = AppConfig {
            endpoint: "http://localhost:9000/chat".to_string(),
            typing_delay_ms: 250,
            dark_mode: true,
            transfer_path: "backup.json".to_string(),
        };

        save_config(path.to_str().unwrap(), &config).unwrap();
        let loaded = load_config(path.to_str().unwrap());
        assert_eq!(loaded.endpoint, config.endpoint);
        assert_eq!(loaded.typing_delay_ms, 250);
        assert!(loaded.dark_mode);
        assert_eq!(loaded.transfer_path, "backup.json");
    }
}
