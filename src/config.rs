use crate::error::{LuminusError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 開発用ローカルサーバのデフォルトアドレス
const DEFAULT_BASE_URL: &str = "http://192.168.1.128:5000";

/// リクエストタイムアウト（秒）
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LuminusError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("luminus").join("config.json"))
    }

    /// 環境変数を優先してバックエンドURLを返す
    pub fn get_base_url(&self) -> String {
        if let Ok(url) = std::env::var("LUMINUS_BASE_URL") {
            if !url.trim().is_empty() {
                return url;
            }
        }

        self.base_url.clone()
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = url;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        self.timeout_seconds = seconds;
        self.save()
    }
}
