use crate::error::{MetaDescError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "OPENAI_MODEL";

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
/// Google Ads向け。SEO用途なら155
pub const DEFAULT_CHAR_LIMIT: usize = 90;
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub char_limit: usize,
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            char_limit: DEFAULT_CHAR_LIMIT,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| MetaDescError::Config(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MetaDescError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("metadesc").join("config.json"))
    }

    /// APIキーを取得（環境変数を優先）
    pub fn get_api_key(&self) -> Result<String> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        resolve_api_key(from_env, self.api_key.as_deref())
    }

    /// モデル名を取得（CLI指定 > 環境変数 > 設定ファイル）
    pub fn resolve_model(&self, cli_model: Option<&str>) -> String {
        let from_env = std::env::var(MODEL_ENV).ok();
        resolve_model(cli_model, from_env.as_deref(), &self.model)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn resolve_api_key(from_env: Option<String>, stored: Option<&str>) -> Result<String> {
    non_empty(from_env.as_deref())
        .or_else(|| non_empty(stored))
        .map(str::to_string)
        .ok_or(MetaDescError::MissingApiKey)
}

pub(crate) fn resolve_model(cli: Option<&str>, from_env: Option<&str>, stored: &str) -> String {
    non_empty(cli)
        .or_else(|| non_empty(from_env))
        .or_else(|| non_empty(Some(stored)))
        .unwrap_or(DEFAULT_MODEL)
        .to_string()
}
