use crate::error::{Result, StoreError};
use closet_store_common::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://closet-recruiting-api.azurewebsites.net";
pub const DEFAULT_STOREFRONT_URL: &str = "http://localhost:5173/";
pub const BASE_URL_ENV: &str = "CLOSET_STORE_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// 共有URLの土台
    pub storefront_url: String,
    pub timeout_seconds: u64,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            storefront_url: DEFAULT_STOREFRONT_URL.into(),
            timeout_seconds: 10,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        // 環境変数を優先
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StoreError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("closet-store").join("config.json"))
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        url::Url::parse(&url)?;
        self.base_url = url;
        self.save()
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(StoreError::Config("page_sizeは1以上にしてください".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(StoreError::Config("timeout_secondsは1以上にしてください".into()));
        }
        Ok(())
    }
}
