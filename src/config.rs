use crate::error::{ProfilerError, Result};
use sector_profiler_common::{MatchMode, MatchPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const REGISTRY_TOKEN_ENV: &str = "OPENCORPORATES_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub match_mode: MatchMode,
    /// 省略時は方式ごとの既定値（global-max: 60, first-above: 85）
    pub threshold: Option<u8>,
    /// 外部参照（ナレッジベース・企業レジストリ）を行うか
    pub enrichment: bool,
    pub knowledge_base_url: String,
    pub knowledge_base_language: String,
    pub registry_url: String,
    pub registry_api_token: Option<String>,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProfilerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("sector-profiler").join("config.json"))
    }

    /// 照合ポリシー
    pub fn match_policy(&self) -> MatchPolicy {
        let threshold = self
            .threshold
            .unwrap_or_else(|| self.match_mode.default_threshold());
        match self.match_mode {
            MatchMode::GlobalMax => MatchPolicy::global_max(threshold),
            MatchMode::FirstAbove => MatchPolicy::first_above(threshold),
        }
    }

    pub fn get_registry_token(&self) -> Option<String> {
        // 環境変数を優先
        if let Ok(token) = std::env::var(REGISTRY_TOKEN_ENV) {
            if !token.trim().is_empty() {
                return Some(token);
            }
        }

        self.registry_api_token.clone()
    }

    pub fn set_registry_token(&mut self, token: String) {
        self.registry_api_token = Some(token);
    }

    pub fn set_threshold(&mut self, threshold: u8) -> Result<()> {
        if threshold > 100 {
            return Err(ProfilerError::Config(format!(
                "閾値は0-100で指定してください: {}",
                threshold
            )));
        }
        self.threshold = Some(threshold);
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(ProfilerError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::GlobalMax,
            threshold: None,
            enrichment: true,
            knowledge_base_url: "https://www.wikidata.org/w/api.php".into(),
            knowledge_base_language: "en".into(),
            registry_url: "https://api.opencorporates.com/v0.4".into(),
            registry_api_token: None,
            timeout_seconds: 5,
        }
    }
}
