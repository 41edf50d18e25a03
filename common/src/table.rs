//! セクターテーブル（セクター一覧 + 手動マッピング）
//!
//! 起動時に一度だけ読み込み、以降は不変。

use crate::builtin::{builtin_overrides, builtin_sectors};
use crate::error::{Error, Result};
use crate::types::{ManualOverride, SectorProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// セクターテーブル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTable {
    pub sectors: Vec<SectorProfile>,
    #[serde(default)]
    pub overrides: Vec<ManualOverride>,
}

impl SectorTable {
    /// 組み込みテーブル
    pub fn builtin() -> Self {
        Self {
            sectors: builtin_sectors(),
            overrides: builtin_overrides(),
        }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み（検証込み）
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// テーブルの整合性を検証
    ///
    /// - セクターが1件以上
    /// - セクター名が空でなく一意
    /// - 手動マッピングの組織名が一意
    pub fn validate(&self) -> Result<()> {
        if self.sectors.is_empty() {
            return Err(Error::InvalidTable("セクターが1件もありません".into()));
        }

        let mut names = HashSet::new();
        for sector in &self.sectors {
            if sector.sector_name.trim().is_empty() {
                return Err(Error::InvalidTable("空のセクター名があります".into()));
            }
            if !names.insert(sector.sector_name.as_str()) {
                return Err(Error::InvalidTable(format!(
                    "セクター名が重複しています: {}",
                    sector.sector_name
                )));
            }
        }

        let mut keys = HashSet::new();
        for entry in &self.overrides {
            if !keys.insert(entry.name.as_str()) {
                return Err(Error::InvalidTable(format!(
                    "手動マッピングが重複しています: {}",
                    entry.name
                )));
            }
        }

        Ok(())
    }

    /// キーワード総数
    pub fn keyword_count(&self) -> usize {
        self.sectors.iter().map(|s| s.keywords.len()).sum()
    }
}

impl Default for SectorTable {
    fn default() -> Self {
        Self::builtin()
    }
}
