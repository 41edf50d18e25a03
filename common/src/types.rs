//! セクター照合の共通型定義

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// セクタープロファイル（テーブルの1行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorProfile {
    /// セクター名（テーブル内で一意）
    pub sector_name: String,

    /// 照合キーワード（組織名・略称・業種語、英語/タイ語）
    #[serde(default)]
    pub keywords: Vec<String>,

    /// 適用される規制・基準
    #[serde(default)]
    pub compliance_pressure: Option<String>,

    /// 規制当局
    #[serde(default)]
    pub regulator: Option<String>,

    /// 推奨サービス
    pub recommended_services: String,
}

/// 手動マッピング（完全一致で優先適用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOverride {
    /// 組織名（入力と完全一致で適用）
    pub name: String,
    pub sector_name: String,
    #[serde(default)]
    pub compliance_pressure: Option<String>,
    #[serde(default)]
    pub regulator: Option<String>,
    pub recommended_services: String,
}

/// 照合結果の由来
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// 手動マッピング
    Override,
    /// キーワード照合
    Keyword,
}

/// 照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub sector_name: String,
    /// 一致したキーワード（手動マッピングの場合はその組織名）
    pub matched_keyword: String,
    /// 類似度スコア (0-100)
    pub score: u8,
    pub compliance_pressure: Option<String>,
    pub regulator: Option<String>,
    pub recommended_services: String,
    pub source: MatchSource,
}

impl MatchResult {
    /// 手動マッピングから結果を生成（スコアは常に100）
    pub fn from_override(entry: &ManualOverride) -> Self {
        Self {
            sector_name: entry.sector_name.clone(),
            matched_keyword: entry.name.clone(),
            score: 100,
            compliance_pressure: entry.compliance_pressure.clone(),
            regulator: entry.regulator.clone(),
            recommended_services: entry.recommended_services.clone(),
            source: MatchSource::Override,
        }
    }

    /// キーワード照合から結果を生成
    pub fn from_sector(sector: &SectorProfile, keyword: &str, score: u8) -> Self {
        Self {
            sector_name: sector.sector_name.clone(),
            matched_keyword: keyword.to_string(),
            score,
            compliance_pressure: sector.compliance_pressure.clone(),
            regulator: sector.regulator.clone(),
            recommended_services: sector.recommended_services.clone(),
            source: MatchSource::Keyword,
        }
    }
}

/// 照合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// 全キーワードを走査し最高スコアを採用（閾値以上で一致）
    #[default]
    GlobalMax,
    /// テーブル順に走査し閾値を超えた最初のキーワードを採用
    FirstAbove,
}

impl MatchMode {
    /// 方式ごとの既定閾値
    pub fn default_threshold(&self) -> u8 {
        match self {
            MatchMode::GlobalMax => 60,
            MatchMode::FirstAbove => 85,
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "global-max" | "global" | "max" => Ok(MatchMode::GlobalMax),
            "first-above" | "first" => Ok(MatchMode::FirstAbove),
            _ => Err(format!(
                "Unknown match mode: {}. Use global-max or first-above",
                s
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::GlobalMax => write!(f, "global-max"),
            MatchMode::FirstAbove => write!(f, "first-above"),
        }
    }
}

/// 照合ポリシー（方式 + 閾値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    pub mode: MatchMode,
    pub threshold: u8,
}

impl MatchPolicy {
    pub fn global_max(threshold: u8) -> Self {
        Self {
            mode: MatchMode::GlobalMax,
            threshold: threshold.min(100),
        }
    }

    pub fn first_above(threshold: u8) -> Self {
        Self {
            mode: MatchMode::FirstAbove,
            threshold: threshold.min(100),
        }
    }

    /// スコアが採用条件を満たすか
    ///
    /// GlobalMaxは閾値以上、FirstAboveは閾値超え。
    pub fn accepts(&self, score: u8) -> bool {
        match self.mode {
            MatchMode::GlobalMax => score >= self.threshold,
            MatchMode::FirstAbove => score > self.threshold,
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::global_max(MatchMode::GlobalMax.default_threshold())
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            MatchMode::GlobalMax => write!(f, "{} (>= {})", self.mode, self.threshold),
            MatchMode::FirstAbove => write!(f, "{} (> {})", self.mode, self.threshold),
        }
    }
}
