//! セクター分類
//!
//! ## 処理フロー
//! 1. 手動マッピング（入力文字列と完全一致）
//! 2. キーワードの部分一致スコアで照合（2文字未満の入力は照合しない）
//!
//! 同点の場合は (1) 全体類似度の高い方 (2) セクター名の辞書順
//! (3) セクター内のキーワード順 で決定する。

use crate::similarity::{partial_ratio, ratio};
use crate::table::SectorTable;
use crate::types::{ManualOverride, MatchMode, MatchPolicy, MatchResult, SectorProfile};
use std::cmp::Ordering;
use std::collections::HashMap;

/// 照合する入力の最小文字数（前後の空白を除く）
pub const MIN_QUERY_CHARS: usize = 2;

/// 1文字以下の入力はどのキーワードにも「含まれる」ため照合しない
fn too_short(input: &str) -> bool {
    input.trim().chars().count() < MIN_QUERY_CHARS
}

/// キーワード1件分の照合スコア
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    sector: &'a SectorProfile,
    keyword_index: usize,
    score: u8,
    /// 文字列全体の類似度（同点時の判定用）
    closeness: f64,
}

impl Candidate<'_> {
    fn keyword(&self) -> &str {
        &self.sector.keywords[self.keyword_index]
    }

    /// 優先順位の比較（Lessが優先）
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| {
                other
                    .closeness
                    .partial_cmp(&self.closeness)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.sector.sector_name.cmp(&other.sector.sector_name))
            .then_with(|| self.keyword_index.cmp(&other.keyword_index))
    }

    fn into_result(self) -> MatchResult {
        MatchResult::from_sector(self.sector, self.keyword(), self.score)
    }
}

/// セクター分類器
///
/// テーブルは構築時に固定され、分類は入力のみに依存する純関数。
#[derive(Debug, Clone)]
pub struct SectorClassifier {
    sectors: Vec<SectorProfile>,
    overrides: HashMap<String, ManualOverride>,
    policy: MatchPolicy,
}

impl SectorClassifier {
    pub fn new(table: SectorTable, policy: MatchPolicy) -> Self {
        let overrides = table
            .overrides
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect();

        Self {
            sectors: table.sectors,
            overrides,
            policy,
        }
    }

    /// 組み込みテーブル + 既定ポリシー
    pub fn builtin() -> Self {
        Self::new(SectorTable::builtin(), MatchPolicy::default())
    }

    pub fn sectors(&self) -> &[SectorProfile] {
        &self.sectors
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// 組織名をセクターに分類する
    ///
    /// # Returns
    /// 一致したセクター。閾値を満たすキーワードがなければ `None`。
    pub fn classify(&self, input: &str) -> Option<MatchResult> {
        if let Some(entry) = self.overrides.get(input) {
            return Some(MatchResult::from_override(entry));
        }

        if too_short(input) {
            return None;
        }

        let query = input.to_lowercase();
        match self.policy.mode {
            MatchMode::GlobalMax => self
                .candidates(&query)
                .min_by(|a, b| a.rank(b))
                .filter(|c| self.policy.accepts(c.score))
                .map(Candidate::into_result),
            MatchMode::FirstAbove => self
                .candidates(&query)
                .find(|c| self.policy.accepts(c.score))
                .map(Candidate::into_result),
        }
    }

    /// 閾値を満たす全セクターを優先順に返す（セクターごとに最良キーワード1件）
    ///
    /// 手動マッピングに一致した場合はその1件のみ。
    pub fn classify_all(&self, input: &str) -> Vec<MatchResult> {
        if let Some(entry) = self.overrides.get(input) {
            return vec![MatchResult::from_override(entry)];
        }

        if too_short(input) {
            return Vec::new();
        }

        let query = input.to_lowercase();
        let mut best_per_sector: Vec<Candidate<'_>> = Vec::new();
        for candidate in self.candidates(&query) {
            match best_per_sector
                .iter_mut()
                .find(|c| c.sector.sector_name == candidate.sector.sector_name)
            {
                Some(current) => {
                    if candidate.rank(current) == Ordering::Less {
                        *current = candidate;
                    }
                }
                None => best_per_sector.push(candidate),
            }
        }

        best_per_sector.retain(|c| self.policy.accepts(c.score));
        best_per_sector.sort_by(|a, b| a.rank(b));
        best_per_sector
            .into_iter()
            .map(Candidate::into_result)
            .collect()
    }

    /// テーブル順に全 (セクター, キーワード) のスコアを列挙
    fn candidates<'a>(&'a self, query: &'a str) -> impl Iterator<Item = Candidate<'a>> + 'a {
        self.sectors.iter().flat_map(move |sector| {
            sector
                .keywords
                .iter()
                .enumerate()
                .map(move |(keyword_index, keyword)| {
                    let keyword = keyword.to_lowercase();
                    Candidate {
                        sector,
                        keyword_index,
                        score: partial_ratio(&keyword, query),
                        closeness: ratio(&keyword, query),
                    }
                })
        })
    }
}

impl Default for SectorClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
