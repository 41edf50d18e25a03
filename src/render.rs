//! ルックアップ結果の表示整形

use crate::lookup::{Enrichment, LookupOutcome};
use sector_profiler_common::{MatchResult, MatchSource, SectorProfile};
use std::fmt::Write;

const NOT_MODELED: &str = "-";

/// ルックアップ結果を表示用テキストに整形
pub fn render_outcome(query: &str, outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Matched(matched) => render_match(matched),
        LookupOutcome::Enriched(enrichment) => render_enrichment(query, enrichment),
        LookupOutcome::NoMatch => render_no_match(query),
    }
}

fn render_match(matched: &MatchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✅ 該当セクター: {}", matched.sector_name);
    let _ = writeln!(
        out,
        "  コンプライアンス要件: {}",
        matched.compliance_pressure.as_deref().unwrap_or(NOT_MODELED)
    );
    let _ = writeln!(
        out,
        "  規制当局: {}",
        matched.regulator.as_deref().unwrap_or(NOT_MODELED)
    );
    let _ = writeln!(out, "  推奨サービス: {}", matched.recommended_services);
    match matched.source {
        MatchSource::Override => {
            let _ = writeln!(out, "  (手動マッピング: {})", matched.matched_keyword);
        }
        MatchSource::Keyword => {
            let _ = writeln!(
                out,
                "  (キーワード「{}」 スコア {})",
                matched.matched_keyword, matched.score
            );
        }
    }
    out
}

fn render_enrichment(query: &str, enrichment: &Enrichment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🔎 「{}」は内部マッピングに該当なし。外部参照結果:", query);

    if !enrichment.knowledge.is_empty() {
        let _ = writeln!(
            out,
            "  ナレッジベース: {} ({})",
            enrichment.knowledge.label.as_deref().unwrap_or(NOT_MODELED),
            enrichment.knowledge.category.as_deref().unwrap_or(NOT_MODELED)
        );
    }

    for (i, candidate) in enrichment.registry.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", i + 1, candidate.company_name);
        let _ = writeln!(
            out,
            "      業種: {}",
            if candidate.industry.is_empty() {
                NOT_MODELED
            } else {
                candidate.industry.as_str()
            }
        );
        let _ = writeln!(out, "      セクター: {}", candidate.sector_label());
        if let (Some(keyword), Some(score)) = (&candidate.matched_keyword, candidate.score) {
            let _ = writeln!(out, "      キーワード「{}」 スコア {}", keyword, score);
        }
        if let Some(services) = &candidate.recommended_services {
            let _ = writeln!(out, "      推奨サービス: {}", services);
        }
    }

    let _ = writeln!(out, "⚠ セクターの確定には手動マッピングが必要です");
    out
}

fn render_no_match(query: &str) -> String {
    format!(
        "⚠ 「{}」に該当するセクターが見つかりません。既知の企業名またはキーワードで再検索してください\n",
        query.trim()
    )
}

/// 照合候補の一覧（--candidates）
pub fn render_candidates(candidates: &[MatchResult]) -> String {
    let mut out = String::from("候補:\n");
    if candidates.is_empty() {
        out.push_str("  (なし)\n");
        return out;
    }
    for candidate in candidates {
        let _ = writeln!(
            out,
            "  {:>3}  {}  ← {}",
            candidate.score, candidate.sector_name, candidate.matched_keyword
        );
    }
    out
}

/// セクターテーブルの一覧表示
pub fn render_sector_table(sectors: &[SectorProfile], show_keywords: bool) -> String {
    let mut out = String::new();
    for (i, sector) in sectors.iter().enumerate() {
        let _ = writeln!(out, "{}) {}", i + 1, sector.sector_name);
        if let Some(regulator) = &sector.regulator {
            let _ = writeln!(out, "   規制当局: {}", regulator);
        }
        let _ = writeln!(out, "   推奨サービス: {}", sector.recommended_services);
        if show_keywords {
            let _ = writeln!(out, "   キーワード: {}", sector.keywords.join(", "));
        } else {
            let _ = writeln!(out, "   キーワード: {}件", sector.keywords.len());
        }
    }
    out
}
