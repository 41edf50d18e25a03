//! 一括ルックアップモジュール
//!
//! 1行1組織名のテキストを読み込み、結果をJSONレポートに出力する。

use crate::error::{ProfilerError, Result};
use crate::lookup::{LookupOutcome, Profiler};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// 一括ルックアップの1件
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub query: String,
    #[serde(flatten)]
    pub outcome: LookupOutcome,
}

/// 一括ルックアップのレポート
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: String,
    pub threshold: u8,
    pub policy: String,
    pub matched: usize,
    pub enriched: usize,
    pub unmatched: usize,
    pub results: Vec<BatchEntry>,
}

/// 組織名リストを解析（空行・`#`コメントを除外）
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ProfilerError::FileNotFound(path.display().to_string()));
    }

    let names = parse_names(&std::fs::read_to_string(path)?);
    if names.is_empty() {
        return Err(ProfilerError::EmptyBatch(path.display().to_string()));
    }
    Ok(names)
}

/// 組織名を順に照会してレポートを作成
pub async fn lookup_all(profiler: &Profiler, names: &[String], show_progress: bool) -> BatchReport {
    let progress = if show_progress {
        let bar = ProgressBar::new(names.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        progress.set_message(name.clone());
        let outcome = profiler.lookup(name).await;
        results.push(BatchEntry {
            query: name.clone(),
            outcome,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    let count = |pred: fn(&LookupOutcome) -> bool| results.iter().filter(|e| pred(&e.outcome)).count();
    let matched = count(|o| matches!(o, LookupOutcome::Matched(_)));
    let enriched = count(|o| matches!(o, LookupOutcome::Enriched(_)));
    let unmatched = count(|o| matches!(o, LookupOutcome::NoMatch));

    let policy = profiler.classifier().policy();
    BatchReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        threshold: policy.threshold,
        policy: policy.to_string(),
        matched,
        enriched,
        unmatched,
        results,
    }
}

/// 一括ルックアップしてJSONを保存
pub async fn run_batch(profiler: &Profiler, input: &Path, output: &Path) -> Result<BatchReport> {
    let names = read_names(input)?;
    info!(count = names.len(), input = %input.display(), "batch lookup started");

    let report = lookup_all(profiler, &names, true).await;

    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output, json)?;
    Ok(report)
}
