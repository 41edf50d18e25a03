//! 組織名ルックアップ
//!
//! 1. 手動マッピング / キーワード照合（SectorClassifier）
//! 2. 一致しなければ外部参照（ナレッジベース・企業レジストリ）
//! 3. どちらも空なら「該当なし」

use crate::config::Config;
use crate::enrichment::{
    lookup_knowledge, lookup_registry, KnowledgeEntry, KnowledgeSource, OpenCorporatesClient,
    RegistryCandidate, RegistrySource, WikidataClient,
};
use crate::error::{ProfilerError, Result};
use sector_profiler_common::{MatchResult, SectorClassifier, SectorTable};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// セクターテーブルを読み込む（指定なしは組み込み）
///
/// 不正なテーブルは `ProfilerError::Common(Error::InvalidTable)` として返る。
pub fn load_table(path: Option<&Path>) -> Result<SectorTable> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ProfilerError::FileNotFound(path.display().to_string()));
            }
            Ok(SectorTable::from_file(path)?)
        }
        None => Ok(SectorTable::builtin()),
    }
}

/// 外部参照の結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enrichment {
    pub knowledge: KnowledgeEntry,
    pub registry: Vec<RegistryCandidate>,
}

impl Enrichment {
    pub fn is_empty(&self) -> bool {
        self.knowledge.is_empty() && self.registry.is_empty()
    }
}

/// ルックアップ結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// セクターに一致
    Matched(MatchResult),
    /// 外部参照のみ取得（手動マッピングが必要）
    Enriched(Enrichment),
    /// 該当なし
    NoMatch,
}

pub struct Profiler {
    classifier: SectorClassifier,
    knowledge: Option<Box<dyn KnowledgeSource>>,
    registry: Option<Box<dyn RegistrySource>>,
}

impl Profiler {
    /// 外部参照なし
    pub fn new(classifier: SectorClassifier) -> Self {
        Self {
            classifier,
            knowledge: None,
            registry: None,
        }
    }

    /// 設定に従って外部参照クライアントを組み込む
    pub fn from_config(classifier: SectorClassifier, config: &Config) -> Result<Self> {
        let mut profiler = Self::new(classifier);
        if !config.enrichment {
            return Ok(profiler);
        }

        profiler = profiler
            .with_knowledge_source(WikidataClient::new(
                config.knowledge_base_url.clone(),
                config.knowledge_base_language.clone(),
                config.timeout(),
            )?)
            .with_registry_source(OpenCorporatesClient::new(
                config.registry_url.clone(),
                config.get_registry_token(),
                config.timeout(),
            )?);
        Ok(profiler)
    }

    pub fn with_knowledge_source(mut self, source: impl KnowledgeSource + 'static) -> Self {
        self.knowledge = Some(Box::new(source));
        self
    }

    pub fn with_registry_source(mut self, source: impl RegistrySource + 'static) -> Self {
        self.registry = Some(Box::new(source));
        self
    }

    pub fn classifier(&self) -> &SectorClassifier {
        &self.classifier
    }

    pub fn has_enrichment(&self) -> bool {
        self.knowledge.is_some() || self.registry.is_some()
    }

    /// 組織名をルックアップする
    pub async fn lookup(&self, name: &str) -> LookupOutcome {
        if let Some(matched) = self.classifier.classify(name) {
            info!(
                query = name,
                sector = %matched.sector_name,
                keyword = %matched.matched_keyword,
                score = matched.score,
                "sector matched"
            );
            return LookupOutcome::Matched(matched);
        }

        let query = name.trim();
        if query.is_empty() || !self.has_enrichment() {
            return LookupOutcome::NoMatch;
        }

        debug!(query, "no keyword match, trying external sources");
        let (knowledge, registry) = tokio::join!(
            async {
                match &self.knowledge {
                    Some(source) => lookup_knowledge(source.as_ref(), query).await,
                    None => KnowledgeEntry::default(),
                }
            },
            async {
                match &self.registry {
                    Some(source) => lookup_registry(source.as_ref(), &self.classifier, query).await,
                    None => Vec::new(),
                }
            }
        );

        let enrichment = Enrichment {
            knowledge,
            registry,
        };
        if enrichment.is_empty() {
            LookupOutcome::NoMatch
        } else {
            LookupOutcome::Enriched(enrichment)
        }
    }
}
