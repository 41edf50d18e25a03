//! 外部データ参照モジュール
//!
//! キーワード照合で一致しなかった場合のみ使用する補助情報。
//! - ナレッジベース（Wikidata）: 正式名称と分類
//! - 企業レジストリ（OpenCorporates）: 上位3社の業種説明をセクター分類器にかける
//!
//! 外部参照の失敗はここで握りつぶし、空の結果として返す。

mod opencorporates;
mod types;
mod wikidata;

pub use opencorporates::OpenCorporatesClient;
pub use types::{KnowledgeEntry, RegistryCandidate, RegistryCompany, UNMAPPED};
pub use wikidata::WikidataClient;

use crate::error::Result;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use sector_profiler_common::SectorClassifier;
use tracing::{debug, warn};

/// レジストリ候補の最大件数
pub const MAX_REGISTRY_CANDIDATES: usize = 3;

/// ナレッジベース参照
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// ヒットなしは `Ok(None)`
    async fn search(&self, query: &str) -> Result<Option<KnowledgeEntry>>;
}

/// 企業レジストリ検索
#[async_trait]
pub trait RegistrySource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RegistryCompany>>;
}

/// ナレッジベースを参照する（失敗時は空）
pub async fn lookup_knowledge(source: &dyn KnowledgeSource, query: &str) -> KnowledgeEntry {
    match source.search(query).await {
        Ok(Some(entry)) => {
            debug!(source = source.name(), label = ?entry.label, "knowledge base hit");
            entry
        }
        Ok(None) => KnowledgeEntry::default(),
        Err(e) => {
            warn!(source = source.name(), error = %e, "knowledge base lookup failed");
            KnowledgeEntry::default()
        }
    }
}

/// 企業レジストリを検索し、業種説明でセクター分類する（失敗時は空）
pub async fn lookup_registry(
    source: &dyn RegistrySource,
    classifier: &SectorClassifier,
    query: &str,
) -> Vec<RegistryCandidate> {
    let companies = match source.search(query, MAX_REGISTRY_CANDIDATES).await {
        Ok(companies) => companies,
        Err(e) => {
            warn!(source = source.name(), error = %e, "registry lookup failed");
            return Vec::new();
        }
    };

    companies
        .into_iter()
        .take(MAX_REGISTRY_CANDIDATES)
        .map(|company| classify_company(classifier, company))
        .collect()
}

pub(crate) fn classify_company(
    classifier: &SectorClassifier,
    company: RegistryCompany,
) -> RegistryCandidate {
    // 業種説明がなければ分類しない（Unmapped）
    let matched = if company.industry.trim().is_empty() {
        None
    } else {
        classifier.classify(&company.industry)
    };
    debug!(
        company = %company.name,
        industry = %company.industry,
        sector = ?matched.as_ref().map(|m| &m.sector_name),
        "registry candidate classified"
    );

    RegistryCandidate {
        company_name: company.name,
        industry: company.industry,
        sector: matched.as_ref().map(|m| m.sector_name.clone()),
        matched_keyword: matched.as_ref().map(|m| m.matched_keyword.clone()),
        score: matched.as_ref().map(|m| m.score),
        recommended_services: matched.map(|m| m.recommended_services),
    }
}

/// 外部テキストの空白・HTMLタグを整理
pub(crate) fn clean_text(text: &str) -> String {
    lazy_static! {
        static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
        static ref SPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }

    let without_tags = TAG_RE.replace_all(text, " ");
    SPACE_RE.replace_all(&without_tags, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfilerError;

    struct FixedRegistry(Vec<RegistryCompany>);

    #[async_trait]
    impl RegistrySource for FixedRegistry {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<RegistryCompany>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RegistrySource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<RegistryCompany>> {
            Err(ProfilerError::enrichment("failing", "timeout"))
        }
    }

    #[async_trait]
    impl KnowledgeSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn search(&self, _query: &str) -> Result<Option<KnowledgeEntry>> {
            Err(ProfilerError::enrichment("failing", "status 503"))
        }
    }

    fn company(name: &str, industry: &str) -> RegistryCompany {
        RegistryCompany {
            name: name.to_string(),
            industry: industry.to_string(),
        }
    }

    #[tokio::test]
    async fn test_registry_candidates_classified() {
        let source = FixedRegistry(vec![
            company("SIAM HOSPITAL CO., LTD.", "Hospital activities"),
            company("ZZ 0001", "1234"),
        ]);
        let classifier = SectorClassifier::builtin();
        let candidates = lookup_registry(&source, &classifier, "siam").await;

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].sector.as_deref(), Some("Healthcare"));
        assert_eq!(candidates[0].matched_keyword.as_deref(), Some("Hospital"));
        assert_eq!(candidates[1].sector_label(), UNMAPPED);
        assert!(candidates[1].score.is_none());
    }

    #[tokio::test]
    async fn test_empty_industry_is_unmapped() {
        let source = FixedRegistry(vec![company("SIAM HOLDINGS CO., LTD.", "  ")]);
        let candidates = lookup_registry(&source, &SectorClassifier::builtin(), "siam").await;

        assert_eq!(candidates[0].sector_label(), UNMAPPED);
        assert!(candidates[0].matched_keyword.is_none());
        assert!(candidates[0].score.is_none());
    }

    #[tokio::test]
    async fn test_registry_limited_to_three() {
        let source = FixedRegistry(
            (0..5)
                .map(|i| company(&format!("Company {}", i), "Banking"))
                .collect(),
        );
        let candidates = lookup_registry(&source, &SectorClassifier::builtin(), "company").await;
        assert_eq!(candidates.len(), MAX_REGISTRY_CANDIDATES);
    }

    #[tokio::test]
    async fn test_failures_are_swallowed() {
        let classifier = SectorClassifier::builtin();
        assert!(lookup_registry(&FailingSource, &classifier, "x").await.is_empty());
        assert!(lookup_knowledge(&FailingSource, "x").await.is_empty());
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("  Other <span class=\"searchmatch\">monetary</span>\n intermediation "),
            "Other monetary intermediation"
        );
    }
}
