//! Wikidata エンティティ検索クライアント
//!
//! `wbsearchentities` で組織名を検索し、先頭ヒットのラベルと説明を返す。

use super::{clean_text, KnowledgeEntry, KnowledgeSource};
use crate::error::{ProfilerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const SOURCE_NAME: &str = "wikidata";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

pub struct WikidataClient {
    http: Client,
    endpoint: String,
    language: String,
}

impl WikidataClient {
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sector-profiler/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProfilerError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            language: language.into(),
        })
    }
}

#[async_trait]
impl KnowledgeSource for WikidataClient {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str) -> Result<Option<KnowledgeEntry>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "wbsearchentities"),
                ("search", query),
                ("language", self.language.as_str()),
                ("uselang", self.language.as_str()),
                ("type", "item"),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| ProfilerError::enrichment(SOURCE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfilerError::enrichment(
                SOURCE_NAME,
                format!("status {}", status),
            ));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProfilerError::enrichment(SOURCE_NAME, format!("レスポンス解析失敗: {}", e)))?;

        Ok(body.search.into_iter().next().and_then(into_entry))
    }
}

fn into_entry(hit: SearchHit) -> Option<KnowledgeEntry> {
    let entry = KnowledgeEntry {
        label: hit.label.map(|s| clean_text(&s)).filter(|s| !s.is_empty()),
        category: hit.description.map(|s| clean_text(&s)).filter(|s| !s.is_empty()),
    };
    (!entry.is_empty()).then_some(entry)
}
