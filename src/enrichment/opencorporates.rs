//! OpenCorporates 企業検索クライアント

use super::{clean_text, RegistryCompany, RegistrySource};
use crate::error::{ProfilerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const SOURCE_NAME: &str = "opencorporates";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: SearchResults,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    companies: Vec<CompanyWrapper>,
}

#[derive(Debug, Deserialize)]
struct CompanyWrapper {
    company: Company,
}

#[derive(Debug, Deserialize)]
struct Company {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    industry_codes: Vec<IndustryCodeWrapper>,
}

#[derive(Debug, Deserialize)]
struct IndustryCodeWrapper {
    industry_code: IndustryCode,
}

#[derive(Debug, Deserialize)]
struct IndustryCode {
    #[serde(default)]
    description: Option<String>,
}

pub struct OpenCorporatesClient {
    http: Client,
    base_url: String,
    api_token: Option<String>,
}

impl OpenCorporatesClient {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sector-profiler/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProfilerError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
        })
    }
}

#[async_trait]
impl RegistrySource for OpenCorporatesClient {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RegistryCompany>> {
        let url = format!("{}/companies/search", self.base_url);
        let per_page = limit.to_string();

        let mut request = self
            .http
            .get(&url)
            .query(&[("q", query), ("per_page", per_page.as_str())]);
        if let Some(token) = &self.api_token {
            request = request.query(&[("api_token", token.as_str())]);
        }

        let response = request
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

        Ok(into_companies(body, limit))
    }
}

fn into_companies(body: SearchResponse, limit: usize) -> Vec<RegistryCompany> {
    body.results
        .companies
        .into_iter()
        .filter_map(|wrapper| {
            let company = wrapper.company;
            let name = clean_text(company.name.as_deref().unwrap_or_default());
            if name.is_empty() {
                return None;
            }
            Some(RegistryCompany {
                industry: industry_text(&company),
                name,
            })
        })
        .take(limit)
        .collect()
}

/// 業種コードの説明を連結（業種コードがなければ空）
///
/// 会社種別（"Private Limited Company" 等）は法人形態なので業種として扱わない。
fn industry_text(company: &Company) -> String {
    company
        .industry_codes
        .iter()
        .filter_map(|c| c.industry_code.description.as_deref())
        .map(clean_text)
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
