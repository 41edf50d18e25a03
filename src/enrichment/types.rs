use serde::{Deserialize, Serialize};

pub const UNMAPPED: &str = "Unmapped";

/// ナレッジベースの参照結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// 正式名称
    pub label: Option<String>,
    /// 分類（エンティティの説明文）
    pub category: Option<String>,
}

impl KnowledgeEntry {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.category.is_none()
    }
}

/// 企業レジストリの検索ヒット（分類前）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryCompany {
    pub name: String,
    /// 業種説明
    pub industry: String,
}

/// 企業レジストリの候補（業種説明でセクター分類済み）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCandidate {
    pub company_name: String,
    pub industry: String,
    /// 分類できなかった場合は None（表示は "Unmapped"）
    pub sector: Option<String>,
    pub matched_keyword: Option<String>,
    pub score: Option<u8>,
    pub recommended_services: Option<String>,
}

impl RegistryCandidate {
    pub fn sector_label(&self) -> &str {
        self.sector.as_deref().unwrap_or(UNMAPPED)
    }
}
