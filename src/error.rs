use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("外部参照エラー ({source_name}): {message}")]
    Enrichment {
        source_name: &'static str,
        message: String,
    },

    #[error("照会する組織名がありません: {0}")]
    EmptyBatch(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] sector_profiler_common::Error),
}

impl ProfilerError {
    pub fn enrichment(source_name: &'static str, message: impl Into<String>) -> Self {
        ProfilerError::Enrichment {
            source_name,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfilerError>;
