//! Sector Profiler Common Library
//!
//! セクター分類の型・組み込みテーブル・類似度計算・分類器

pub mod types;
pub mod error;
pub mod similarity;
pub mod builtin;
pub mod table;
pub mod classifier;

pub use types::{ManualOverride, MatchMode, MatchPolicy, MatchResult, MatchSource, SectorProfile};
pub use error::{Error, Result};
pub use similarity::partial_ratio;
pub use table::SectorTable;
pub use classifier::SectorClassifier;
