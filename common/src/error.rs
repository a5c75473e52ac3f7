//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pricing option: {0}")]
    InvalidPricingOption(i64),

    #[error("Invalid sort option: {0}")]
    InvalidSortOption(String),

    #[error("Query error: {0}")]
    Query(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
