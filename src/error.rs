use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("API呼び出しエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("APIがエラーを返しました: HTTP {0}")]
    Status(u16),

    #[error("APIがタイムアウトしました ({0}秒)")]
    Timeout(u64),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error("URLが不正です: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
