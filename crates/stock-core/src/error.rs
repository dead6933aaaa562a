//! 핵심 타입의 에러 정의.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 파일 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 파싱 에러
    #[error("JSON 파싱 에러: {0}")]
    Json(#[from] serde_json::Error),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;
