//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 종목 조회 오류.
///
/// 필드 추출 실패는 오류가 아니며 빈 문자열로 처리됩니다.
#[derive(Debug, Error)]
pub enum FetchError {
    /// 네트워크 오류 또는 응답 본문 읽기 실패
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 2xx가 아닌 응답
    #[error("unexpected status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// 잘못된 설정 (예: 기본 URL)
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
