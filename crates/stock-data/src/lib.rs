//! 종목 데이터 수집.
//!
//! 이 crate는 다음을 제공합니다:
//! - 종목 페이지 조회를 위한 `StockFetcher` trait
//! - irbank.net 크롤러 (`IrbankFetcher`)
//! - HTML 필드 추출 함수

pub mod error;
pub mod provider;

pub use error::{FetchError, Result};
pub use provider::{IrbankConfig, IrbankFetcher, StockFetcher};
