//! # Stock Core
//!
//! 관심 종목 수집기의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 워크스페이스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 종목 코드(`Symbol`)와 수집 결과(`StockRecord`)
//! - 종목 목록 설정 파일(`SymbolConfig`)
//! - 로깅 인프라

pub mod error;
pub mod logging;
pub mod types;

pub use error::*;
pub use logging::*;
pub use types::*;
