//! 관심 종목 스냅샷 수집기.
//!
//! 이 crate는 다음 흐름을 실행하는 바이너리를 제공합니다:
//! - `symbols.json`에서 종목 목록 로드
//! - irbank.net에서 회사명, 종가, 배당수익률, PBR 수집 (순차 조회)
//! - 결과를 `YYYYMMDD.csv`로 저장

pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::{CollectorConfig, FetcherConfig};
pub use error::{CollectorError, Result};
pub use modules::{run, run_with};
pub use stats::RunSummary;
