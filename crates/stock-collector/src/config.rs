//! 환경변수 기반 설정 모듈.

use std::path::PathBuf;
use std::time::Duration;

use stock_data::provider::irbank::{IrbankConfig, DEFAULT_BASE_URL};

use crate::error::CollectorError;
use crate::modules::export::ExportOptions;
use crate::modules::symbols::default_symbols_path;
use crate::Result;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 종목 목록 JSON 파일 경로
    pub symbols_path: PathBuf,
    /// CSV 출력 디렉터리
    pub output_dir: PathBuf,
    /// 진행률 표시 여부
    pub report_progress: bool,
    /// 크롤러 설정
    pub fetcher: FetcherConfig,
    /// CSV 출력 설정
    pub export: ExportOptions,
}

/// 크롤러 설정
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// 종목 페이지 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초, 미설정 시 클라이언트 기본값)
    pub timeout_secs: Option<u64>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            symbols_path: default_symbols_path(),
            output_dir: PathBuf::from("."),
            report_progress: true,
            fetcher: FetcherConfig::default(),
            export: ExportOptions::default(),
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드 (`.env` 파일 포함)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로 설정 로드
    ///
    /// 값이 없는 키는 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("STOCK_BASE_URL").unwrap_or(defaults.fetcher.base_url);
        if base_url.trim().is_empty() {
            return Err(CollectorError::Config(
                "STOCK_BASE_URL 환경변수가 비어 있습니다".to_string(),
            ));
        }

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => Some(v.trim().parse().map_err(|_| {
                CollectorError::Config(format!(
                    "REQUEST_TIMEOUT_SECS 값이 올바르지 않습니다: {}",
                    v
                ))
            })?),
            None => None,
        };

        Ok(Self {
            symbols_path: parse_path(lookup("SYMBOLS_PATH")).unwrap_or(defaults.symbols_path),
            output_dir: parse_path(lookup("OUTPUT_DIR")).unwrap_or(defaults.output_dir),
            report_progress: parse_bool(lookup("REPORT_PROGRESS"), defaults.report_progress),
            fetcher: FetcherConfig {
                base_url,
                timeout_secs,
            },
            export: ExportOptions {
                prepend_bom: parse_bool(lookup("PREPEND_BOM"), defaults.export.prepend_bom),
            },
        })
    }
}

impl FetcherConfig {
    /// 요청 타임아웃을 Duration으로 반환
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// irbank.net 크롤러 설정으로 변환
    pub fn to_irbank_config(&self) -> IrbankConfig {
        IrbankConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout(),
        }
    }
}

/// 경로 값 파싱 (빈 값은 무시)
fn parse_path(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

/// bool 값 파싱 ("true" 또는 "1"만 참)
fn parse_bool(value: Option<String>, default: bool) -> bool {
    value.map(|v| v == "true" || v == "1").unwrap_or(default)
}
