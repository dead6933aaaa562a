//! 종목 코드 및 종목 목록 설정 정의.
//!
//! 이 모듈은 종목 관련 타입을 정의합니다:
//! - `Symbol` - 조회 키이자 URL 경로 세그먼트로 쓰이는 종목 코드
//! - `SymbolConfig` - `symbols.json` 파일의 내용

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::CoreResult;

/// 종목 코드 (예: "7203", "9984").
///
/// 내부 구조를 가정하지 않는 불투명한 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// 새 종목 코드를 생성합니다.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// 문자열 슬라이스로 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// 종목 목록 설정.
///
/// `{"symbols": ["1234", "5678"]}` 형태의 JSON 객체이며, 순서가 곧 출력 순서입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// 종목 코드 목록 (원본 순서 유지)
    pub symbols: Vec<Symbol>,
}

impl SymbolConfig {
    /// JSON 문자열에서 파싱합니다.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON 파일에서 읽어옵니다.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
