//! 종목 목록 로드.

use std::path::{Path, PathBuf};

use stock_core::{CoreResult, Symbol, SymbolConfig};
use tracing::{debug, error, warn};

/// 종목 목록 파일 이름
pub const SYMBOLS_FILE_NAME: &str = "symbols.json";

/// 실행 파일과 같은 디렉터리의 `symbols.json` 경로.
///
/// 실행 파일 위치를 알 수 없으면 현재 디렉터리 기준 상대 경로를 사용합니다.
pub fn default_symbols_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join(SYMBOLS_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(SYMBOLS_FILE_NAME)),
        Err(e) => {
            warn!(error = %e, "실행 파일 경로 확인 실패, 현재 디렉터리 사용");
            PathBuf::from(SYMBOLS_FILE_NAME)
        }
    }
}

/// 종목 목록 설정 파일 읽기.
///
/// 읽기/파싱 실패를 그대로 반환합니다.
pub fn read_symbol_config(path: &Path) -> CoreResult<SymbolConfig> {
    SymbolConfig::from_file(path)
}

/// 종목 목록 로드.
///
/// 파일이 없거나 형식이 잘못된 경우 에러를 기록하고 빈 목록을 반환합니다.
/// 빈 목록은 "처리할 종목 없음"으로 취급되며 실행은 계속됩니다.
pub fn load_symbols(path: &Path) -> Vec<Symbol> {
    match read_symbol_config(path) {
        Ok(config) => {
            debug!(path = %path.display(), count = config.symbols.len(), "종목 목록 로드");
            config.symbols
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "종목 JSON 파일 읽기 실패");
            Vec::new()
        }
    }
}
