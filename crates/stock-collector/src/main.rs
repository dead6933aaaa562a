//! 관심 종목 스냅샷 수집기 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 실행 파일 옆의 symbols.json을 읽어 오늘 날짜 CSV 생성
//! stock-collector
//!
//! # 종목 목록/출력 위치 지정, 진행률과 BOM 없이
//! stock-collector --symbols ./symbols.json --output-dir ./out --no-progress --no-bom
//! ```

use std::path::PathBuf;

use clap::Parser;
use stock_collector::CollectorConfig;
use stock_core::logging::{init_logging, LogConfig, LogFormat};

/// 완료 메시지
const COMPLETION_MESSAGE: &str = "全ての処理が完了しました。";

#[derive(Parser)]
#[command(name = "stock-collector")]
#[command(about = "Watchlist stock snapshot collector (irbank.net -> YYYYMMDD.csv)", long_about = None)]
#[command(version)]
struct Cli {
    /// 종목 목록 JSON 파일 (기본: 실행 파일 옆의 symbols.json)
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// CSV 출력 디렉터리 (기본: 현재 디렉터리)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// 진행률 표시 끄기
    #[arg(long)]
    no_progress: bool,

    /// UTF-8 BOM 없이 저장
    #[arg(long)]
    no_bom: bool,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 로그 형식 (pretty, json, compact; 기본: LOG_FORMAT 환경변수)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    /// 환경변수 기반 로그 설정에 CLI 인자 적용
    fn log_config(&self, base: LogConfig) -> Result<LogConfig, String> {
        let mut config = base;
        config.level = format!("stock_collector={0},stock_data={0}", self.log_level);
        if let Some(format) = &self.log_format {
            config.format = format.parse::<LogFormat>()?;
        }
        Ok(config)
    }

    /// CLI 인자로 설정 덮어쓰기
    fn apply(&self, config: &mut CollectorConfig) {
        if let Some(path) = &self.symbols {
            config.symbols_path = path.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_progress {
            config.report_progress = false;
        }
        if self.no_bom {
            config.export.prepend_bom = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 로깅 초기화
    init_logging(cli.log_config(LogConfig::from_env())?)?;

    // 설정 로드
    let mut config = CollectorConfig::from_env()?;
    cli.apply(&mut config);
    tracing::debug!(?config, "설정 로드 완료");

    let summary = stock_collector::run(&config).await?;
    summary.log_summary();

    println!("{}", COMPLETION_MESSAGE);

    Ok(())
}
