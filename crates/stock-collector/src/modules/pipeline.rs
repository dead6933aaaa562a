//! 수집 파이프라인.
//!
//! 종목 목록 로드 → 종목별 순차 조회 → CSV 저장의 단방향 흐름입니다.
//! 한 번에 하나의 요청만 보내며, 조회 실패는 해당 종목만 건너뜁니다.
//! CSV 저장 실패만 실행 전체를 실패시킵니다.

use std::fmt;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use stock_core::{StockRecord, Symbol};
use stock_data::{IrbankFetcher, StockFetcher};
use tracing::{error, info};

use super::export::write_csv;
use super::progress::ProgressReporter;
use super::symbols::load_symbols;
use crate::{CollectorConfig, Result, RunSummary};

/// 실행 단계. 이전 단계로 돌아가지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    /// 종목 목록 읽는 중
    Loading,
    /// 종목 조회 중
    Fetching,
    /// CSV 저장 중
    Writing,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Fetching => write!(f, "fetching"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// 설정대로 irbank.net 크롤러를 만들어 오늘 날짜로 실행합니다.
pub async fn run(config: &CollectorConfig) -> Result<RunSummary> {
    let fetcher = IrbankFetcher::new(config.fetcher.to_irbank_config())?;
    let today = Local::now().date_naive();

    run_with(&fetcher, config, today).await
}

/// 주어진 크롤러와 날짜로 전체 파이프라인을 실행합니다.
///
/// 종목이 없거나 모든 조회가 실패해도 헤더만 있는 CSV를 저장하고 성공합니다.
pub async fn run_with(
    fetcher: &dyn StockFetcher,
    config: &CollectorConfig,
    date: NaiveDate,
) -> Result<RunSummary> {
    let started = Instant::now();

    info!(stage = %RunStage::Loading, path = %config.symbols_path.display(), "종목 목록 로드");
    let symbols = load_symbols(&config.symbols_path);

    info!(stage = %RunStage::Fetching, total = symbols.len(), "종목 조회 시작");
    let records = collect_records(fetcher, &symbols, config.report_progress).await;

    info!(stage = %RunStage::Writing, rows = records.len(), "CSV 저장");
    let output_path = write_csv(&records, &config.output_dir, date, &config.export)?;

    Ok(RunSummary {
        total: symbols.len(),
        success: records.len(),
        errors: symbols.len() - records.len(),
        output_path,
        elapsed: started.elapsed(),
    })
}

/// 종목을 원본 순서대로 하나씩 조회하여 성공한 결과만 모읍니다.
pub async fn collect_records(
    fetcher: &dyn StockFetcher,
    symbols: &[Symbol],
    report_progress: bool,
) -> Vec<StockRecord> {
    let total = symbols.len();
    let progress = ProgressReporter::new(total, report_progress);
    let mut records = Vec::with_capacity(total);

    for (i, symbol) in symbols.iter().enumerate() {
        match fetcher.fetch_stock(symbol).await {
            Ok(record) => records.push(record),
            Err(e) => progress.suspend(|| {
                error!(symbol = %symbol, error = %e, "종목 조회 실패, 건너뜀");
            }),
        }
        progress.update(i);
    }
    progress.finish();

    records
}
