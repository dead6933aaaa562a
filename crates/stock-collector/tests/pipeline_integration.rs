//! 수집 파이프라인 통합 테스트.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use proptest::prelude::*;
use stock_collector::modules::{collect_records, CSV_HEADERS};
use stock_collector::{run_with, CollectorConfig, CollectorError, FetcherConfig};
use stock_core::{StockRecord, Symbol};
use stock_data::provider::irbank::{IrbankConfig, IrbankFetcher};
use stock_data::{FetchError, StockFetcher};

/// 지정한 종목만 실패하는 테스트용 크롤러
struct StubFetcher {
    failing: HashSet<String>,
}

impl StubFetcher {
    fn failing(symbols: &[&str]) -> Self {
        Self {
            failing: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl StockFetcher for StubFetcher {
    async fn fetch_stock(&self, symbol: &Symbol) -> stock_data::Result<StockRecord> {
        if self.failing.contains(symbol.as_str()) {
            return Err(FetchError::Config(format!("테스트용 실패: {}", symbol)));
        }
        Ok(StockRecord {
            symbol: symbol.to_string(),
            company_name: format!("Company {}", symbol),
            price: "1,000".to_string(),
            dividend_yield: "1.00%".to_string(),
            pbr: "1.00".to_string(),
        })
    }
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()
}

fn test_config(dir: &Path, prepend_bom: bool) -> CollectorConfig {
    let mut config = CollectorConfig {
        symbols_path: dir.join("symbols.json"),
        output_dir: dir.to_path_buf(),
        report_progress: false,
        fetcher: FetcherConfig::default(),
        ..Default::default()
    };
    config.export.prepend_bom = prepend_bom;
    config
}

fn write_symbols(dir: &Path, symbols: &[&str]) {
    let json = format!(
        "{{\"symbols\": [{}]}}",
        symbols
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join(", ")
    );
    fs::write(dir.join("symbols.json"), json).unwrap();
}

/// CSV를 다시 읽어 (헤더, 행)을 반환 (BOM이 있으면 건너뜀)
fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let content = fs::read_to_string(path).unwrap();
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

#[tokio::test]
async fn test_failed_symbols_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_symbols(dir.path(), &["7203", "0000", "9984", "6758"]);
    let config = test_config(dir.path(), true);
    let fetcher = StubFetcher::failing(&["0000"]);

    let summary = run_with(&fetcher, &config, test_date()).await.unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.success, 3);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.output_path, dir.path().join("20240109.csv"));

    let (header, rows) = read_csv(&summary.output_path);
    assert_eq!(header, CSV_HEADERS);
    let codes: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(codes, vec!["7203", "9984", "6758"]);
    assert_eq!(rows[0], vec!["7203", "Company 7203", "1,000", "1.00%", "1.00"]);
}

#[tokio::test]
async fn test_all_failures_still_write_header() {
    let dir = tempfile::tempdir().unwrap();
    write_symbols(dir.path(), &["1111", "2222"]);
    let config = test_config(dir.path(), false);
    let fetcher = StubFetcher::failing(&["1111", "2222"]);

    let summary = run_with(&fetcher, &config, test_date()).await.unwrap();

    assert_eq!(summary.success, 0);
    let (header, rows) = read_csv(&summary.output_path);
    assert_eq!(header, CSV_HEADERS);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_empty_symbol_list_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    write_symbols(dir.path(), &[]);
    let config = test_config(dir.path(), true);

    let summary = run_with(&StubFetcher::failing(&[]), &config, test_date())
        .await
        .unwrap();

    assert_eq!(summary.total, 0);
    let (header, rows) = read_csv(&summary.output_path);
    assert_eq!(header, CSV_HEADERS);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_missing_or_corrupt_symbols_file_writes_header_only() {
    // 파일 없음
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), true);
    let summary = run_with(&StubFetcher::failing(&[]), &config, test_date())
        .await
        .unwrap();
    assert_eq!(summary.total, 0);
    assert!(read_csv(&summary.output_path).1.is_empty());

    // 형식 오류
    fs::write(dir.path().join("symbols.json"), "not json").unwrap();
    let summary = run_with(&StubFetcher::failing(&[]), &config, test_date())
        .await
        .unwrap();
    assert_eq!(summary.total, 0);
    assert!(read_csv(&summary.output_path).1.is_empty());
}

#[tokio::test]
async fn test_same_day_rerun_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), false);
    let fetcher = StubFetcher::failing(&[]);

    write_symbols(dir.path(), &["1111", "2222", "3333"]);
    let first = run_with(&fetcher, &config, test_date()).await.unwrap();

    write_symbols(dir.path(), &["4444"]);
    let second = run_with(&fetcher, &config, test_date()).await.unwrap();

    assert_eq!(first.output_path, second.output_path);
    let (_, rows) = read_csv(&second.output_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "4444");

    let csv_files = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "csv"))
        .count();
    assert_eq!(csv_files, 1);
}

#[tokio::test]
async fn test_write_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_symbols(dir.path(), &["7203"]);
    let mut config = test_config(dir.path(), true);
    config.output_dir = dir.path().join("does-not-exist");

    let result = run_with(&StubFetcher::failing(&[]), &config, test_date()).await;

    assert!(matches!(result, Err(CollectorError::Io(_))));
}

#[tokio::test]
async fn test_end_to_end_against_mock_server() {
    let mut server = mockito::Server::new_async().await;
    let page = |code: &str, name: &str, price: &str| {
        format!(
            "<html><body><h1>{code} {name} 株式情報資料</h1>\
             <dl><dt>終値</dt><dd>前日</dd><dt>配当利回り</dt><dd>3.00%</dd><dt>PBR</dt><dd>-</dd></dl>\
             <dl><dt>終値</dt><dd>{price}</dd><dt>PBR</dt><dd>0.95</dd></dl>\
             </body></html>"
        )
    };
    let _ok1 = server
        .mock("GET", "/8306")
        .with_status(200)
        .with_body(page("8306", "三菱UFJフィナンシャル・グループ", "1,650"))
        .create_async()
        .await;
    let _fail = server
        .mock("GET", "/9999")
        .with_status(500)
        .create_async()
        .await;
    let _ok2 = server
        .mock("GET", "/8058")
        .with_status(200)
        .with_body(page("8058", "三菱商事", "3,120"))
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_symbols(dir.path(), &["8306", "9999", "8058"]);
    let config = test_config(dir.path(), true);
    let fetcher = IrbankFetcher::new(IrbankConfig {
        base_url: server.url(),
        timeout: None,
    })
    .unwrap();

    let summary = run_with(&fetcher, &config, test_date()).await.unwrap();

    assert_eq!(summary.success, 2);
    assert_eq!(summary.errors, 1);

    let bytes = fs::read(&summary.output_path).unwrap();
    assert!(bytes.starts_with("\u{FEFF}".as_bytes()));

    let (_, rows) = read_csv(&summary.output_path);
    assert_eq!(
        rows,
        vec![
            vec!["8306", "三菱UFJフィナンシャル・グループ", "1,650", "3.00%", "0.95"],
            vec!["8058", "三菱商事", "3,120", "3.00%", "0.95"],
        ]
    );
}

proptest! {
    #[test]
    fn prop_output_is_ordered_subsequence(
        entries in prop::collection::vec(("[0-9]{4}", any::<bool>()), 0..20)
    ) {
        let symbols: Vec<Symbol> = entries.iter().map(|(code, _)| Symbol::new(code.clone())).collect();
        let failing: Vec<&str> = entries
            .iter()
            .filter(|(_, fails)| *fails)
            .map(|(code, _)| code.as_str())
            .collect();
        let fetcher = StubFetcher::failing(&failing);

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let records = runtime.block_on(collect_records(&fetcher, &symbols, false));

        let expected: Vec<&str> = symbols
            .iter()
            .map(Symbol::as_str)
            .filter(|code| !failing.contains(code))
            .collect();
        let actual: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();

        prop_assert!(actual.len() <= symbols.len());
        prop_assert_eq!(actual, expected);
    }
}
