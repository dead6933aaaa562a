//! 수집 결과 CSV 출력.
//!
//! 파일 이름은 실행 날짜(`YYYYMMDD.csv`)로 정해지며 같은 날 재실행하면 덮어씁니다.
//! 스프레드시트 프로그램의 인코딩 오인식을 막기 위해 기본으로 UTF-8 BOM을 붙입니다.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use stock_core::StockRecord;
use tracing::info;

use crate::Result;

/// CSV 헤더 (종목 코드, 회사명, 종가, 배당수익률, PBR)
pub const CSV_HEADERS: [&str; 5] = ["証券コード", "会社名", "株価（終値）", "配当利回り", "PBR"];

/// UTF-8 BOM
pub const UTF8_BOM: &str = "\u{FEFF}";

/// CSV 출력 설정
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// 파일 앞에 UTF-8 BOM 추가
    pub prepend_bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { prepend_bom: true }
    }
}

/// 출력 파일 이름 (`YYYYMMDD.csv`)
pub fn output_file_name(date: NaiveDate) -> String {
    date.format("%Y%m%d.csv").to_string()
}

/// 수집 결과를 `output_dir/YYYYMMDD.csv`에 저장합니다.
///
/// 쓰기 실패는 복구하지 않고 그대로 반환합니다.
pub fn write_csv(
    records: &[StockRecord],
    output_dir: &Path,
    date: NaiveDate,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let path = output_dir.join(output_file_name(date));

    let file = write_csv_to(records, File::create(&path)?, options)?;
    file.sync_all()?;

    info!(
        path = %path.display(),
        rows = records.len(),
        bom = options.prepend_bom,
        "CSV 저장 완료"
    );

    Ok(path)
}

/// 헤더와 행을 `writer`에 기록하고, 버퍼를 비운 writer를 돌려줍니다.
pub fn write_csv_to<W: Write>(
    records: &[StockRecord],
    mut writer: W,
    options: &ExportOptions,
) -> Result<W> {
    if options.prepend_bom {
        writer.write_all(UTF8_BOM.as_bytes())?;
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;
    for record in records {
        wtr.write_record(record.as_row())?;
    }

    Ok(wtr.into_inner().map_err(|e| e.into_error())?)
}
