//! 수집 파이프라인 모듈.

pub mod export;
pub mod pipeline;
pub mod progress;
pub mod symbols;

pub use export::{output_file_name, write_csv, ExportOptions, CSV_HEADERS, UTF8_BOM};
pub use pipeline::{collect_records, run, run_with, RunStage};
pub use progress::{format_progress, progress_percent, ProgressReporter};
pub use symbols::{default_symbols_path, load_symbols, read_symbol_config, SYMBOLS_FILE_NAME};
