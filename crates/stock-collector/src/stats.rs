//! 실행 통계 구조체.

use std::path::PathBuf;
use std::time::Duration;

/// 한 번의 수집 실행 결과 요약
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// 입력 종목 수
    pub total: usize,
    /// 수집 성공 수 (= CSV 데이터 행 수)
    pub success: usize,
    /// 조회 실패 수
    pub errors: usize,
    /// 작성된 CSV 파일 경로
    pub output_path: PathBuf,
    /// 소요 시간
    pub elapsed: Duration,
}

impl RunSummary {
    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total,
            success = self.success,
            errors = self.errors,
            success_rate = format!("{:.1}%", self.success_rate()),
            output = %self.output_path.display(),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );
    }
}
