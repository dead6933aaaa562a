//! 진행률 표시.
//!
//! `進捗状況: 42.86%` 한 줄을 stdout에 제자리 갱신합니다.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 진행률 라벨
pub const PROGRESS_LABEL: &str = "進捗状況";

/// 처리한 종목 비율 (%)
///
/// `index`는 0부터 시작하는 현재 종목 위치입니다.
pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (index + 1) as f64 / total as f64 * 100.0
}

/// 진행률 표시 문자열 (소수점 둘째 자리)
pub fn format_progress(index: usize, total: usize) -> String {
    format!("{}: {:.2}%", PROGRESS_LABEL, progress_percent(index, total))
}

/// 진행률 표시기.
///
/// 비활성화되었거나 종목이 없으면 아무것도 출력하지 않습니다.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    total: usize,
}

impl ProgressReporter {
    /// 새 표시기 생성
    pub fn new(total: usize, enabled: bool) -> Self {
        let bar = (enabled && total > 0).then(|| {
            let bar =
                ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::with_template("{msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        });

        Self { bar, total }
    }

    /// `index`번째 종목 처리 완료를 표시
    pub fn update(&self, index: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position((index + 1) as u64);
            bar.set_message(format_progress(index, self.total));
        }
    }

    /// 마지막 상태를 남기고 종료
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish();
        }
    }

    /// 진행률 줄을 잠시 지우고 `f`를 실행
    ///
    /// 진행 중 로그가 진행률 줄과 섞이지 않도록 할 때 사용합니다.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.bar {
            Some(bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// 출력 활성화 여부
    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }
}
