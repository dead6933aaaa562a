//! 데이터 Provider 모듈.
//!
//! ## irbank.net
//! - `IrbankFetcher`: 종목 페이지 크롤러
//! - 회사명, 종가, 배당수익률, PBR을 표시된 문자열 그대로 추출

pub mod irbank;

use async_trait::async_trait;
use stock_core::{StockRecord, Symbol};

use crate::Result;

pub use irbank::{IrbankConfig, IrbankFetcher, LabeledField};

/// 종목 한 건을 조회하는 Provider.
///
/// 실패는 `Err`로 돌려주며, 호출자는 해당 종목을 건너뛰고 계속 진행합니다.
#[async_trait]
pub trait StockFetcher: Send + Sync {
    /// 종목 페이지를 조회하여 수집 결과를 반환합니다.
    async fn fetch_stock(&self, symbol: &Symbol) -> Result<StockRecord>;
}
