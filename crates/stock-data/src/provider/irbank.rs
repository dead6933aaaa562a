//! irbank.net 크롤러.
//!
//! 일본 주식의 종목 페이지(`https://irbank.net/<종목코드>`)에서
//! 회사명, 종가, 배당수익률, PBR을 표시된 문자열 그대로 수집합니다.
//!
//! ## 페이지 구조
//! - `<h1>7203 トヨタ自動車 株式情報資料</h1>`: 회사명
//! - `<dt>終値</dt><dd>2,850</dd>` 형태의 정의 목록: 각 지표 값
//!
//! 레이블 문자열은 사이트 마크업과의 계약입니다. 마크업이 바뀌면 오류 없이
//! 빈 값이 나오므로 아래 상수를 먼저 확인하세요.
//!
//! ## 사용 예시
//! ```rust,ignore
//! let fetcher = IrbankFetcher::new(IrbankConfig::default())?;
//! let record = fetcher.fetch_stock(&Symbol::new("7203")).await?;
//! println!("종가: {}", record.price);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::debug;

use stock_core::{StockRecord, Symbol};

use super::StockFetcher;
use crate::{FetchError, Result};

/// 기본 조회 대상 호스트.
pub const DEFAULT_BASE_URL: &str = "https://irbank.net";

/// 회사명 헤딩 끝에 붙는 고정 문구.
pub const COMPANY_NAME_SUFFIX: &str = "株式情報資料";

/// 종가: "終値" 레이블의 두 번째 항목 (첫 번째는 전일 종가 요약).
pub const PRICE_FIELD: LabeledField = LabeledField {
    label: "終値",
    occurrence: 1,
};

/// 배당수익률: "配当利回り" 레이블의 첫 번째 항목.
pub const DIVIDEND_YIELD_FIELD: LabeledField = LabeledField {
    label: "配当利回り",
    occurrence: 0,
};

/// PBR: "PBR" 레이블의 두 번째 항목.
pub const PBR_FIELD: LabeledField = LabeledField {
    label: "PBR",
    occurrence: 1,
};

/// `<dt>` 레이블로 찾는 필드 정의.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledField {
    /// `<dt>` 텍스트에 포함되어야 하는 문자열
    pub label: &'static str,
    /// 일치하는 `<dt>` 중 몇 번째를 사용할지 (0부터)
    pub occurrence: usize,
}

/// irbank.net 크롤러 설정
#[derive(Debug, Clone)]
pub struct IrbankConfig {
    /// 기본 URL (종목 코드가 경로로 붙음)
    pub base_url: String,
    /// 요청 타임아웃 (None이면 클라이언트 기본값)
    pub timeout: Option<Duration>,
}

impl Default for IrbankConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// irbank.net 크롤러
///
/// 종목당 한 번의 GET 요청만 보내며 재시도하지 않습니다.
pub struct IrbankFetcher {
    client: Client,
    base_url: String,
}

impl IrbankFetcher {
    /// 설정으로 생성
    pub fn new(config: IrbankConfig) -> Result<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| FetchError::Config(format!("base_url '{}': {}", config.base_url, e)))?;

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 종목 페이지 URL
    pub fn stock_url(&self, symbol: &Symbol) -> String {
        format!("{}/{}", self.base_url, symbol)
    }
}

#[async_trait]
impl StockFetcher for IrbankFetcher {
    async fn fetch_stock(&self, symbol: &Symbol) -> Result<StockRecord> {
        let url = self.stock_url(symbol);
        debug!(symbol = %symbol, url = %url, "종목 페이지 조회");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let html = response.text().await?;
        Ok(parse_stock_page(symbol.as_str(), &html))
    }
}

/// 종목 페이지 HTML에서 수집 결과를 만듭니다.
///
/// 찾지 못한 필드는 빈 문자열이 됩니다.
pub fn parse_stock_page(symbol: &str, html: &str) -> StockRecord {
    let document = Html::parse_document(html);

    StockRecord {
        symbol: symbol.to_string(),
        company_name: extract_company_name(&document, symbol).unwrap_or_default(),
        price: extract_price(&document).unwrap_or_default(),
        dividend_yield: extract_dividend_yield(&document).unwrap_or_default(),
        pbr: extract_pbr(&document).unwrap_or_default(),
    }
}

/// 회사명 추출 (첫 번째 `<h1>`)
pub fn extract_company_name(document: &Html, symbol: &str) -> Option<String> {
    let selector = Selector::parse("h1").ok()?;
    let heading = document.select(&selector).next()?;
    let text = heading.text().collect::<String>();
    Some(strip_company_name(&text, symbol))
}

/// 헤딩 텍스트에서 종목 코드와 고정 문구를 한 번씩 제거하고 공백을 정리합니다.
///
/// "1234 Example Co. 株式情報資料" -> "Example Co."
pub fn strip_company_name(heading: &str, symbol: &str) -> String {
    heading
        .replacen(symbol, "", 1)
        .replacen(COMPANY_NAME_SUFFIX, "", 1)
        .trim()
        .to_string()
}

/// 종가 추출
pub fn extract_price(document: &Html) -> Option<String> {
    extract_labeled_value(document, &PRICE_FIELD)
}

/// 배당수익률 추출
pub fn extract_dividend_yield(document: &Html) -> Option<String> {
    extract_labeled_value(document, &DIVIDEND_YIELD_FIELD)
}

/// PBR 추출
pub fn extract_pbr(document: &Html) -> Option<String> {
    extract_labeled_value(document, &PBR_FIELD)
}

/// 레이블 `<dt>`의 바로 다음 형제 요소 텍스트를 추출합니다.
///
/// HTML 구조: `<dt>配当利回り</dt><dd>2.80%</dd>`
pub fn extract_labeled_value(document: &Html, field: &LabeledField) -> Option<String> {
    let selector = Selector::parse("dt").ok()?;

    let label = document
        .select(&selector)
        .filter(|dt| dt.text().collect::<String>().contains(field.label))
        .nth(field.occurrence)?;

    // 사이의 텍스트 노드(공백)는 건너뜀
    let value = label.next_siblings().find_map(ElementRef::wrap)?;
    Some(value.text().collect::<String>().trim().to_string())
}
