//! 종목별 수집 결과.

/// 한 종목의 수집 결과.
///
/// 모든 값은 사이트에 표시된 문자열 그대로 보관합니다 (천 단위 쉼표, `%` 포함).
/// 추출에 실패한 필드는 빈 문자열입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockRecord {
    /// 조회에 사용한 종목 코드
    pub symbol: String,
    /// 회사명
    pub company_name: String,
    /// 종가
    pub price: String,
    /// 배당수익률
    pub dividend_yield: String,
    /// PBR (주가순자산비율)
    pub pbr: String,
}

impl StockRecord {
    /// CSV 한 행에 해당하는 필드 배열을 반환합니다.
    ///
    /// 순서: 종목 코드, 회사명, 종가, 배당수익률, PBR
    pub fn as_row(&self) -> [&str; 5] {
        [
            &self.symbol,
            &self.company_name,
            &self.price,
            &self.dividend_yield,
            &self.pbr,
        ]
    }
}
