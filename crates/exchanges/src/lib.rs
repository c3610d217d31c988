use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use interface::{BookSnapshot, ExchangeError, ExchangeId};

pub mod binance;
pub mod bithumb;
pub mod okx;

#[async_trait]
pub trait OrderBookExchange: Send + Sync {
    fn id(&self) -> ExchangeId;

    /// 특정 심볼의 오더북 스냅샷 조회
    /// symbol: 거래쌍 (예: "BTC-USDT"), depth: 사이드별 호가 단계 수
    ///
    /// 응답 순서를 그대로 보존한다 (bids 내림차순, asks 오름차순).
    /// 정렬/유효성 검증은 depth 변환 단계에서 수행한다.
    async fn fetch_orderbook(
        &self,
        symbol: &str,
        depth: usize,
    ) -> Result<BookSnapshot, ExchangeError>;
}

/// 공용 HTTP 클라이언트 생성. 5초 타임아웃, 브라우저 User-Agent
pub(crate) fn build_http_client() -> reqwest::Client {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .user_agent("Mozilla/5.0")
        .default_headers(headers)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("failed to build HTTP client")
}

/// 숫자 문자열 파싱. 실패하면 NaN이 되어 depth 검증 단계에서 걸러진다
pub(crate) fn parse_or_nan(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}

// Convenience re-exports
pub use binance::BinanceClient;
pub use bithumb::BithumbClient;
pub use okx::OkxClient;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_nan() {
        assert_eq!(parse_or_nan("100.25"), 100.25);
        assert!(parse_or_nan("").is_nan());
        assert!(parse_or_nan("abc").is_nan());
    }
}
