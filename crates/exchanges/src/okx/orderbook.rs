use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use interface::{BookSnapshot, ExchangeError, ExchangeId, PriceLevel};

use super::super::{parse_or_nan, OrderBookExchange};
use super::{OkxClient, BASE_URL};

impl OkxClient {
    /// 심볼을 OKX 형식으로 변환 (대시 유지)
    /// 예: "btc-usdt" -> "BTC-USDT"
    fn normalize_symbol(&self, symbol: &str) -> String {
        symbol.to_uppercase()
    }
}

#[derive(Debug, Deserialize)]
struct OkxResponse<T> {
    code: String,
    msg: String,
    data: T,
}

#[derive(Debug, Deserialize)]
struct OkxOrderBookData {
    // 레벨당 [price, size, liquidated orders, order count]
    bids: Vec<Vec<String>>,
    asks: Vec<Vec<String>>,
}

fn to_levels(raw: Vec<Vec<String>>) -> Vec<PriceLevel> {
    raw.iter()
        .map(|level| {
            let price = level.first().map(|s| parse_or_nan(s)).unwrap_or(f64::NAN);
            let quantity = level.get(1).map(|s| parse_or_nan(s)).unwrap_or(f64::NAN);
            PriceLevel::new(price, quantity)
        })
        .collect()
}

#[async_trait]
impl OrderBookExchange for OkxClient {
    fn id(&self) -> ExchangeId {
        ExchangeId::Okx
    }

    async fn fetch_orderbook(
        &self,
        symbol: &str,
        depth: usize,
    ) -> Result<BookSnapshot, ExchangeError> {
        let normalized_symbol = self.normalize_symbol(symbol);
        let url = format!(
            "{BASE_URL}/api/v5/market/books?instId={}&sz={}",
            normalized_symbol, depth
        );

        let books_response: OkxResponse<Vec<OkxOrderBookData>> =
            self.http.get(&url).send().await?.json().await?;

        if books_response.code != "0" {
            return Err(ExchangeError::Other(format!(
                "OKX API error (orderbook): {} - {}",
                books_response.code, books_response.msg
            )));
        }

        let book = books_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ExchangeError::Other("OKX API returned no orderbook data".into()))?;

        // 응답 순서 그대로 보존한다 (bids 내림차순, asks 오름차순)
        let bids = to_levels(book.bids);
        let asks = to_levels(book.asks);

        Ok(BookSnapshot {
            exchange: ExchangeId::Okx,
            symbol: normalized_symbol,
            bids,
            asks,
            updated_at: Utc::now(),
        })
    }
}
