use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use interface::{BookSnapshot, ExchangeError, ExchangeId, PriceLevel};

use super::super::{parse_or_nan, OrderBookExchange};
use super::{BinanceClient, BASE_URL};

impl BinanceClient {
    /// 심볼을 Binance 형식으로 변환
    /// 예: "BTC-USDT" -> "BTCUSDT"
    fn normalize_symbol(&self, symbol: &str) -> String {
        symbol.replace("-", "").to_uppercase()
    }
}

#[derive(Debug, Deserialize)]
struct BinanceOrderBookResponse {
    bids: Vec<[String; 2]>, // [price, quantity]
    asks: Vec<[String; 2]>, // [price, quantity]
}

fn to_levels(raw: Vec<[String; 2]>) -> Vec<PriceLevel> {
    raw.iter()
        .map(|[price, quantity]| PriceLevel::new(parse_or_nan(price), parse_or_nan(quantity)))
        .collect()
}

#[async_trait]
impl OrderBookExchange for BinanceClient {
    fn id(&self) -> ExchangeId {
        ExchangeId::Binance
    }

    async fn fetch_orderbook(
        &self,
        symbol: &str,
        depth: usize,
    ) -> Result<BookSnapshot, ExchangeError> {
        let normalized_symbol = self.normalize_symbol(symbol);
        let url = format!(
            "{}/api/v3/depth?symbol={}&limit={}",
            BASE_URL, normalized_symbol, depth
        );

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let response_text = response.text().await?;
            return Err(ExchangeError::Other(format!(
                "Binance API HTTP error: status {}, response: {}",
                status,
                response_text.chars().take(200).collect::<String>()
            )));
        }

        let orderbook_response: BinanceOrderBookResponse = response.json().await?;

        // Binance는 best-price-first로 반환한다. 응답 순서를 그대로 보존
        let bids = to_levels(orderbook_response.bids);
        let asks = to_levels(orderbook_response.asks);

        Ok(BookSnapshot {
            exchange: ExchangeId::Binance,
            symbol: normalized_symbol,
            bids,
            asks,
            updated_at: Utc::now(),
        })
    }
}
