use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use interface::{BookSnapshot, ExchangeError, ExchangeId, PriceLevel};

use super::super::{parse_or_nan, OrderBookExchange};
use super::{BithumbClient, BASE_URL};

impl BithumbClient {
    /// 심볼을 Bithumb 형식으로 변환
    /// 예: "BTC-KRW" -> "BTC_KRW"
    fn normalize_symbol(&self, symbol: &str) -> String {
        symbol.replace("-", "_").to_uppercase()
    }
}

#[derive(Debug, Deserialize)]
struct BithumbOrderBookResponse {
    status: String,
    data: BithumbOrderBookData,
}

#[derive(Debug, Deserialize)]
struct BithumbOrderBookData {
    bids: Vec<BithumbOrderBookEntry>,
    asks: Vec<BithumbOrderBookEntry>,
}

#[derive(Debug, Deserialize)]
struct BithumbOrderBookEntry {
    price: String,
    quantity: String,
}

fn to_levels(raw: Vec<BithumbOrderBookEntry>) -> Vec<PriceLevel> {
    raw.iter()
        .map(|entry| PriceLevel::new(parse_or_nan(&entry.price), parse_or_nan(&entry.quantity)))
        .collect()
}

#[async_trait]
impl OrderBookExchange for BithumbClient {
    fn id(&self) -> ExchangeId {
        ExchangeId::Bithumb
    }

    async fn fetch_orderbook(
        &self,
        symbol: &str,
        depth: usize,
    ) -> Result<BookSnapshot, ExchangeError> {
        // Bithumb 공개 API: GET /public/orderbook/{order_currency}_{payment_currency}
        // 예: /public/orderbook/BTC_KRW?count=15
        let normalized_symbol = self.normalize_symbol(symbol);
        let endpoint = format!("/public/orderbook/{}?count={}", normalized_symbol, depth);
        let url = format!("{BASE_URL}{}", endpoint);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        let response_text = response.text().await?;

        if status != 200 {
            return Err(ExchangeError::Other(format!(
                "Bithumb API HTTP error: status {}, response: {}",
                status,
                response_text.chars().take(200).collect::<String>()
            )));
        }

        let orderbook_response: BithumbOrderBookResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                ExchangeError::Other(format!(
                    "Failed to parse Bithumb orderbook response: {}, response: {}",
                    e,
                    response_text.chars().take(200).collect::<String>()
                ))
            })?;

        if orderbook_response.status != "0000" {
            return Err(ExchangeError::Other(format!(
                "Bithumb API error: status {}",
                orderbook_response.status
            )));
        }

        // 응답 순서 그대로 보존한다 (bids 내림차순, asks 오름차순)
        let bids = to_levels(orderbook_response.data.bids);
        let asks = to_levels(orderbook_response.data.asks);

        Ok(BookSnapshot {
            exchange: ExchangeId::Bithumb,
            symbol: symbol.to_string(),
            bids,
            asks,
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle_api_error(e: &ExchangeError) {
        if let ExchangeError::Other(msg) = e {
            if msg.contains("Bithumb API error") {
                panic!("Bithumb API error: {}", msg);
            }
        }
        eprintln!("Warning: API call failed: {:?}", e);
    }

    #[test]
    fn test_normalize_symbol() {
        let client = BithumbClient::new();
        assert_eq!(client.normalize_symbol("BTC-KRW"), "BTC_KRW");
        assert_eq!(client.normalize_symbol("eth-krw"), "ETH_KRW");
    }

    #[test]
    fn test_orderbook_response_mapping() {
        let raw = r#"{
            "status": "0000",
            "data": {
                "timestamp": "1725570535000",
                "order_currency": "BTC",
                "payment_currency": "KRW",
                "bids": [
                    {"price": "80000000", "quantity": "0.1"},
                    {"price": "79990000", "quantity": "0.5"}
                ],
                "asks": [
                    {"price": "80010000", "quantity": "0.2"}
                ]
            }
        }"#;
        let parsed: BithumbOrderBookResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, "0000");

        let bids = to_levels(parsed.data.bids);
        assert_eq!(bids.len(), 2);
        assert_eq!(bids[0], PriceLevel::new(80_000_000.0, 0.1));

        let asks = to_levels(parsed.data.asks);
        assert_eq!(asks[0], PriceLevel::new(80_010_000.0, 0.2));
    }

    #[tokio::test]
    async fn test_fetch_orderbook_bithumb() {
        let client = BithumbClient::new();
        let result = client.fetch_orderbook("BTC-KRW", 15).await;

        match result {
            Ok(orderbook) => {
                assert_eq!(orderbook.exchange, ExchangeId::Bithumb);
                assert_eq!(orderbook.symbol, "BTC-KRW");
                assert!(!orderbook.bids.is_empty(), "bids should not be empty");
                assert!(!orderbook.asks.is_empty(), "asks should not be empty");

                // bids는 가격 내림차순인지 확인
                for i in 1..orderbook.bids.len() {
                    assert!(
                        orderbook.bids[i - 1].price >= orderbook.bids[i].price,
                        "bids should be sorted in descending order by price"
                    );
                }

                // asks는 가격 오름차순인지 확인
                for i in 1..orderbook.asks.len() {
                    assert!(
                        orderbook.asks[i - 1].price <= orderbook.asks[i].price,
                        "asks should be sorted in ascending order by price"
                    );
                }

                println!("\nOrderbook for {}:", orderbook.symbol);
                println!(
                    "  Best bid: {} @ {}",
                    orderbook.bids[0].price, orderbook.bids[0].quantity
                );
                println!(
                    "  Best ask: {} @ {}",
                    orderbook.asks[0].price, orderbook.asks[0].quantity
                );
            }
            Err(e) => {
                handle_api_error(&e);
            }
        }
    }
}
