use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ExchangeId;

/// 오더북의 단일 호가 (가격, 수량)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    pub quantity: f64,
}

impl PriceLevel {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }

    /// 해당 호가의 명목 금액 (price * quantity)
    pub fn notional(&self) -> f64 {
        self.price * self.quantity
    }
}

/// 한 번의 조회로 얻은 오더북 전체 (양쪽 사이드)
///
/// bids는 가격 내림차순, asks는 가격 오름차순 (둘 다 best-price-first).
/// 순서는 거래소 응답 순서 그대로이며 정렬 검증은 depth 변환 단계에서 수행한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub exchange: ExchangeId,
    pub symbol: String,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    pub updated_at: DateTime<Utc>,
}

impl BookSnapshot {
    /// 최우선 매수 호가
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// 최우선 매도 호가
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// 중간 가격. 어느 한쪽 사이드라도 비어 있으면 None
    pub fn mid_price(&self) -> Option<f64> {
        let bid = self.best_bid()?;
        let ask = self.best_ask()?;
        Some((bid.price + ask.price) / 2.0)
    }

    /// 스프레드 (best ask - best bid)
    pub fn spread(&self) -> Option<f64> {
        let bid = self.best_bid()?;
        let ask = self.best_ask()?;
        Some(ask.price - bid.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> BookSnapshot {
        BookSnapshot {
            exchange: ExchangeId::Binance,
            symbol: "BTCUSDT".to_string(),
            bids,
            asks,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_notional() {
        let level = PriceLevel::new(100.5, 2.0);
        assert_eq!(level.notional(), 201.0);
    }

    #[test]
    fn test_mid_price_and_spread() {
        let book = snapshot(
            vec![PriceLevel::new(100.0, 2.0), PriceLevel::new(99.5, 1.0)],
            vec![PriceLevel::new(100.5, 1.0), PriceLevel::new(101.0, 3.0)],
        );

        assert_eq!(book.best_bid().unwrap().price, 100.0);
        assert_eq!(book.best_ask().unwrap().price, 100.5);
        assert_eq!(book.mid_price(), Some(100.25));
        assert_eq!(book.spread(), Some(0.5));
    }

    #[test]
    fn test_mid_price_undefined_when_side_empty() {
        let no_asks = snapshot(vec![PriceLevel::new(100.0, 1.0)], vec![]);
        assert!(no_asks.mid_price().is_none());
        assert!(no_asks.spread().is_none());

        let no_bids = snapshot(vec![], vec![PriceLevel::new(100.5, 1.0)]);
        assert!(no_bids.mid_price().is_none());

        let empty = snapshot(vec![], vec![]);
        assert!(empty.mid_price().is_none());
        assert!(empty.best_bid().is_none());
        assert!(empty.best_ask().is_none());
    }
}
