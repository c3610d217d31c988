use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod book;
mod error;

pub use book::{BookSnapshot, PriceLevel};
pub use error::ExchangeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExchangeId {
    Binance,
    Bithumb,
    Okx,
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeId::Binance => write!(f, "binance"),
            ExchangeId::Bithumb => write!(f, "bithumb"),
            ExchangeId::Okx => write!(f, "okx"),
        }
    }
}

impl FromStr for ExchangeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binance" => Ok(ExchangeId::Binance),
            "bithumb" => Ok(ExchangeId::Bithumb),
            "okx" => Ok(ExchangeId::Okx),
            other => Err(format!(
                "unknown exchange: {other} (expected binance, bithumb or okx)"
            )),
        }
    }
}

/// 호가의 방향. 매수(bid) 또는 매도(ask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_id_from_str() {
        assert_eq!("binance".parse::<ExchangeId>(), Ok(ExchangeId::Binance));
        assert_eq!("Bithumb".parse::<ExchangeId>(), Ok(ExchangeId::Bithumb));
        assert_eq!("OKX".parse::<ExchangeId>(), Ok(ExchangeId::Okx));
        assert!("upbit".parse::<ExchangeId>().is_err());
    }

    #[test]
    fn test_exchange_id_display_round_trip() {
        for id in [ExchangeId::Binance, ExchangeId::Bithumb, ExchangeId::Okx] {
            assert_eq!(id.to_string().parse::<ExchangeId>(), Ok(id));
        }
    }

    #[test]
    fn test_side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
    }
}
