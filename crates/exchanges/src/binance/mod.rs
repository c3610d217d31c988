mod orderbook;

pub(crate) const BASE_URL: &str = "https://api.binance.com";

pub struct BinanceClient {
    pub(crate) http: reqwest::Client,
}

impl BinanceClient {
    pub fn new() -> Self {
        Self {
            http: crate::build_http_client(),
        }
    }
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}
