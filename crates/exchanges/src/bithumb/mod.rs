mod orderbook;

pub(crate) const BASE_URL: &str = "https://api.bithumb.com";

pub struct BithumbClient {
    pub(crate) http: reqwest::Client,
}

impl BithumbClient {
    pub fn new() -> Self {
        Self {
            http: crate::build_http_client(),
        }
    }
}

impl Default for BithumbClient {
    fn default() -> Self {
        Self::new()
    }
}
