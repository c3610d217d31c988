mod orderbook;

pub(crate) const BASE_URL: &str = "https://www.okx.com";

pub struct OkxClient {
    pub(crate) http: reqwest::Client,
}

impl OkxClient {
    pub fn new() -> Self {
        Self {
            http: crate::build_http_client(),
        }
    }
}

impl Default for OkxClient {
    fn default() -> Self {
        Self::new()
    }
}
