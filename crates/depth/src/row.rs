use serde::{Deserialize, Serialize};

/// 표시용으로 파생된 호가 한 줄
///
/// cumulative는 같은 사이드 안에서 best-price-first 순서로 누적한
/// notional의 합계이며, 표시용 뒤집기 이전에 계산된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRow {
    pub price: f64,
    pub quantity: f64,
    pub notional: f64,
    pub cumulative: f64,
}
