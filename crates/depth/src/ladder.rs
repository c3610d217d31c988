use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use interface::{BookSnapshot, ExchangeId, Side};

use crate::row::DepthRow;
use crate::transform::transform_side;

/// 한 틱의 표시용 오더북 모델
///
/// 매도(asks)와 매수(bids)를 세로로 쌓고 가운데에 mid price를 두는 화면을
/// 위한 데이터. 렌더링 (마크업, 색상 그라데이션)은 소비자 몫이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLadder {
    pub exchange: ExchangeId,
    pub symbol: String,
    /// 매수 호가. 가격 내림차순 (best bid 먼저)
    pub bids: Vec<DepthRow>,
    /// 매도 호가. 표시 순서로 뒤집혀 있음 (최고가 먼저, best ask가 마지막)
    pub asks: Vec<DepthRow>,
    /// 중간 가격. 어느 한쪽 사이드라도 비면 None
    pub mid_price: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl DepthLadder {
    /// 스냅샷 하나를 표시용 모델로 변환
    ///
    /// 검증에 실패한 사이드는 이번 틱에서 빈 목록으로 강등된다.
    /// 항상 잘 구성된 모델을 반환하며 오류를 밖으로 던지지 않는다.
    pub fn from_snapshot(snapshot: &BookSnapshot) -> Self {
        let bids = match transform_side(&snapshot.bids, Side::Buy) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(symbol = %snapshot.symbol, "bid side discarded: {e}");
                Vec::new()
            }
        };
        let asks = match transform_side(&snapshot.asks, Side::Sell) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(symbol = %snapshot.symbol, "ask side discarded: {e}");
                Vec::new()
            }
        };

        // mid price는 뒤집기 전, 검증을 통과한 best-first 순서에서 계산한다
        let mid_price = match (bids.first(), asks.first()) {
            (Some(bid), Some(ask)) => Some((bid.price + ask.price) / 2.0),
            _ => None,
        };

        // 표시용 뒤집기: 순서만 바꾸고 cumulative/notional은 그대로 둔다
        let asks: Vec<DepthRow> = asks.into_iter().rev().collect();

        Self {
            exchange: snapshot.exchange,
            symbol: snapshot.symbol.clone(),
            bids,
            asks,
            mid_price,
            updated_at: snapshot.updated_at,
        }
    }
}
