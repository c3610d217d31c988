use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use depth::DepthLadder;
use exchanges::OrderBookExchange;

use crate::server::AppState;

pub fn start_refresh_loop(
    exchange: Arc<dyn OrderBookExchange>,
    symbol: String,
    depth: usize,
    state: Arc<AppState>,
    interval: Duration,
) {
    tokio::spawn(async move {
        info!(
            "오더북 수집 루프 시작: {} {} ({}단계, {}ms 간격)",
            exchange.id(),
            symbol,
            depth,
            interval.as_millis()
        );
        loop {
            // 틱 하나: 조회 -> 변환 -> 게시. 틱은 겹치지 않고 순차 실행된다
            match exchange.fetch_orderbook(&symbol, depth).await {
                Ok(snapshot) => {
                    let ladder = DepthLadder::from_snapshot(&snapshot);
                    info!(
                        "오더북 갱신: 매수 {}건, 매도 {}건, mid={:?}",
                        ladder.bids.len(),
                        ladder.asks.len(),
                        ladder.mid_price
                    );
                    let mut guard = state.ladder.write().await;
                    *guard = Some(ladder);
                }
                Err(e) => {
                    // 이번 틱은 건너뛰고 마지막으로 게시한 상태를 유지한다
                    warn!("orderbook fetch error from {:?}: {:?}", exchange.id(), e);
                }
            }

            sleep(interval).await;
        }
    });
}
