use interface::{PriceLevel, Side};

use crate::error::DepthError;
use crate::row::DepthRow;

/// 원시 호가 목록을 표시용 DepthRow 목록으로 변환
///
/// 입력은 거래소 응답 순서 그대로 (best-price-first: bids 내림차순, asks
/// 오름차순). 출력도 같은 순서이며, cumulative는 notional의 prefix sum이다.
/// 빈 입력은 빈 출력 (이번 틱에 데이터 없음).
pub fn transform_side(levels: &[PriceLevel], side: Side) -> Result<Vec<DepthRow>, DepthError> {
    let mut rows = Vec::with_capacity(levels.len());
    let mut cumulative = 0.0;
    let mut prev_price: Option<f64> = None;

    for (index, level) in levels.iter().enumerate() {
        // 가격은 유한한 양수, 수량은 유한한 0 이상이어야 한다.
        // 파싱 단계에서 NaN으로 넘어온 값도 여기서 걸러진다.
        if !level.price.is_finite()
            || level.price <= 0.0
            || !level.quantity.is_finite()
            || level.quantity < 0.0
        {
            return Err(DepthError::MalformedLevel {
                side,
                index,
                price: level.price,
                quantity: level.quantity,
            });
        }

        // 가격 단조성 검증. 같은 가격이 두 번 나오는 것도 위반이다
        // (오더북은 가격별로 이미 합산되어 있다).
        if let Some(prev) = prev_price {
            let ordered = match side {
                Side::Buy => level.price < prev,
                Side::Sell => level.price > prev,
            };
            if !ordered {
                return Err(DepthError::UnorderedSide {
                    side,
                    index,
                    prev,
                    next: level.price,
                });
            }
        }
        prev_price = Some(level.price);

        let notional = level.price * level.quantity;
        cumulative += notional;
        rows.push(DepthRow {
            price: level.price,
            quantity: level.quantity,
            notional,
            cumulative,
        });
    }

    Ok(rows)
}
