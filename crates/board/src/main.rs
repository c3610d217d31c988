use std::{sync::Arc, time::Duration};

use color_eyre::eyre;
use structopt::StructOpt;
use tracing_subscriber::{fmt, EnvFilter};

use board::server::AppState;
use exchanges::{BinanceClient, BithumbClient, OkxClient, OrderBookExchange};
use interface::ExchangeId;

#[derive(Debug, StructOpt)]
#[structopt(name = "board", about = "실시간 오더북 보드 서버")]
struct Options {
    /// 조회할 거래쌍 (예: "BTC-USDT")
    #[structopt(long, default_value = "BTC-USDT")]
    symbol: String,

    /// 소스 거래소 (binance, bithumb, okx)
    #[structopt(long, default_value = "binance")]
    exchange: ExchangeId,

    /// 사이드별 호가 단계 수
    #[structopt(long, default_value = "15")]
    depth: usize,

    /// 새로고침 주기 (밀리초)
    #[structopt(long = "interval-ms", default_value = "1500")]
    interval_ms: u64,

    /// HTTP 포트
    #[structopt(long, default_value = "12090")]
    port: u16,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();

    // init error reporting
    color_eyre::install()?;

    // init logging
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let options = Options::from_args();

    let state = Arc::new(AppState::new());

    // set up exchange client
    let exchange: Arc<dyn OrderBookExchange> = match options.exchange {
        ExchangeId::Binance => Arc::new(BinanceClient::new()),
        ExchangeId::Bithumb => Arc::new(BithumbClient::new()),
        ExchangeId::Okx => Arc::new(OkxClient::new()),
    };

    // start background refresh loop
    board::collector::start_refresh_loop(
        exchange,
        options.symbol,
        options.depth,
        state.clone(),
        Duration::from_millis(options.interval_ms),
    );

    // start HTTP server
    board::server::serve(state, options.port).await?;

    Ok(())
}
