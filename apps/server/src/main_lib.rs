use std::sync::Arc;

use moexmap_market_data::{BoardSpec, HeatmapPainter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Shared, immutable per-process state. Transport sessions are not held
/// here; each page render constructs its own client.
pub struct AppState {
    pub iss_base_url: String,
    pub shares: BoardSpec,
    pub futures: BoardSpec,
    pub painter: HeatmapPainter,
    pub tile_limit: usize,
}

pub fn init_tracing() {
    let log_format = std::env::var("MOEXMAP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    Arc::new(AppState {
        iss_base_url: config.iss_base_url.clone(),
        shares: BoardSpec::shares(&config.shares_board),
        futures: BoardSpec::futures(&config.futures_board),
        painter: HeatmapPainter::new(config.max_abs_percent),
        tile_limit: config.tile_limit,
    })
}
