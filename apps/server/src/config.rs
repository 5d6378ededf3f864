use std::str::FromStr;

use moexmap_market_data::heatmap::DEFAULT_MAX_ABS_PERCENT;

/// Server configuration, read once at startup from `MOEXMAP_*` env vars
/// (a `.env` file is honored via dotenvy).
#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub static_dir: String,
    /// Base URL of the ISS API
    pub iss_base_url: String,
    /// Equity board to render (stock/shares engine)
    pub shares_board: String,
    /// Derivatives board to render (futures/forts engine)
    pub futures_board: String,
    /// Maximum tiles per board
    pub tile_limit: usize,
    /// Intensity normalization bound for tile coloring
    pub max_abs_percent: f64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: var_or("MOEXMAP_LISTEN_ADDR", "0.0.0.0:3000"),
            static_dir: var_or("MOEXMAP_STATIC_DIR", "static"),
            iss_base_url: var_or("MOEXMAP_ISS_BASE_URL", "https://iss.moex.com"),
            shares_board: var_or("MOEXMAP_SHARES_BOARD", "TQBR"),
            futures_board: var_or("MOEXMAP_FUTURES_BOARD", "RFUD"),
            tile_limit: parse_or(std::env::var("MOEXMAP_TILE_LIMIT").ok(), 120),
            max_abs_percent: parse_or(
                std::env::var("MOEXMAP_MAX_ABS_PERCENT").ok(),
                DEFAULT_MAX_ABS_PERCENT,
            ),
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse an env value, falling back to the default when it is unset or
/// not parseable.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
