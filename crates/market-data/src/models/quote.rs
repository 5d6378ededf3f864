use rust_decimal::Decimal;
use serde::Serialize;

/// Unified per-instrument quote record for the heatmap.
///
/// Built fresh on every fetch cycle by reconciling the `securities` and
/// `marketdata` tables; never mutated afterwards, never persisted.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityQuote {
    /// Ticker, e.g. SBER or SiZ5
    pub secid: String,
    /// Short display name; falls back to the ticker when the reference
    /// table has no entry for it
    pub shortname: String,
    /// Last traded price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Decimal>,
    /// Prior close (PREVPRICE) or prior settlement (PREVSETTLEPRICE)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_price: Option<Decimal>,
    /// Change vs the prior price, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_change: Option<Decimal>,
    /// Board code the quote came from
    pub board: String,
    /// Trading engine
    pub engine: String,
    /// Market within the engine
    pub market: String,
    /// Today's turnover value (VALTODAY), when ISS reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    /// Today's turnover volume (VOLTODAY), when ISS reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}
