use rust_decimal::Decimal;
use serde::Serialize;

/// Display projection of a [`SecurityQuote`](super::SecurityQuote): the
/// fields the frontend lays out, plus a ready-to-use HSL color.
///
/// `pct_change` carries the raw reconciled value; clamping is an internal
/// step of the color derivation only.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapTile {
    pub secid: String,
    pub shortname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_change: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
    /// Tile color in `hsl(H, S%, L%)` form
    pub color: String,
}
