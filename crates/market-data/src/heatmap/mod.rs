//! Tile coloring.
//!
//! Percentage change maps to an HSL color: hue picks the direction
//! (green for gains, red for losses), lightness encodes intensity. The
//! intensity runs through `tanh` so extreme outliers saturate softly
//! instead of dominating the visual scale linearly.

use num_traits::ToPrimitive;

use crate::models::{HeatmapTile, SecurityQuote};

/// Default normalization bound: |pct| at this value reads as full intensity.
pub const DEFAULT_MAX_ABS_PERCENT: f64 = 5.0;

const SATURATION: i32 = 60;

/// Maps quotes to color-coded heatmap tiles.
#[derive(Clone, Copy, Debug)]
pub struct HeatmapPainter {
    max_abs_percent: f64,
}

impl HeatmapPainter {
    /// A bound that is not finite and positive would make the clamp in
    /// [`intensity`](Self::intensity) panic, so such values fall back to
    /// [`DEFAULT_MAX_ABS_PERCENT`].
    pub fn new(max_abs_percent: f64) -> Self {
        let max_abs_percent = if max_abs_percent.is_finite() && max_abs_percent > 0.0 {
            max_abs_percent
        } else {
            DEFAULT_MAX_ABS_PERCENT
        };
        Self { max_abs_percent }
    }

    /// Soft-saturating intensity in `[0, 1)`.
    pub fn intensity(&self, pct: f64) -> f64 {
        let x = pct.clamp(-self.max_abs_percent, self.max_abs_percent);
        (x / self.max_abs_percent).tanh().abs()
    }

    /// HSL color for a percentage change.
    ///
    /// Hue 120 (green) for gains, 0 (red) for losses; the deeper the
    /// intensity, the darker the tile (lightness 80% down to 30%).
    pub fn color_for(&self, pct: f64) -> String {
        let intensity = self.intensity(pct);
        let hue = if pct >= 0.0 { 120 } else { 0 };
        let lightness = 80 - (50.0 * intensity).round() as i32;
        format!("hsl({hue}, {SATURATION}%, {lightness}%)")
    }

    /// Project the first `limit` quotes into tiles, preserving order.
    ///
    /// A quote with no derived change colors as 0.0 but the tile still
    /// carries the raw (absent) value.
    pub fn tiles(&self, quotes: &[SecurityQuote], limit: usize) -> Vec<HeatmapTile> {
        quotes
            .iter()
            .take(limit)
            .map(|q| {
                let pct = q.pct_change.and_then(|p| p.to_f64()).unwrap_or(0.0);
                HeatmapTile {
                    secid: q.secid.clone(),
                    shortname: q.shortname.clone(),
                    last: q.last,
                    pct_change: q.pct_change,
                    value: q.value,
                    volume: q.volume,
                    color: self.color_for(pct),
                }
            })
            .collect()
    }
}

impl Default for HeatmapPainter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ABS_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BoardSpec;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn quote(secid: &str, pct: Option<Decimal>) -> SecurityQuote {
        let spec = BoardSpec::shares("TQBR");
        SecurityQuote {
            secid: secid.to_string(),
            shortname: secid.to_string(),
            last: Some(dec!(100)),
            prev_price: Some(dec!(100)),
            pct_change: pct,
            board: spec.board,
            engine: spec.engine,
            market: spec.market,
            value: None,
            volume: None,
        }
    }

    #[test]
    fn zero_change_is_near_white_green() {
        let painter = HeatmapPainter::default();
        assert_eq!(painter.intensity(0.0), 0.0);
        assert_eq!(painter.color_for(0.0), "hsl(120, 60%, 80%)");
    }

    #[test]
    fn color_is_symmetric_up_to_hue() {
        let painter = HeatmapPainter::default();
        for pct in [0.5, 1.7, 3.0, 4.9, 12.0] {
            let up = painter.color_for(pct);
            let down = painter.color_for(-pct);
            assert!(up.starts_with("hsl(120, "));
            assert!(down.starts_with("hsl(0, "));
            // Same saturation and lightness
            assert_eq!(
                up.trim_start_matches("hsl(120, "),
                down.trim_start_matches("hsl(0, ")
            );
        }
    }

    #[test]
    fn intensity_saturates_past_the_bound() {
        let painter = HeatmapPainter::default();
        let at_bound = painter.intensity(5.0);
        let past_bound = painter.intensity(10.0);
        assert!((at_bound - past_bound).abs() < 1e-9);
        assert!(at_bound < 1.0);
        // tanh(1)
        assert!((at_bound - 0.761594).abs() < 1e-5);
    }

    #[test]
    fn lightness_darkens_with_intensity() {
        let painter = HeatmapPainter::default();
        // tanh(1) ~ 0.7616 -> round(50 * 0.7616) = 38 -> 42%
        assert_eq!(painter.color_for(5.0), "hsl(120, 60%, 42%)");
        assert_eq!(painter.color_for(-5.0), "hsl(0, 60%, 42%)");
    }

    #[test]
    fn degenerate_bounds_fall_back_to_the_default() {
        // Negative, zero and NaN bounds must not poison the clamp; they
        // behave exactly like the default painter.
        let reference = HeatmapPainter::default();
        for bad in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
            let painter = HeatmapPainter::new(bad);
            assert_eq!(painter.color_for(1.0), reference.color_for(1.0));
            assert_eq!(painter.color_for(-12.0), reference.color_for(-12.0));
            assert_eq!(painter.intensity(0.0), 0.0);
        }
    }

    #[test]
    fn tiles_truncate_and_preserve_order() {
        let painter = HeatmapPainter::default();
        let quotes = vec![
            quote("A", Some(dec!(1))),
            quote("B", Some(dec!(-2))),
            quote("C", Some(dec!(3))),
        ];

        let tiles = painter.tiles(&quotes, 2);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].secid, "A");
        assert_eq!(tiles[1].secid, "B");

        let tiles = painter.tiles(&quotes, 10);
        assert_eq!(tiles.len(), 3);
    }

    #[test]
    fn missing_change_colors_as_zero_but_stays_absent() {
        let painter = HeatmapPainter::default();
        let tiles = painter.tiles(&[quote("A", None)], 10);
        assert_eq!(tiles[0].pct_change, None);
        assert_eq!(tiles[0].color, "hsl(120, 60%, 80%)");
    }

    #[test]
    fn full_pipeline_from_tables_to_tiles() {
        use crate::models::IssTable;
        use crate::reconcile::reconcile;

        let securities: IssTable = serde_json::from_value(serde_json::json!({
            "columns": ["SECID", "SHORTNAME", "PREVPRICE"],
            "data": [["A", "Alpha", 100.0], ["B", "Beta", 50.0]]
        }))
        .unwrap();
        let marketdata: IssTable = serde_json::from_value(serde_json::json!({
            "columns": ["SECID", "LAST", "VALTODAY"],
            "data": [["A", 110.0, 1000.0], ["B", 45.0, 2000.0]]
        }))
        .unwrap();

        let quotes = reconcile(&BoardSpec::shares("TQBR"), &securities, &marketdata).unwrap();
        let tiles = HeatmapPainter::default().tiles(&quotes, 120);

        // B leads on turnover and is red; A is green. Both changes sit past
        // the ±5 bound, so both clamp to the same lightness.
        assert_eq!(tiles[0].secid, "B");
        assert_eq!(tiles[0].color, "hsl(0, 60%, 42%)");
        assert_eq!(tiles[1].secid, "A");
        assert_eq!(tiles[1].color, "hsl(120, 60%, 42%)");
    }

    #[test]
    fn tile_carries_the_raw_unclamped_change() {
        let painter = HeatmapPainter::default();
        let tiles = painter.tiles(&[quote("A", Some(dec!(42.5)))], 10);
        assert_eq!(tiles[0].pct_change, Some(dec!(42.5)));
    }
}
