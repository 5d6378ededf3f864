//! Reconciliation of the two board tables into ranked quotes.
//!
//! This is a one-shot in-memory join: an immutable lookup is built from
//! the reference table first, then the live rows stream through it. The
//! only fatal condition is a missing SECID column; every per-row anomaly
//! (nulls, short rows, unmatched tickers) nulls out a field or drops the
//! record.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::client::TableKind;
use crate::errors::IssError;
use crate::models::{cell_decimal, cell_text, BoardSpec, IssTable, SecurityQuote};

const SECID: &str = "SECID";

/// Reference-table fields carried into the join.
struct RefEntry {
    shortname: String,
    prev_price: Option<Decimal>,
}

/// Join the reference and live tables on SECID, derive the percentage
/// change, drop incomplete records and rank the rest.
///
/// Ranking is non-increasing by a per-record key: today's turnover value
/// when ISS reports one, otherwise the absolute percentage change. The
/// fallback applies per record, so two quotes under comparison may each
/// use a different rule. The sort is stable, so ties keep live-table
/// order. The full ranked sequence is returned; truncation belongs to
/// the tile stage.
pub fn reconcile(
    spec: &BoardSpec,
    securities: &IssTable,
    marketdata: &IssTable,
) -> Result<Vec<SecurityQuote>, IssError> {
    let sec_secid = securities.column(SECID).ok_or(IssError::Schema {
        table: TableKind::Securities,
        column: SECID,
    })?;
    let md_secid = marketdata.column(SECID).ok_or(IssError::Schema {
        table: TableKind::MarketData,
        column: SECID,
    })?;

    let idx_shortname = securities.column("SHORTNAME");
    let idx_prev = securities.column("PREVPRICE");
    let idx_prev_settle = securities.column("PREVSETTLEPRICE");

    let mut reference: HashMap<String, RefEntry> =
        HashMap::with_capacity(securities.data.len());
    for row in &securities.data {
        let Some(secid) = cell_text(row, Some(sec_secid)) else {
            continue;
        };
        // Shares report PREVPRICE, futures usually PREVSETTLEPRICE
        let prev_price =
            cell_decimal(row, idx_prev).or_else(|| cell_decimal(row, idx_prev_settle));
        let shortname = cell_text(row, idx_shortname).unwrap_or_else(|| secid.clone());
        reference.insert(secid, RefEntry {
            shortname,
            prev_price,
        });
    }

    let idx_last = marketdata.column("LAST");
    let idx_value = marketdata.column("VALTODAY");
    let idx_volume = marketdata.column("VOLTODAY");

    let mut quotes: Vec<SecurityQuote> = Vec::with_capacity(marketdata.data.len());
    for row in &marketdata.data {
        let Some(secid) = cell_text(row, Some(md_secid)) else {
            continue;
        };
        let last = cell_decimal(row, idx_last);
        let value = cell_decimal(row, idx_value);
        let volume = cell_decimal(row, idx_volume);

        let (shortname, prev_price) = match reference.get(&secid) {
            Some(entry) => (entry.shortname.clone(), entry.prev_price),
            None => (secid.clone(), None),
        };

        let pct_change = match (last, prev_price) {
            (Some(last), Some(prev)) => change_percent(last, prev),
            _ => None,
        };

        quotes.push(SecurityQuote {
            secid,
            shortname,
            last,
            prev_price,
            pct_change,
            board: spec.board.clone(),
            engine: spec.engine.clone(),
            market: spec.market.clone(),
            value,
            volume,
        });
    }

    // Keep only quotes with both a last price and a derived change, then
    // rank by a key computed once per record.
    let mut ranked: Vec<(Decimal, SecurityQuote)> = quotes
        .into_iter()
        .filter(|q| q.last.is_some() && q.pct_change.is_some())
        .map(|q| (rank_key(&q), q))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(ranked.into_iter().map(|(_, q)| q).collect())
}

/// `(last − prev) / prev × 100`, with every arithmetic fault (division by
/// zero included) collapsing to `None`.
fn change_percent(last: Decimal, prev: Decimal) -> Option<Decimal> {
    last.checked_sub(prev)?
        .checked_div(prev)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Ranking key: turnover value when present, else |pct_change|.
fn rank_key(quote: &SecurityQuote) -> Decimal {
    quote
        .value
        .unwrap_or_else(|| quote.pct_change.map(|p| p.abs()).unwrap_or_default())
}
