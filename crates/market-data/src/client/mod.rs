//! ISS API client.
//!
//! ISS exposes both tables behind a single board endpoint:
//! `iss/engines/{engine}/markets/{market}/boards/{board}/securities.json`.
//! The `iss.only` query parameter selects which table comes back, and
//! `<table>.columns` restricts the payload to the columns we need.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::errors::IssError;
use crate::models::{BoardSpec, IssTable, SecurityQuote};
use crate::reconcile::reconcile;

const DEFAULT_BASE_URL: &str = "https://iss.moex.com";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Columns requested from the reference table.
const SECURITIES_COLUMNS: &str = "SECID,SHORTNAME,PREVPRICE,PREVSETTLEPRICE";

/// Columns requested from the live table. VALTODAY/VOLTODAY are not
/// reported on every board.
const MARKETDATA_COLUMNS: &str = "SECID,LAST,VALTODAY,VOLTODAY";

/// Which of the two board tables a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// Instrument reference: ticker, short name, prior prices
    Securities,
    /// Live data: last price and today's turnover
    MarketData,
}

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Securities => "securities",
            TableKind::MarketData => "marketdata",
        }
    }

    fn columns_param(self) -> &'static str {
        match self {
            TableKind::Securities => "securities.columns",
            TableKind::MarketData => "marketdata.columns",
        }
    }

    fn columns(self) -> &'static str {
        match self {
            TableKind::Securities => SECURITIES_COLUMNS,
            TableKind::MarketData => MARKETDATA_COLUMNS,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response envelope for `iss.only=securities`.
#[derive(Debug, Deserialize)]
struct SecuritiesResponse {
    #[serde(default)]
    securities: IssTable,
}

/// Response envelope for `iss.only=marketdata`.
#[derive(Debug, Deserialize)]
struct MarketDataResponse {
    #[serde(default)]
    marketdata: IssTable,
}

/// Client for the MOEX ISS API.
///
/// Holds its own `reqwest::Client`; construct one per page render so the
/// transport session is scoped to the render and released on drop, on
/// success and failure alike.
#[derive(Clone)]
pub struct IssClient {
    client: Client,
    base_url: String,
}

impl IssClient {
    /// Create a client against the public ISS endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn board_url(&self, spec: &BoardSpec) -> String {
        format!(
            "{}/iss/engines/{}/markets/{}/boards/{}/securities.json",
            self.base_url, spec.engine, spec.market, spec.board
        )
    }

    /// Fetch one of the two tables for a board.
    pub async fn fetch_table(
        &self,
        spec: &BoardSpec,
        table: TableKind,
    ) -> Result<IssTable, IssError> {
        let url = self.board_url(spec);
        let query = [
            ("iss.only", table.as_str()),
            (table.columns_param(), table.columns()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| IssError::Fetch {
                table,
                board: spec.board.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(IssError::Status {
                table,
                board: spec.board.clone(),
                status: response.status(),
            });
        }

        match table {
            TableKind::Securities => {
                let body: SecuritiesResponse =
                    response.json().await.map_err(|e| IssError::Fetch {
                        table,
                        board: spec.board.clone(),
                        source: e,
                    })?;
                Ok(body.securities)
            }
            TableKind::MarketData => {
                let body: MarketDataResponse =
                    response.json().await.map_err(|e| IssError::Fetch {
                        table,
                        board: spec.board.clone(),
                        source: e,
                    })?;
                Ok(body.marketdata)
            }
        }
    }

    /// Fetch both tables for a board concurrently and reconcile them into
    /// ranked quotes.
    ///
    /// Reconciliation never starts before both fetches complete; if either
    /// fails, the pair fails and the surviving table is discarded.
    pub async fn get_board_quotes(
        &self,
        spec: &BoardSpec,
    ) -> Result<Vec<SecurityQuote>, IssError> {
        let (securities, marketdata) = tokio::try_join!(
            self.fetch_table(spec, TableKind::Securities),
            self.fetch_table(spec, TableKind::MarketData),
        )?;

        log::debug!(
            "board {}: {} reference rows, {} live rows",
            spec.board,
            securities.data.len(),
            marketdata.data.len()
        );

        reconcile(spec, &securities, &marketdata)
    }
}

impl Default for IssClient {
    fn default() -> Self {
        Self::new()
    }
}
