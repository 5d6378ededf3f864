//! Error types for the moexmap market data crate.

use reqwest::StatusCode;
use thiserror::Error;

use crate::client::TableKind;

/// Errors that can occur while fetching or reconciling board data.
///
/// Transport and HTTP-status failures are fatal to the board render that
/// triggered them; [`Schema`](Self::Schema) signals an incompatible change
/// in the upstream contract. Per-row anomalies (null prices, unmatched
/// identifiers, division faults) are never errors — they resolve to null
/// fields or record exclusion during reconciliation.
#[derive(Error, Debug)]
pub enum IssError {
    /// The HTTP request for one of the two tables failed outright.
    #[error("{table} request failed for board {board}: {source}")]
    Fetch {
        /// Which of the two tables was being fetched
        table: TableKind,
        /// The board the fetch was issued for
        board: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// ISS answered with a non-success HTTP status.
    #[error("{table} request for board {board} returned HTTP {status}")]
    Status {
        /// Which of the two tables was being fetched
        table: TableKind,
        /// The board the fetch was issued for
        board: String,
        /// The status ISS returned
        status: StatusCode,
    },

    /// A required column is missing from a table payload entirely.
    #[error("{table} table is missing required column {column}")]
    Schema {
        /// The table whose payload is malformed
        table: TableKind,
        /// The column that could not be found
        column: &'static str,
    },
}
