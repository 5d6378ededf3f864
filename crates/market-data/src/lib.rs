//! Moexmap Market Data Crate
//!
//! This crate fetches live quote data from the MOEX ISS API and turns it
//! into color-coded heatmap tiles.
//!
//! # Overview
//!
//! For a given trading board the ISS endpoint exposes two tables behind one
//! path: `securities` (the instrument reference: ticker, short name, prior
//! prices) and `marketdata` (last price and today's turnover). The pipeline
//! fetches both tables concurrently, joins them on SECID, derives the
//! percentage change against the prior price, drops incomplete records,
//! ranks by turnover, and paints each surviving quote into an HSL tile.
//!
//! # Architecture
//!
//! ```text
//! +-----------+     +------------+     +----------------+
//! | IssClient | --> | reconcile  | --> | HeatmapPainter |
//! +-----------+     +------------+     +----------------+
//!   2 tables,         join + rank          HSL tiles
//!   fetched jointly
//! ```
//!
//! # Core Types
//!
//! - [`BoardSpec`] - Engine/market/board triple identifying a trading board
//! - [`IssTable`] - Raw columns-plus-rows payload as returned by ISS
//! - [`SecurityQuote`] - Reconciled per-instrument quote record
//! - [`HeatmapTile`] - Colorized display projection of a quote

pub mod client;
pub mod errors;
pub mod heatmap;
pub mod models;
pub mod reconcile;

pub use client::{IssClient, TableKind};
pub use errors::IssError;
pub use heatmap::HeatmapPainter;
pub use models::{BoardSpec, HeatmapTile, IssTable, SecurityQuote};
pub use reconcile::reconcile;
