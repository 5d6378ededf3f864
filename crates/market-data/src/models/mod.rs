//! Market data models
//!
//! - `table` - Raw ISS tabular payload (`IssTable`) and cell accessors
//! - `board` - Trading board identity (`BoardSpec`)
//! - `quote` - Reconciled quote record (`SecurityQuote`)
//! - `tile` - Colorized display projection (`HeatmapTile`)

mod board;
mod quote;
mod table;
mod tile;

pub use board::BoardSpec;
pub use quote::SecurityQuote;
pub use table::{cell_decimal, cell_text, IssTable};
pub use tile::HeatmapTile;
