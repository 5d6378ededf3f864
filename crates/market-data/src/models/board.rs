/// Identity of a trading board on ISS: an engine/market/board triple.
///
/// ISS is the authority on which triples are valid; no client-side
/// validation is performed beyond the strings being non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSpec {
    /// Trading engine, e.g. "stock" or "futures"
    pub engine: String,
    /// Market within the engine, e.g. "shares" or "forts"
    pub market: String,
    /// Board code, e.g. "TQBR" or "RFUD"
    pub board: String,
}

impl BoardSpec {
    pub fn new(engine: &str, market: &str, board: &str) -> Self {
        Self {
            engine: engine.to_string(),
            market: market.to_string(),
            board: board.to_string(),
        }
    }

    /// Equity board on the stock/shares market (main T+ board is TQBR).
    pub fn shares(board: &str) -> Self {
        Self::new("stock", "shares", board)
    }

    /// Derivatives board on the futures/forts market (main board is RFUD).
    pub fn futures(board: &str) -> Self {
        Self::new("futures", "forts", board)
    }
}
