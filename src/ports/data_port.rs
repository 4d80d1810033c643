//! Price data source port.

use crate::domain::error::FrameError;
use crate::domain::table::Table;

pub trait DataPort {
    /// Up to `limit` OHLCV rows for `symbol` at `timeframe`, oldest first.
    fn fetch_table(&self, symbol: &str, timeframe: &str, limit: usize)
    -> Result<Table, FrameError>;
}
