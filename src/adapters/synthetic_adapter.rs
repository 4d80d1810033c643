//! Data port backed by the synthetic series generator.

use crate::domain::error::FrameError;
use crate::domain::generator::{self, GeneratorConfig};
use crate::domain::table::Table;
use crate::ports::data_port::DataPort;

/// Serves generated OHLCV tables in place of a real price feed.
///
/// With a seed, every fetch of the same symbol and limit returns the same
/// table.
#[derive(Debug, Clone, Default)]
pub struct SyntheticAdapter {
    config: GeneratorConfig,
    seed: Option<u64>,
}

impl SyntheticAdapter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl DataPort for SyntheticAdapter {
    fn fetch_table(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Table, FrameError> {
        let table = match self.seed {
            Some(seed) => generator::generate_seeded(symbol, timeframe, limit, &self.config, seed),
            None => generator::generate_with(
                symbol,
                timeframe,
                limit,
                &self.config,
                &mut rand::thread_rng(),
            ),
        };
        Ok(table)
    }
}
