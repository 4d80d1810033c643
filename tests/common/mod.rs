#![allow(dead_code)]

use barframe::domain::error::FrameError;
use barframe::domain::generator::{self, GeneratorConfig};
pub use barframe::domain::table::Table;
use barframe::ports::data_port::DataPort;
use std::collections::HashMap;
use std::io::Write;

/// Data port serving fixed tables, for exercising consumers without the
/// generator.
pub struct MockDataPort {
    pub tables: HashMap<String, Table>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn with_table(mut self, symbol: &str, table: Table) -> Self {
        self.tables.insert(symbol.to_uppercase(), table);
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_table(
        &self,
        symbol: &str,
        _timeframe: &str,
        limit: usize,
    ) -> Result<Table, FrameError> {
        Ok(self
            .tables
            .get(&symbol.to_uppercase())
            .map(|t| t.tail(limit))
            .unwrap_or_default())
    }
}

/// Five-column OHLCV table with a steady upward drift.
pub fn make_ohlcv(rows: usize, start_price: f64) -> Table {
    let open: Vec<f64> = (0..rows).map(|i| start_price + i as f64).collect();
    let close: Vec<f64> = open.iter().map(|o| o + 0.5).collect();
    let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
    let low: Vec<f64> = open.iter().map(|o| o - 1.0).collect();
    let volume: Vec<f64> = (0..rows).map(|i| 1000.0 + i as f64).collect();
    Table::from_columns([
        ("open", open),
        ("high", high),
        ("low", low),
        ("close", close),
        ("volume", volume),
    ])
}

pub fn seeded(symbol: &str, rows: usize, seed: u64) -> Table {
    generator::generate_seeded(symbol, "1h", rows, &GeneratorConfig::default(), seed)
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
