//! Synthetic OHLCV series.
//!
//! Prices follow a geometric random walk starting from a per-symbol reference
//! price: each bar moves the close by a uniform percentage of the previous
//! close, and the wicks extend past the body by a random multiple of that
//! move. The walk does not revert to the reference price.

use crate::domain::ohlcv::{CLOSE, HIGH, LOW, OPEN, VOLUME};
use crate::domain::table::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::debug;

/// Reference prices for known instruments. Lookups are case-insensitive.
pub const BASE_PRICES: [(&str, f64); 7] = [
    ("EURUSD", 1.1000),
    ("GBPUSD", 1.2500),
    ("USDJPY", 110.00),
    ("AUDUSD", 0.7500),
    ("USDCAD", 1.2500),
    ("NZDUSD", 0.7000),
    ("USDCHF", 0.9200),
];

/// Reference price for symbols not in [`BASE_PRICES`].
pub const DEFAULT_BASE_PRICE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Largest per-bar move as a fraction of the current price.
    pub change_pct: f64,
    pub volatility_min: f64,
    pub volatility_max: f64,
    pub volume_min: i64,
    pub volume_max: i64,
    /// Decimal places kept on open/high/low/close.
    pub precision: u32,
    pub default_price: f64,
    /// Extra or replacement reference prices, keyed by upper-case symbol.
    pub base_prices: HashMap<String, f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            change_pct: 0.02,
            volatility_min: 1.2,
            volatility_max: 2.0,
            volume_min: 1000,
            volume_max: 10_000,
            precision: 5,
            default_price: DEFAULT_BASE_PRICE,
            base_prices: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Reference price for `symbol`: configured override, then the built-in
    /// table, then `default_price`.
    pub fn base_price(&self, symbol: &str) -> f64 {
        let symbol = symbol.to_uppercase();
        if let Some(&price) = self.base_prices.get(&symbol) {
            return price;
        }
        BASE_PRICES
            .iter()
            .find(|(code, _)| *code == symbol)
            .map(|(_, price)| *price)
            .unwrap_or(self.default_price)
    }
}

/// Reference price from the built-in table, `1.0` for unknown symbols.
pub fn base_price(symbol: &str) -> f64 {
    GeneratorConfig::default().base_price(symbol)
}

/// `row_count` bars for `symbol` with default settings and a thread-local RNG.
///
/// `timeframe` does not affect the values.
pub fn generate(symbol: &str, timeframe: &str, row_count: usize) -> Table {
    generate_with(
        symbol,
        timeframe,
        row_count,
        &GeneratorConfig::default(),
        &mut rand::thread_rng(),
    )
}

/// Reproducible variant of [`generate_with`].
pub fn generate_seeded(
    symbol: &str,
    timeframe: &str,
    row_count: usize,
    config: &GeneratorConfig,
    seed: u64,
) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with(symbol, timeframe, row_count, config, &mut rng)
}

pub fn generate_with<R: Rng + ?Sized>(
    symbol: &str,
    timeframe: &str,
    row_count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Table {
    let base = match config.base_price(symbol) {
        price if price.is_finite() => price,
        _ => DEFAULT_BASE_PRICE,
    };
    debug!(symbol, timeframe, row_count, base, "generating synthetic series");

    let mut open = Vec::with_capacity(row_count);
    let mut high = Vec::with_capacity(row_count);
    let mut low = Vec::with_capacity(row_count);
    let mut close = Vec::with_capacity(row_count);
    let mut volume = Vec::with_capacity(row_count);

    let (volume_lo, volume_hi) = ordered(config.volume_min, config.volume_max);
    let mut current = base;
    for _ in 0..row_count {
        let change_pct = uniform(rng, -config.change_pct, config.change_pct, DEFAULT_CHANGE);
        let change = current * change_pct;

        let bar_open = current;
        let bar_close = current + change;

        let volatility = change.abs()
            * uniform(
                rng,
                config.volatility_min,
                config.volatility_max,
                DEFAULT_VOLATILITY,
            );
        let bar_high = bar_open.max(bar_close) + volatility;
        let bar_low = bar_open.min(bar_close) - volatility;

        open.push(round_to(bar_open, config.precision));
        high.push(round_to(bar_high, config.precision));
        low.push(round_to(bar_low, config.precision));
        close.push(round_to(bar_close, config.precision));
        volume.push(rng.gen_range(volume_lo..=volume_hi) as f64);

        current = bar_close;
    }

    Table::from_columns([
        (OPEN, open),
        (HIGH, high),
        (LOW, low),
        (CLOSE, close),
        (VOLUME, volume),
    ])
}

const DEFAULT_CHANGE: (f64, f64) = (-0.02, 0.02);
const DEFAULT_VOLATILITY: (f64, f64) = (1.2, 2.0);

/// Uniform draw from the closed interval spanned by `a` and `b`, in either
/// order. Draws from `fallback` instead when the interval or its width is
/// not finite.
fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64, fallback: (f64, f64)) -> f64 {
    let (lo, hi) = ordered(a, b);
    if lo.is_finite() && hi.is_finite() && (hi - lo).is_finite() {
        rng.gen_range(lo..=hi)
    } else {
        rng.gen_range(fallback.0..=fallback.1)
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
