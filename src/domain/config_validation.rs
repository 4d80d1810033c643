//! Configuration validation for the `[generator]` section.
//!
//! Every key is optional; validation only rejects values that are present
//! and out of range.

use crate::domain::error::FrameError;
use crate::ports::config_port::ConfigPort;
use std::collections::HashMap;

pub const SECTION: &str = "generator";

/// Largest supported `precision`; f64 carries ~15 significant decimal digits.
pub const MAX_PRECISION: i64 = 15;

pub fn validate_generator_config(config: &dyn ConfigPort) -> Result<(), FrameError> {
    validate_change_pct(config)?;
    validate_volatility(config)?;
    validate_volume(config)?;
    validate_precision(config)?;
    validate_default_price(config)?;
    validate_rows(config)?;
    validate_seed(config)?;
    validate_base_prices(config)?;
    Ok(())
}

fn invalid(key: &str, reason: &str) -> FrameError {
    FrameError::ConfigInvalid {
        section: SECTION.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_change_pct(config: &dyn ConfigPort) -> Result<(), FrameError> {
    let value = config.get_double(SECTION, "change_pct", 0.02);
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(invalid("change_pct", "change_pct must be between 0 and 1"));
    }
    Ok(())
}

fn validate_volatility(config: &dyn ConfigPort) -> Result<(), FrameError> {
    let min = config.get_double(SECTION, "volatility_min", 1.2);
    let max = config.get_double(SECTION, "volatility_max", 2.0);
    if !min.is_finite() || min <= 0.0 {
        return Err(invalid("volatility_min", "volatility_min must be positive"));
    }
    if !max.is_finite() || max < min {
        return Err(invalid(
            "volatility_max",
            "volatility_max must be finite and not less than volatility_min",
        ));
    }
    Ok(())
}

fn validate_volume(config: &dyn ConfigPort) -> Result<(), FrameError> {
    let min = config.get_int(SECTION, "volume_min", 1000);
    let max = config.get_int(SECTION, "volume_max", 10_000);
    if min < 0 {
        return Err(invalid("volume_min", "volume_min must be non-negative"));
    }
    if max < min {
        return Err(invalid(
            "volume_max",
            "volume_max must not be less than volume_min",
        ));
    }
    Ok(())
}

fn validate_precision(config: &dyn ConfigPort) -> Result<(), FrameError> {
    let value = config.get_int(SECTION, "precision", 5);
    if !(0..=MAX_PRECISION).contains(&value) {
        return Err(invalid("precision", "precision must be between 0 and 15"));
    }
    Ok(())
}

fn validate_default_price(config: &dyn ConfigPort) -> Result<(), FrameError> {
    let value = config.get_double(SECTION, "default_price", 1.0);
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid("default_price", "default_price must be positive"));
    }
    Ok(())
}

fn validate_rows(config: &dyn ConfigPort) -> Result<(), FrameError> {
    if config.get_int(SECTION, "rows", 200) < 0 {
        return Err(invalid("rows", "rows must be non-negative"));
    }
    Ok(())
}

fn validate_seed(config: &dyn ConfigPort) -> Result<(), FrameError> {
    if let Some(raw) = config.get_string(SECTION, "seed") {
        if raw.trim().parse::<u64>().is_err() {
            return Err(invalid("seed", "seed must be a non-negative integer"));
        }
    }
    Ok(())
}

fn validate_base_prices(config: &dyn ConfigPort) -> Result<(), FrameError> {
    if let Some(raw) = config.get_string(SECTION, "base_prices") {
        parse_base_prices(&raw)?;
    }
    Ok(())
}

/// Parses `SYMBOL:price` pairs separated by commas. Symbols are upper-cased;
/// a later entry for the same symbol wins. Blank input is an empty map.
pub fn parse_base_prices(input: &str) -> Result<HashMap<String, f64>, FrameError> {
    let mut prices = HashMap::new();
    if input.trim().is_empty() {
        return Ok(prices);
    }

    for token in input.split(',') {
        let entry = token.trim();
        let bad = |reason: &str| FrameError::InvalidPriceList {
            entry: entry.to_string(),
            reason: reason.to_string(),
        };

        let (symbol, price) = entry
            .split_once(':')
            .ok_or_else(|| bad("expected SYMBOL:price"))?;
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(bad("empty symbol"));
        }
        let price: f64 = price.trim().parse().map_err(|_| bad("price is not a number"))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(bad("price must be positive"));
        }
        prices.insert(symbol.to_uppercase(), price);
    }

    Ok(prices)
}
