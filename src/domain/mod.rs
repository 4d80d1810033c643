//! Core domain types and logic.

pub mod stats;
pub mod window;
pub mod column;
pub mod table;
pub mod ohlcv;
pub mod generator;
pub mod config_validation;
pub mod error;
