//! barframe — a small column-oriented table with rolling aggregates, and a
//! synthetic OHLCV generator to feed it.
//!
//! Hexagonal layout: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], command-line front end in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
