//! Configuration access port.
//!
//! Typed getters fall back to the given default when a key is absent or does
//! not parse.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;

    /// Unsigned value, or `None` when absent or not a non-negative integer.
    fn get_u64(&self, section: &str, key: &str) -> Option<u64> {
        self.get_string(section, key)
            .and_then(|v| v.trim().parse().ok())
    }
}
