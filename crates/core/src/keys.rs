//! Key construction and validation for animal records.
//!
//! Seeded records live under `ANIMAL{i}` keys. The full-scan window is the
//! half-open range `[ANIMAL0, ANIMAL99)`; keys compare lexicographically,
//! so every seeded key falls inside it.

use crate::error::{LedgerError, LedgerResult};

/// Prefix shared by all seeded animal keys.
pub const ANIMAL_KEY_PREFIX: &str = "ANIMAL";

/// First key of the full-scan window (inclusive).
pub const SCAN_START_KEY: &str = "ANIMAL0";

/// End key of the full-scan window (exclusive).
pub const SCAN_END_KEY: &str = "ANIMAL99";

/// Build the key for the i-th seeded record.
pub fn seed_key(index: usize) -> String {
    format!("{ANIMAL_KEY_PREFIX}{index}")
}

/// Validate a caller-supplied record key.
pub fn validate_key(key: &str) -> LedgerResult<()> {
    if key.is_empty() {
        return Err(LedgerError::invalid_input("record key must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_keys_carry_the_prefix() {
        assert_eq!(seed_key(0), "ANIMAL0");
        assert_eq!(seed_key(2), "ANIMAL2");
    }

    #[test]
    fn seed_keys_fall_inside_the_scan_window() {
        for i in 0..3 {
            let key = seed_key(i);
            assert!(SCAN_START_KEY <= key.as_str() && key.as_str() < SCAN_END_KEY);
        }
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(validate_key("").is_err());
        assert!(validate_key("ANIMAL0").is_ok());
    }
}
