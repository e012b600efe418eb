//! Phone-number validity policy.
//!
//! A trait seam so the check can be backed by a phone-input widget's own
//! validity test; the built-in policy is an E.164-shaped pattern with a
//! minimum digit count.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::FormConfig;

/// Optional `+`, first digit 1–9, at most 15 digits.
static E164_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("valid E.164 pattern"));

pub trait PhoneValidator {
    /// `number` has already had all whitespace removed.
    fn is_valid(&self, number: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct E164Pattern {
    pub min_digits: usize,
}

impl E164Pattern {
    pub fn new(min_digits: usize) -> Self {
        Self { min_digits }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.phone_min_digits)
    }
}

impl Default for E164Pattern {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl PhoneValidator for E164Pattern {
    fn is_valid(&self, number: &str) -> bool {
        if !E164_SHAPE.is_match(number) {
            return false;
        }
        let digits = number.bytes().filter(u8::is_ascii_digit).count();
        digits >= self.min_digits
    }
}

/// Remove every whitespace character, as typed numbers often contain spaces.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
