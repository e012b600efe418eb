//! Display formatting for currency figures (en-IN, whole rupees).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Round to whole currency units, half away from zero.
pub fn round_currency(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `₹12,34,567`.
pub fn format_inr(amount: Money) -> String {
    let rounded = round_currency(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!(
        "{sign}{CURRENCY_SYMBOL}{}",
        group_indian(&rounded.abs().trunc().to_string())
    )
}

/// Insert separators using Indian grouping: the last three digits, then pairs.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
