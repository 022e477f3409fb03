use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shopping::constants::{
    PINCH_WORDS, SENTINEL_BARE, SENTINEL_SUBSTRINGS, SENTINEL_WORDS,
};

/// `<int> <int>/<int> <unit>`
static MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)\s*(.*)$").expect("mixed number pattern should be valid")
});

/// `<int>/<int> <unit>`
static FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*/\s*(\d+)\s*(.*)$").expect("fraction pattern should be valid")
});

/// `<number> <unit>`, accepting a comma as decimal separator.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:[.,]\d+)?|[.,]\d+)\s*(.*)$").expect("decimal pattern should be valid")
});

/// A numeric amount with the unit text that followed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub value: f64,
    pub unit: String,
}

impl Amount {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Result of reading a free-text quantity.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedQuantity {
    /// A number that can take part in sums.
    Amount(Amount),
    /// A sentinel ("al gusto") or unreadable text kept verbatim. Never summed.
    Special(String),
}

impl ParsedQuantity {
    pub fn amount(&self) -> Option<&Amount> {
        match self {
            ParsedQuantity::Amount(amount) => Some(amount),
            ParsedQuantity::Special(_) => None,
        }
    }
}

/// Parse a free-text quantity such as "1/2 taza", "2 1/2 tza", "150g" or "al gusto".
///
/// Returns `None` only for empty input; anything else yields either an amount
/// or a special value.
pub fn parse_quantity(raw: &str) -> Option<ParsedQuantity> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(sentinel) = detect_sentinel(text) {
        return Some(ParsedQuantity::Special(sentinel.to_string()));
    }

    if let Some(caps) = MIXED_NUMBER.captures(text) {
        let whole: f64 = caps[1].parse().ok()?;
        let num: f64 = caps[2].parse().ok()?;
        let den: f64 = caps[3].parse().ok()?;
        if den == 0.0 {
            return Some(ParsedQuantity::Special(text.to_string()));
        }
        return Some(ParsedQuantity::Amount(Amount::new(
            whole + num / den,
            caps[4].trim(),
        )));
    }

    if let Some(caps) = FRACTION.captures(text) {
        let num: f64 = caps[1].parse().ok()?;
        let den: f64 = caps[2].parse().ok()?;
        if den == 0.0 {
            return Some(ParsedQuantity::Special(text.to_string()));
        }
        return Some(ParsedQuantity::Amount(Amount::new(num / den, caps[3].trim())));
    }

    if let Some(caps) = DECIMAL.captures(text) {
        let number = caps[1].replace(',', ".");
        if let Ok(value) = number.parse::<f64>() {
            return Some(ParsedQuantity::Amount(Amount::new(value, caps[2].trim())));
        }
    }

    Some(ParsedQuantity::Special(text.to_string()))
}

/// Recognize the non-numeric sentinels, case-insensitively.
pub fn detect_sentinel(text: &str) -> Option<&'static str> {
    let lowered = text.trim().to_lowercase();

    for (sentinel, patterns) in SENTINEL_SUBSTRINGS {
        if patterns.iter().any(|p| lowered.contains(p)) {
            return Some(sentinel);
        }
    }

    for (sentinel, tokens) in SENTINEL_BARE {
        if tokens.contains(&lowered.as_str()) {
            return Some(sentinel);
        }
    }

    for (sentinel, words) in SENTINEL_WORDS {
        if lowered.split_whitespace().any(|w| words.contains(&w)) {
            return Some(sentinel);
        }
    }

    None
}

/// Whether a raw quantity can never be priced (a sentinel or a pinch).
pub fn is_non_quantifiable(raw: &str) -> bool {
    if detect_sentinel(raw).is_some() {
        return true;
    }
    let lowered = raw.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| PINCH_WORDS.contains(&w))
}

/// Format a number for display: integers without decimals, otherwise up to two places.
pub fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{:.0}", value.round());
    }
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
