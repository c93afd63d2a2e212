//! Experience estimation from numeral + unit mentions

use serde::{Deserialize, Serialize};

/// Tenure estimate accumulated from "N years" / "N months" mentions.
///
/// Year and month numerals are tracked separately; no unit conversion is
/// applied. [`raw_total`](Self::raw_total) reproduces the historical
/// behavior of summing the raw numerals across units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEstimate {
    pub years: u32,
    pub months: u32,
}

impl ExperienceEstimate {
    /// Sum of year and month numerals without conversion
    /// ("3 years" + "6 months" = 9).
    pub fn raw_total(&self) -> u32 {
        self.years + self.months
    }

    pub fn is_empty(&self) -> bool {
        self.years == 0 && self.months == 0
    }
}

/// Scans tokens for a pure-digit token immediately before a year/month unit
/// word and accumulates the numerals. Mentions without a preceding numeral
/// are skipped silently.
#[derive(Debug, Default, Clone)]
pub struct ExperienceExtractor;

impl ExperienceExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, tokens: &[String]) -> ExperienceEstimate {
        let mut estimate = ExperienceEstimate::default();

        for (i, token) in tokens.iter().enumerate() {
            let unit = match token.to_lowercase().as_str() {
                "year" | "years" => Unit::Years,
                "month" | "months" => Unit::Months,
                _ => continue,
            };

            let Some(value) = i
                .checked_sub(1)
                .and_then(|prev| parse_numeral(&tokens[prev]))
            else {
                continue;
            };

            match unit {
                Unit::Years => estimate.years += value,
                Unit::Months => estimate.months += value,
            }
        }

        estimate
    }
}

enum Unit {
    Years,
    Months,
}

fn parse_numeral(token: &str) -> Option<u32> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
