use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Reporting window picked by the user.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub enum RangeSelector {
    Days(u32),
    Lifetime,
}

/// Pills offered by the overlay, in display order.
pub const RANGE_PRESETS: [RangeSelector; 5] = [
    RangeSelector::Days(7),
    RangeSelector::Days(30),
    RangeSelector::Days(90),
    RangeSelector::Days(365),
    RangeSelector::Lifetime,
];

impl RangeSelector {
    /// Day count before clamping. `Lifetime` asks for the maximum window.
    pub fn requested_days(&self, max_days: u32) -> u32 {
        match self {
            RangeSelector::Days(n) => *n,
            RangeSelector::Lifetime => max_days,
        }
    }

    /// Requested length clamped into `[min_days, max_days]`.
    pub fn effective_days(&self, min_days: u32, max_days: u32) -> u32 {
        self.requested_days(max_days).clamp(min_days, max_days.max(min_days))
    }

    pub fn label(&self) -> String {
        match self {
            RangeSelector::Days(n) => format!("{}D", n),
            RangeSelector::Lifetime => "Lifetime".to_string(),
        }
    }

    pub fn preset_index(&self) -> Option<usize> {
        RANGE_PRESETS.iter().position(|p| p == self)
    }
}

impl Default for RangeSelector {
    fn default() -> Self {
        RangeSelector::Days(30)
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSelector::Days(n) => write!(f, "{}", n),
            RangeSelector::Lifetime => write!(f, "lifetime"),
        }
    }
}

impl FromStr for RangeSelector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("lifetime") || s.eq_ignore_ascii_case("all") {
            return Ok(RangeSelector::Lifetime);
        }
        let days: u32 = s
            .trim_end_matches(['d', 'D'])
            .parse()
            .map_err(|_| anyhow!("Invalid range '{}': expected a day count or 'lifetime'", s))?;
        if days == 0 {
            return Err(anyhow!("Range must be at least one day"));
        }
        Ok(RangeSelector::Days(days))
    }
}

// Ranges are stored as either a bare number or the string "lifetime".
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Days(u32),
    Named(String),
}

impl TryFrom<RangeRepr> for RangeSelector {
    type Error = anyhow::Error;

    fn try_from(value: RangeRepr) -> Result<Self> {
        match value {
            RangeRepr::Days(0) => Err(anyhow!("Range must be at least one day")),
            RangeRepr::Days(n) => Ok(RangeSelector::Days(n)),
            RangeRepr::Named(s) => s.parse(),
        }
    }
}

impl From<RangeSelector> for RangeRepr {
    fn from(value: RangeSelector) -> Self {
        match value {
            RangeSelector::Days(n) => RangeRepr::Days(n),
            RangeSelector::Lifetime => RangeRepr::Named("lifetime".to_string()),
        }
    }
}
