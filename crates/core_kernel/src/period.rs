//! Query periods for profit calculations
//!
//! A period maps to a fixed-length window over the most recent NAV samples of
//! a fund, not to calendar boundaries: "this week" compares against the oldest
//! of the last 7 samples, "this month" against the oldest of the last 31.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Profit reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Today versus the previous NAV sample
    #[default]
    Day,
    /// The last 7 NAV samples
    Week,
    /// The last 31 NAV samples
    Month,
}

impl Period {
    /// Number of most recent price samples the period looks at
    pub fn window(&self) -> usize {
        match self {
            Period::Day => 2,
            Period::Week => 7,
            Period::Month => 31,
        }
    }

    /// Chinese label used in chat answers
    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "今日",
            Period::Week => "本周",
            Period::Month => "本月",
        }
    }

    /// Wire name of the period
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            other => Err(CoreError::InvalidPeriod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows() {
        assert_eq!(Period::Day.window(), 2);
        assert_eq!(Period::Week.window(), 7);
        assert_eq!(Period::Month.window(), 31);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Week".parse::<Period>().unwrap(), Period::Week);
        assert!("year".parse::<Period>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Period::Month).unwrap(), "\"month\"");
    }
}
