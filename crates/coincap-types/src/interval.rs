//! Point-in-time intervals for historical market data

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Interval between points of historical market data.
///
/// Used when requesting asset history and candles. The candle endpoint
/// accepts every variant; asset history accepts the subset reported by
/// [`Interval::is_history_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Interval {
    /// 1 minute
    #[serde(rename = "m1")]
    Minute,
    /// 5 minutes
    #[serde(rename = "m5")]
    FiveMinutes,
    /// 15 minutes
    #[serde(rename = "m15")]
    FifteenMinutes,
    /// 30 minutes
    #[serde(rename = "m30")]
    ThirtyMinutes,
    /// 1 hour
    #[serde(rename = "h1")]
    Hour,
    /// 2 hours
    #[serde(rename = "h2")]
    TwoHours,
    /// 4 hours
    #[serde(rename = "h4")]
    FourHours,
    /// 8 hours
    #[serde(rename = "h8")]
    EightHours,
    /// 12 hours
    #[serde(rename = "h12")]
    TwelveHours,
    /// 1 day
    #[serde(rename = "d1")]
    Day,
    /// 1 week
    #[serde(rename = "w1")]
    Week,
}

impl Interval {
    /// Returns the interval code as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "m1",
            Self::FiveMinutes => "m5",
            Self::FifteenMinutes => "m15",
            Self::ThirtyMinutes => "m30",
            Self::Hour => "h1",
            Self::TwoHours => "h2",
            Self::FourHours => "h4",
            Self::EightHours => "h8",
            Self::TwelveHours => "h12",
            Self::Day => "d1",
            Self::Week => "w1",
        }
    }

    /// Returns true if the asset history endpoint accepts this interval
    pub fn is_history_interval(&self) -> bool {
        matches!(
            self,
            Self::Minute | Self::FifteenMinutes | Self::Hour | Self::Day
        )
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized interval code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized interval: {0}")]
pub struct ParseIntervalError(pub String);

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m1" => Ok(Self::Minute),
            "m5" => Ok(Self::FiveMinutes),
            "m15" => Ok(Self::FifteenMinutes),
            "m30" => Ok(Self::ThirtyMinutes),
            "h1" => Ok(Self::Hour),
            "h2" => Ok(Self::TwoHours),
            "h4" => Ok(Self::FourHours),
            "h8" => Ok(Self::EightHours),
            "h12" => Ok(Self::TwelveHours),
            "d1" => Ok(Self::Day),
            "w1" => Ok(Self::Week),
            other => Err(ParseIntervalError(other.to_string())),
        }
    }
}
