//! Side, OrderType, TimeInForce, and Interval enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order types supported by the venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order - executes at the specified price or better
    #[default]
    Limit,
    /// Market order - executes immediately at the best available price
    Market,
}

impl OrderType {
    /// Returns the order type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order lifetime policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeInForce {
    /// Good till cancelled
    #[serde(rename = "GTC")]
    #[default]
    GoodTillCancelled,
    /// Good till time - requires a cancellation window
    #[serde(rename = "GTT")]
    GoodTillTime,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodTillCancelled => write!(f, "GTC"),
            Self::GoodTillTime => write!(f, "GTT"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
        }
    }
}

/// Cancellation window attached to good-till-time orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CancelAfter {
    /// Cancel after one minute
    #[default]
    Min,
    /// Cancel after one hour
    Hour,
    /// Cancel after one day
    Day,
}

impl CancelAfter {
    /// Returns the window as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

/// Candle interval
///
/// The venue accepts a fixed set of granularities; anything else is
/// rejected server-side, so unknown interval names fail to parse here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// 1 minute
    #[serde(rename = "1m")]
    M1,
    /// 5 minutes
    #[serde(rename = "5m")]
    M5,
    /// 15 minutes
    #[serde(rename = "15m")]
    M15,
    /// 1 hour
    #[serde(rename = "1h")]
    H1,
    /// 6 hours
    #[serde(rename = "6h")]
    H6,
    /// 1 day
    #[serde(rename = "1d")]
    D1,
}

impl Interval {
    /// All supported intervals
    pub const ALL: [Interval; 6] = [
        Self::M1,
        Self::M5,
        Self::M15,
        Self::H1,
        Self::H6,
        Self::D1,
    ];

    /// Candle bucket width in seconds
    pub fn granularity_secs(&self) -> u64 {
        match self {
            Self::M1 => 60,
            Self::M5 => 300,
            Self::M15 => 900,
            Self::H1 => 3600,
            Self::H6 => 21600,
            Self::D1 => 86400,
        }
    }

    /// Returns the interval name as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H6 => "6h",
            Self::D1 => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = InvalidInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::M1),
            "5m" => Ok(Self::M5),
            "15m" => Ok(Self::M15),
            "1h" => Ok(Self::H1),
            "6h" => Ok(Self::H6),
            "1d" => Ok(Self::D1),
            _ => Err(InvalidInterval(s.to_string())),
        }
    }
}

/// Error for unrecognized interval names
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unsupported candle interval: {0}")]
pub struct InvalidInterval(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        let parsed: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(parsed, Side::Sell);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_time_in_force_serde() {
        assert_eq!(
            serde_json::to_string(&TimeInForce::GoodTillTime).unwrap(),
            "\"GTT\""
        );
        let parsed: TimeInForce = serde_json::from_str("\"IOC\"").unwrap();
        assert_eq!(parsed, TimeInForce::ImmediateOrCancel);
    }

    #[test]
    fn test_cancel_after_wire_form() {
        assert_eq!(serde_json::to_string(&CancelAfter::Min).unwrap(), "\"min\"");
        assert_eq!(CancelAfter::default(), CancelAfter::Min);
    }

    #[test]
    fn test_interval_granularities() {
        assert_eq!(Interval::M1.granularity_secs(), 60);
        assert_eq!(Interval::M5.granularity_secs(), 300);
        assert_eq!(Interval::M15.granularity_secs(), 900);
        assert_eq!(Interval::H1.granularity_secs(), 3600);
        assert_eq!(Interval::H6.granularity_secs(), 21600);
        assert_eq!(Interval::D1.granularity_secs(), 86400);
    }

    #[test]
    fn test_interval_parse_roundtrip() {
        for interval in Interval::ALL {
            let parsed: Interval = interval.as_str().parse().unwrap();
            assert_eq!(parsed, interval);
        }
    }

    #[test]
    fn test_interval_parse_rejects_unknown() {
        assert!("2m".parse::<Interval>().is_err());
        assert!("1w".parse::<Interval>().is_err());
        assert!("".parse::<Interval>().is_err());

        let err = "90s".parse::<Interval>().unwrap_err();
        assert!(err.to_string().contains("90s"));
    }
}
