//! Resolution and time-zone declarations.
//!
//! This module defines [`Resolution`] for the granularity at which a dataset
//! delivers records and [`DataTimeZone`] for the zone its calendar days are
//! anchored to. Both are queried by the host's subscription manager when a
//! dataset is added.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity at which a dataset delivers records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Individual events as they occur.
    Tick,
    /// One-second bars.
    Second,
    /// One-minute bars.
    Minute,
    /// Hourly bars.
    Hour,
    /// Daily bars.
    Daily,
}

impl Resolution {
    /// Returns true if this is an intraday resolution (tick through hourly).
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::Tick | Self::Second | Self::Minute | Self::Hour)
    }
}

/// Time zone a dataset's timestamps are anchored to.
///
/// Exchange-traded datasets typically declare the exchange zone; alternative
/// datasets aggregated over calendar days declare [`DataTimeZone::Utc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataTimeZone {
    /// Coordinated Universal Time.
    #[default]
    Utc,
    /// America/New_York, the customary zone for US equity datasets.
    NewYork,
}

impl fmt::Display for DataTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => write!(f, "UTC"),
            Self::NewYork => write!(f, "America/New_York"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_is_not_intraday() {
        assert!(!Resolution::Daily.is_intraday());
        assert!(Resolution::Minute.is_intraday());
        assert!(Resolution::Tick.is_intraday());
    }

    #[test]
    fn test_time_zone_display() {
        assert_eq!(DataTimeZone::Utc.to_string(), "UTC");
        assert_eq!(DataTimeZone::NewYork.to_string(), "America/New_York");
    }
}
