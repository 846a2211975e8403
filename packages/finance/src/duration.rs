use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

use cosmwasm_std::Timestamp;

pub type Units = u64;

pub type Seconds = u32;

/// A timespan between two cosmwasm_std::Timestamp-s.
///
/// Implementation note: We use `as` safely for numeric upcasts instead of `from/into`
/// in order to get const result.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(Units);

impl Duration {
    const UNITS_IN_SECOND: Units = 1000 * 1000 * 1000;
    const UNITS_IN_DAY: Units = Self::UNITS_IN_SECOND * Self::SECONDS_IN_DAY as Units;

    const SECONDS_IN_MINUTE: Seconds = 60;
    const SECONDS_IN_HOUR: Seconds = Self::SECONDS_IN_MINUTE * Self::MINUTES_IN_HOUR as Seconds;
    const SECONDS_IN_DAY: Seconds = Self::SECONDS_IN_HOUR * Self::HOURS_IN_DAY as Seconds;

    const MINUTES_IN_HOUR: u16 = 60;
    const HOURS_IN_DAY: u16 = 24;

    pub const YEAR: Duration = Self::from_days(365);

    pub const fn from_nanos(nanos: Units) -> Self {
        Self(nanos)
    }

    pub const fn from_secs(secs: Seconds) -> Self {
        Self::from_nanos(secs as Units * Self::UNITS_IN_SECOND)
    }

    pub const fn from_days(days: u16) -> Self {
        Self::from_nanos(days as Units * Self::UNITS_IN_DAY)
    }

    #[track_caller]
    pub fn between(start: &Timestamp, end: &Timestamp) -> Self {
        debug_assert!(start <= end);
        Self(end.nanos() - start.nanos())
    }

    pub const fn nanos(&self) -> Units {
        self.0
    }

    pub const fn secs(&self) -> Units {
        self.nanos() / Self::UNITS_IN_SECOND
    }

    pub const fn is_zero(&self) -> bool {
        self.nanos() == 0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Duration) -> Self::Output {
        Timestamp::from_nanos(
            self.nanos()
                .checked_add(rhs.nanos())
                .expect("timestamp overflow"),
        )
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    #[track_caller]
    fn sub(self, rhs: Duration) -> Self::Output {
        Timestamp::from_nanos(
            self.nanos()
                .checked_sub(rhs.nanos())
                .expect("timestamp underflow"),
        )
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} nanos", self.nanos())
    }
}
