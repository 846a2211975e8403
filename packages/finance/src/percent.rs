use std::fmt::{Display, Formatter, Result as FmtResult};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint128;

use crate::error::{Error, Result};

pub type Units = u32;

/// An annualized rate in whole percent units, e.g. `Percent::from_percent(10)` is 10%.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct Percent(Units);

impl Percent {
    pub const ZERO: Self = Self::from_percent(0);
    pub const HUNDRED: Self = Self::from_percent(100);

    pub const fn from_percent(units: Units) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> Units {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The part of `whole` this percentage designates, rounded down.
    pub fn of(&self, whole: Uint128) -> Result<Uint128> {
        whole
            .full_mul(Uint128::from(self.units()))
            .checked_div(Self::HUNDRED.units().into())
            .expect("div by a non-zero constant")
            .try_into()
            .map_err(|_| Error::overflow("of", *self, whole))
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}%", self.units())
    }
}
