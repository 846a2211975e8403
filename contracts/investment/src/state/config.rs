use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Storage};
use cw_storage_plus::Item;

use finance::percent::Percent;

use crate::{config::RiskLevel, error::Result};

/// Instantiation-time parameters, immutable for the contract's lifetime.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    owner: Addr,
    custody_asset: Addr,
    roi_percentage: Percent,
    risk_level: RiskLevel,
}

impl Config {
    const STORAGE: Item<'_, Config> = Item::new("config");

    pub const fn new(
        owner: Addr,
        custody_asset: Addr,
        roi_percentage: Percent,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            owner,
            custody_asset,
            roi_percentage,
            risk_level,
        }
    }

    pub const fn owner(&self) -> &Addr {
        &self.owner
    }

    pub const fn custody_asset(&self) -> &Addr {
        &self.custody_asset
    }

    pub const fn roi_percentage(&self) -> Percent {
        self.roi_percentage
    }

    pub const fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }
}
