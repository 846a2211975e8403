use serde::{Deserialize, Serialize};

use cosmwasm_std::{Storage, Uint128};
use cw_storage_plus::Item;

use finance::error::Error as FinanceError;

use crate::error::Result;

/// The ledger aggregate. Maintained on each deposit and withdrawal so that
/// it always equals the sum of all open positions' principals.
#[derive(Serialize, Deserialize, Debug, Default)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Total {
    total_principal: Uint128,
}

impl Total {
    const STORAGE: Item<'_, Total> = Item::new("total");

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }

    pub const fn total_principal(&self) -> Uint128 {
        self.total_principal
    }

    pub fn deposit(&mut self, amount: Uint128) -> Result<&mut Self> {
        debug_assert_ne!(Uint128::zero(), amount);

        self.total_principal
            .checked_add(amount)
            .map_err(|_| FinanceError::overflow("+", self.total_principal, amount).into())
            .map(|total| {
                self.total_principal = total;
                self
            })
    }

    pub fn withdraw(&mut self, amount: Uint128) -> Result<&mut Self> {
        debug_assert_ne!(Uint128::zero(), amount);

        self.total_principal
            .checked_sub(amount)
            .map_err(|_| FinanceError::overflow("-", self.total_principal, amount).into())
            .map(|total| {
                self.total_principal = total;
                self
            })
    }
}
