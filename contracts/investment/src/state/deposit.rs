use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Storage, Timestamp, Uint128};
use cw_storage_plus::Map;

use finance::{duration::Duration, interest, percent::Percent};

use crate::error::{ContractError, Result};

/// An account's position: the outstanding principal and the time it was
/// deposited. The entry is removed once the principal returns to zero, so
/// `principal == 0` and "no open position" are the same state.
#[derive(Debug)]
#[cfg_attr(test, derive(Clone, PartialEq, Eq))]
pub struct Deposit {
    addr: Addr,
    data: DepositData,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Default)]
struct DepositData {
    principal: Uint128,
    deposited_at: Timestamp,
}

impl Deposit {
    const DEPOSITS: Map<'_, Addr, DepositData> = Map::new("deposits");

    pub fn load_or_default(storage: &dyn Storage, addr: Addr) -> Result<Self> {
        Self::may_load(storage, addr.clone()).map(|may_deposit| {
            may_deposit.unwrap_or_else(|| Self {
                addr,
                data: DepositData::default(),
            })
        })
    }

    pub fn load(storage: &dyn Storage, addr: Addr) -> Result<Self> {
        Self::may_load(storage, addr)
            .and_then(|may_deposit| may_deposit.ok_or(ContractError::NoOpenPosition {}))
    }

    pub fn save(self, storage: &mut dyn Storage) -> Result<()> {
        if self.data.principal.is_zero() {
            Self::DEPOSITS.remove(storage, self.addr);
            Ok(())
        } else {
            Self::DEPOSITS
                .save(storage, self.addr.clone(), &self.data)
                .map_err(Into::into)
        }
    }

    pub fn principal(&self) -> Uint128 {
        self.data.principal
    }

    /// Open the position. One open position per account at a time; the
    /// account must withdraw to zero before depositing again.
    pub fn open(&mut self, amount: Uint128, now: Timestamp) -> Result<()> {
        debug_assert_ne!(Uint128::zero(), amount);

        if !self.data.principal.is_zero() {
            return Err(ContractError::PositionAlreadyOpen {});
        }

        self.data.principal = amount;
        self.data.deposited_at = now;

        Ok(())
    }

    /// Interest owed as of `now`; zero when there is no open position.
    pub fn accrued_interest(&self, rate: Percent, now: &Timestamp) -> Result<Uint128> {
        if self.data.principal.is_zero() {
            return Ok(Uint128::zero());
        }

        interest::interest(
            self.data.principal,
            rate,
            Duration::between(&self.data.deposited_at, now),
        )
        .map_err(Into::into)
    }

    /// Close the position, returning the released principal and the accrued
    /// interest. The position is zeroed in memory; persisting via [`save`]
    /// removes the ledger entry.
    pub fn close(&mut self, rate: Percent, now: &Timestamp) -> Result<(Uint128, Uint128)> {
        if self.data.principal.is_zero() {
            return Err(ContractError::NoOpenPosition {});
        }

        self.accrued_interest(rate, now).map(|interest| {
            let principal = self.data.principal;
            self.data = DepositData::default();
            (principal, interest)
        })
    }

    fn may_load(storage: &dyn Storage, addr: Addr) -> Result<Option<Self>> {
        Self::DEPOSITS
            .may_load(storage, addr.clone())
            .map_err(Into::into)
            .map(|may_data| may_data.map(|data| Self { addr, data }))
    }
}
