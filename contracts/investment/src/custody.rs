use serde::{Deserialize, Serialize};

use cosmwasm_std::{to_json_binary, Addr, Api, QuerierWrapper, StdResult, Uint128, WasmMsg};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// A reference to the external CW20 token that physically holds and moves
/// the invested funds on the ledger's instruction.
///
/// The requests built here are dispatched after the ledger state is
/// committed; a rejected transfer fails the whole transaction, so the ledger
/// never diverges from the token balances.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct CustodyRef {
    addr: Addr,
}

impl CustodyRef {
    pub fn try_new<A>(addr_raw: &str, api: &A) -> StdResult<Self>
    where
        A: ?Sized + Api,
    {
        api.addr_validate(addr_raw).map(|addr| Self { addr })
    }

    pub const fn from_addr(addr: Addr) -> Self {
        Self { addr }
    }

    pub const fn addr(&self) -> &Addr {
        &self.addr
    }

    /// Pull `amount` from `owner` into `recipient`'s custody. Requires a
    /// matching allowance granted to `recipient` on the token.
    pub fn pull_req(&self, owner: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<WasmMsg> {
        to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.into(),
            recipient: recipient.into(),
            amount,
        })
        .map(|msg| WasmMsg::Execute {
            contract_addr: self.addr.clone().into(),
            msg,
            funds: vec![],
        })
    }

    /// Release `amount` from the caller's custody to `recipient`.
    pub fn release_req(&self, recipient: &Addr, amount: Uint128) -> StdResult<WasmMsg> {
        to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.into(),
            amount,
        })
        .map(|msg| WasmMsg::Execute {
            contract_addr: self.addr.clone().into(),
            msg,
            funds: vec![],
        })
    }

    pub fn balance(&self, querier: &QuerierWrapper<'_>, holder: &Addr) -> StdResult<Uint128> {
        querier
            .query_wasm_smart(
                self.addr.clone(),
                &Cw20QueryMsg::Balance {
                    address: holder.into(),
                },
            )
            .map(|resp: BalanceResponse| resp.balance)
    }
}
