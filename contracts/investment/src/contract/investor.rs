use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo, Response as CwResponse, Storage, Uint128};

use finance::error::Error as FinanceError;

use crate::{
    custody::CustodyRef,
    error::{ContractError, Result},
    event,
    msg::{
        ConfigResponse, ContractBalanceResponse, InvestmentResponse, TotalInvestmentResponse,
        WithdrawalAmountResponse,
    },
    state::{Config, Deposit, Total},
};

/// Open a position for `account`, pulling the funds from the message sender.
///
/// The ledger is updated first; the custody pull is scheduled afterwards and
/// a rejected transfer fails the whole transaction, ledger update included.
pub(super) fn try_invest(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    account: Addr,
    amount: Uint128,
) -> Result<CwResponse> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }

    let account = deps.api.addr_validate(account.as_str())?;
    let config = Config::load(deps.storage)?;

    let mut deposit = Deposit::load_or_default(deps.storage, account.clone())?;
    deposit.open(amount, env.block.time)?;
    deposit.save(deps.storage)?;

    let mut total = Total::load(deps.storage)?;
    total.deposit(amount)?;
    total.store(deps.storage)?;

    CustodyRef::from_addr(config.custody_asset().clone())
        .pull_req(&info.sender, &env.contract.address, amount)
        .map_err(Into::into)
        .map(|pull| {
            CwResponse::new()
                .add_message(pull)
                .add_event(event::emit_invest(account, amount))
        })
}

/// Close `account`'s position and release principal plus accrued interest.
///
/// The interest is paid from the custody surplus held by the contract; the
/// aggregate is debited by the principal only.
pub(super) fn try_withdraw(deps: DepsMut<'_>, env: Env, account: Addr) -> Result<CwResponse> {
    let account = deps.api.addr_validate(account.as_str())?;
    let config = Config::load(deps.storage)?;

    let mut deposit = Deposit::load(deps.storage, account.clone())?;
    let (principal, interest) = deposit.close(config.roi_percentage(), &env.block.time)?;
    deposit.save(deps.storage)?;

    let mut total = Total::load(deps.storage)?;
    total.withdraw(principal)?;
    total.store(deps.storage)?;

    let payout = principal
        .checked_add(interest)
        .map_err(|_| FinanceError::overflow("+", principal, interest))?;

    CustodyRef::from_addr(config.custody_asset().clone())
        .release_req(&account, payout)
        .map_err(Into::into)
        .map(|release| {
            CwResponse::new()
                .add_message(release)
                .add_event(event::emit_withdraw(account, payout))
        })
}

pub(super) fn query_config(storage: &dyn Storage) -> Result<ConfigResponse> {
    Config::load(storage).map(|config| ConfigResponse {
        owner: config.owner().clone(),
        custody_asset: config.custody_asset().clone(),
        roi_percentage: config.roi_percentage(),
        risk_level: config.risk_level(),
        risk_level_label: config.risk_level().to_string(),
    })
}

pub(super) fn query_total(storage: &dyn Storage) -> Result<TotalInvestmentResponse> {
    Total::load(storage).map(|total| TotalInvestmentResponse {
        total: total.total_principal(),
    })
}

pub(super) fn query_investment(storage: &dyn Storage, account: Addr) -> Result<InvestmentResponse> {
    Deposit::load_or_default(storage, account).map(|deposit| InvestmentResponse {
        principal: deposit.principal(),
    })
}

pub(super) fn query_contract_balance(
    deps: Deps<'_>,
    env: Env,
) -> Result<ContractBalanceResponse> {
    Config::load(deps.storage).and_then(|config| {
        CustodyRef::from_addr(config.custody_asset().clone())
            .balance(&deps.querier, &env.contract.address)
            .map_err(Into::into)
            .map(|balance| ContractBalanceResponse { balance })
    })
}

/// Non-mutating withdrawal preview, all zeros for accounts with no position.
pub(super) fn query_withdrawal_amount(
    storage: &dyn Storage,
    env: Env,
    account: Addr,
) -> Result<WithdrawalAmountResponse> {
    let config = Config::load(storage)?;
    let deposit = Deposit::load_or_default(storage, account)?;

    let principal = deposit.principal();
    let interest = deposit.accrued_interest(config.roi_percentage(), &env.block.time)?;
    principal
        .checked_add(interest)
        .map_err(|_| FinanceError::overflow("+", principal, interest).into())
        .map(|total| WithdrawalAmountResponse {
            principal,
            interest,
            total,
        })
}
