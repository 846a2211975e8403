use serde::Serialize;

use cosmwasm_std::{
    entry_point, Api, Binary, Deps, DepsMut, Env, MessageInfo, Response as CwResponse,
};

use crate::{
    config::RiskLevel,
    custody::CustodyRef,
    error::{ContractError, Result},
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::{Config, Total},
};

mod investor;

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<CwResponse> {
    CustodyRef::try_new(&msg.custody_asset, deps.api)
        .map_err(Into::into)
        .and_then(|custody| {
            RiskLevel::try_from(msg.risk_level).map(|risk_level| {
                Config::new(
                    info.sender,
                    custody.addr().clone(),
                    msg.roi_percentage,
                    risk_level,
                )
            })
        })
        .and_then(|config| config.store(deps.storage))
        .and_then(|()| Total::default().store(deps.storage))
        .map(|()| CwResponse::default())
        .inspect_err(log(deps.api))
}

#[entry_point]
pub fn execute(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<CwResponse> {
    let api = deps.api;
    match msg {
        ExecuteMsg::Invest { account, amount } => {
            investor::try_invest(deps, env, info, account, amount)
        }
        ExecuteMsg::Withdraw { account } => investor::try_withdraw(deps, env, account),
    }
    .inspect_err(log(api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, env: Env, msg: QueryMsg) -> Result<Binary> {
    match msg {
        QueryMsg::Config() => {
            investor::query_config(deps.storage).and_then(|ref resp| to_json_binary(resp))
        }
        QueryMsg::TotalInvestment() => {
            investor::query_total(deps.storage).and_then(|ref resp| to_json_binary(resp))
        }
        QueryMsg::Investment { account } => investor::query_investment(deps.storage, account)
            .and_then(|ref resp| to_json_binary(resp)),
        QueryMsg::ContractBalance() => {
            investor::query_contract_balance(deps, env).and_then(|ref resp| to_json_binary(resp))
        }
        QueryMsg::WithdrawalAmount { account } => {
            investor::query_withdrawal_amount(deps.storage, env, account)
                .and_then(|ref resp| to_json_binary(resp))
        }
    }
    .inspect_err(log(deps.api))
}

fn to_json_binary<T>(data: &T) -> Result<Binary>
where
    T: Serialize,
{
    cosmwasm_std::to_json_binary(data).map_err(ContractError::ConvertToBinary)
}

fn log(api: &dyn Api) -> impl FnOnce(&ContractError) + '_ {
    move |err| api.debug(&format!("{err}"))
}
