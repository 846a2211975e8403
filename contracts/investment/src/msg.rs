use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};
use finance::percent::Percent;

use crate::config::RiskLevel;

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// The CW20 token holding and moving the invested funds
    pub custody_asset: String,
    /// Annualized return rate in whole percents
    pub roi_percentage: Percent,
    /// Risk classification ordinal, see [`RiskLevel`]
    pub risk_level: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Open a position for `account`, funded by the message sender
    Invest { account: Addr, amount: Uint128 },
    /// Close `account`'s position, releasing principal plus accrued interest
    Withdraw { account: Addr },
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config(),
    TotalInvestment(),
    Investment { account: Addr },
    ContractBalance(),
    WithdrawalAmount { account: Addr },
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: Addr,
    pub custody_asset: Addr,
    pub roi_percentage: Percent,
    pub risk_level: RiskLevel,
    pub risk_level_label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
pub struct TotalInvestmentResponse {
    pub total: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
pub struct InvestmentResponse {
    pub principal: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
pub struct ContractBalanceResponse {
    pub balance: Uint128,
}

/// The withdrawal preview, safe to compute for accounts with no position.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
pub struct WithdrawalAmountResponse {
    pub principal: Uint128,
    pub interest: Uint128,
    pub total: Uint128,
}
