use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[Investment] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[Investment] Failed to convert query response to binary! Cause: {0}")]
    ConvertToBinary(StdError),

    #[error("[Investment] {0}")]
    Finance(#[from] finance::error::Error),

    #[error("[Investment] Investment must be greater than 0")]
    InvalidAmount {},

    #[error("[Investment] Must withdraw existing investment first")]
    PositionAlreadyOpen {},

    #[error("[Investment] No investment found")]
    NoOpenPosition {},

    #[error("[Investment] Unknown risk level ordinal '{0}'")]
    UnknownRiskLevel(u8),

    #[error("[Investment] Unknown risk level '{0}'")]
    UnknownRiskLevelName(String),
}

pub type Result<T> = std::result::Result<T, ContractError>;
