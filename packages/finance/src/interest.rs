use cosmwasm_std::{Uint128, Uint256};

use crate::{
    duration::Duration,
    error::{Error, Result},
    percent::Percent,
};

/// Computes how much interest a principal accrues over a period at an annual rate.
///
/// The result is `principal * rate * period / YEAR`, evaluated with a 256-bit
/// intermediate and a single flooring division. Rounding may under-pay by at
/// most one unit but never over-pays.
pub fn interest(principal: Uint128, rate: Percent, period: Duration) -> Result<Uint128> {
    if principal.is_zero() || rate.is_zero() || period.is_zero() {
        return Ok(Uint128::zero());
    }

    let annualized: Uint256 = Uint256::from(Percent::HUNDRED.units())
        .checked_mul(Duration::YEAR.secs().into())
        .expect("constant product fits");

    Uint256::from(principal)
        .checked_mul(rate.units().into())
        .and_then(|scaled| scaled.checked_mul(period.secs().into()))
        .map_err(|_| Error::overflow("interest", principal, rate))
        .map(|num| num.checked_div(annualized).expect("non-zero denominator"))
        .and_then(|value| {
            value
                .try_into()
                .map_err(|_| Error::overflow("interest", principal, rate))
        })
}
