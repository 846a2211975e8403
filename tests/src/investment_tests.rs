use cosmwasm_std::{Addr, Uint128};

use finance::{duration::Duration, percent::Percent};
use investment::{
    config::RiskLevel,
    error::ContractError,
    msg::{
        ConfigResponse, ContractBalanceResponse, InvestmentResponse, QueryMsg,
        TotalInvestmentResponse, WithdrawalAmountResponse,
    },
};

use crate::common::{
    assert_event, TestCase, ADMIN, INVESTOR1, INVESTOR2, ONE, RISK_LEVEL, ROI_PERCENTAGE,
};

fn investment_of(test_case: &TestCase, account: &str) -> u128 {
    let resp: InvestmentResponse = test_case.query(QueryMsg::Investment {
        account: Addr::unchecked(account),
    });
    resp.principal.u128()
}

fn total_investment(test_case: &TestCase) -> u128 {
    let resp: TotalInvestmentResponse = test_case.query(QueryMsg::TotalInvestment());
    resp.total.u128()
}

fn withdrawal_amount(test_case: &TestCase, account: &str) -> WithdrawalAmountResponse {
    test_case.query(QueryMsg::WithdrawalAmount {
        account: Addr::unchecked(account),
    })
}

#[test]
fn deployment_config() {
    let test_case = TestCase::new();

    let config: ConfigResponse = test_case.query(QueryMsg::Config());
    assert_eq!(Addr::unchecked(ADMIN), config.owner);
    assert_eq!(test_case.token, config.custody_asset);
    assert_eq!(ROI_PERCENTAGE, config.roi_percentage);
    assert_eq!(RiskLevel::Medium, config.risk_level);
    assert_eq!(RISK_LEVEL, config.risk_level.ordinal());
    assert_eq!("MEDIUM", config.risk_level_label);

    assert_eq!(0, total_investment(&test_case));
}

#[test]
fn unknown_risk_level_fails_instantiation() {
    use cw_multi_test::{App, ContractWrapper, Executor};

    let mut app = App::default();
    let code = app.store_code(Box::new(ContractWrapper::new(
        investment::contract::execute,
        investment::contract::instantiate,
        investment::contract::query,
    )));

    let err = app
        .instantiate_contract(
            code,
            Addr::unchecked(ADMIN),
            &investment::msg::InstantiateMsg {
                custody_asset: "token".into(),
                roi_percentage: Percent::from_percent(10),
                risk_level: 3,
            },
            &[],
            "investment",
            None,
        )
        .unwrap_err();
    assert_eq!(
        ContractError::UnknownRiskLevel(3),
        err.downcast().unwrap()
    );
}

#[test]
fn accepts_investments() {
    let mut test_case = TestCase::new();
    let amount = ONE;

    test_case.grant_allowance(INVESTOR1, amount);
    let resp = test_case.invest(INVESTOR1, amount).unwrap();
    assert_event(
        &resp,
        "investment-made",
        &[("account", INVESTOR1), ("amount", &amount.to_string())],
    );

    assert_eq!(amount, investment_of(&test_case, INVESTOR1));
    assert_eq!(amount, total_investment(&test_case));
}

#[test]
fn rejects_zero_investments() {
    let mut test_case = TestCase::new();

    let err = test_case.invest(INVESTOR1, 0).unwrap_err();
    assert_eq!(
        ContractError::InvalidAmount {},
        err.downcast().unwrap()
    );
}

#[test]
fn tracks_multiple_investments() {
    let mut test_case = TestCase::new();

    test_case.invest_with_allowance(INVESTOR1, ONE);
    test_case.invest_with_allowance(INVESTOR2, 2 * ONE);

    assert_eq!(ONE, investment_of(&test_case, INVESTOR1));
    assert_eq!(2 * ONE, investment_of(&test_case, INVESTOR2));
    assert_eq!(3 * ONE, total_investment(&test_case));
}

#[test]
fn pays_interest_on_withdrawal() {
    let mut test_case = TestCase::new();
    let amount = 2 * ONE;

    test_case.invest_with_allowance(INVESTOR1, amount);
    test_case.fund_interest_float(ONE);

    test_case.advance_time(Duration::YEAR);

    let expected_interest = ROI_PERCENTAGE.of(Uint128::new(amount)).unwrap().u128();
    let expected_total = amount + expected_interest;

    let balance_before = test_case.token_balance(INVESTOR1);
    let resp = test_case.withdraw(INVESTOR1).unwrap();
    assert_event(
        &resp,
        "investment-withdrawn",
        &[
            ("account", INVESTOR1),
            ("amount", &expected_total.to_string()),
        ],
    );

    let received = test_case.token_balance(INVESTOR1) - balance_before;
    assert_eq!(expected_total, received);
    assert_eq!(amount / 10, expected_interest);
    assert_eq!(0, investment_of(&test_case, INVESTOR1));
    assert_eq!(0, total_investment(&test_case));
}

#[test]
fn rejects_withdrawals_with_no_investment() {
    let mut test_case = TestCase::new();

    let err = test_case.withdraw(INVESTOR2).unwrap_err();
    assert_eq!(
        ContractError::NoOpenPosition {},
        err.downcast().unwrap()
    );
}

#[test]
fn prevents_reinvestment_before_withdrawal() {
    let mut test_case = TestCase::new();

    test_case.invest_with_allowance(INVESTOR1, 2 * ONE);

    test_case.grant_allowance(INVESTOR1, ONE);
    let err = test_case.invest(INVESTOR1, ONE).unwrap_err();
    assert_eq!(
        ContractError::PositionAlreadyOpen {},
        err.downcast().unwrap()
    );
}

#[test]
fn allows_reinvestment_after_withdrawal() {
    let mut test_case = TestCase::new();

    test_case.invest_with_allowance(INVESTOR1, 2 * ONE);
    test_case.withdraw(INVESTOR1).unwrap();

    test_case.invest_with_allowance(INVESTOR1, 3 * ONE);
    assert_eq!(3 * ONE, investment_of(&test_case, INVESTOR1));
}

#[test]
fn reports_contract_balance() {
    let mut test_case = TestCase::new();
    let amount = 5 * ONE;

    test_case.invest_with_allowance(INVESTOR1, amount);

    let resp: ContractBalanceResponse = test_case.query(QueryMsg::ContractBalance());
    assert_eq!(amount, resp.balance.u128());
}

#[test]
fn calculates_withdrawal_amounts() {
    let mut test_case = TestCase::new();
    let amount = 100 * ONE;

    test_case.invest_with_allowance(INVESTOR1, amount);
    test_case.advance_time(Duration::YEAR);

    let preview = withdrawal_amount(&test_case, INVESTOR1);
    assert_eq!(amount, preview.principal.u128());
    assert_eq!(
        ROI_PERCENTAGE.of(Uint128::new(amount)).unwrap(),
        preview.interest
    );
    assert_eq!(preview.principal + preview.interest, preview.total);
}

#[test]
fn zero_preview_for_non_investors() {
    let test_case = TestCase::new();

    let preview = withdrawal_amount(&test_case, INVESTOR2);
    assert_eq!(Uint128::zero(), preview.principal);
    assert_eq!(Uint128::zero(), preview.interest);
    assert_eq!(Uint128::zero(), preview.total);
}

#[test]
fn failed_custody_pull_leaves_ledger_untouched() {
    let mut test_case = TestCase::new();

    // no allowance granted, the custody pull is rejected and the whole
    // transaction, ledger writes included, is rolled back
    assert!(test_case.invest(INVESTOR1, ONE).is_err());

    assert_eq!(0, investment_of(&test_case, INVESTOR1));
    assert_eq!(0, total_investment(&test_case));
}

#[test]
fn failed_custody_release_keeps_position_open() {
    let mut test_case = TestCase::new();
    let amount = 2 * ONE;

    test_case.invest_with_allowance(INVESTOR1, amount);
    test_case.advance_time(Duration::YEAR);

    // the custody balance covers the principal but not the accrued
    // interest, so the payout transfer must fail and roll everything back
    assert!(test_case.withdraw(INVESTOR1).is_err());
    assert_eq!(amount, investment_of(&test_case, INVESTOR1));
    assert_eq!(amount, total_investment(&test_case));

    // once the float is topped up the same withdrawal goes through
    test_case.fund_interest_float(ONE);
    test_case.withdraw(INVESTOR1).unwrap();
    assert_eq!(0, investment_of(&test_case, INVESTOR1));
}

#[test]
fn aggregate_equals_sum_of_positions() {
    let mut test_case = TestCase::new();

    test_case.invest_with_allowance(INVESTOR1, ONE);
    assert_eq!(
        investment_of(&test_case, INVESTOR1) + investment_of(&test_case, INVESTOR2),
        total_investment(&test_case)
    );

    test_case.invest_with_allowance(INVESTOR2, 2 * ONE);
    assert_eq!(
        investment_of(&test_case, INVESTOR1) + investment_of(&test_case, INVESTOR2),
        total_investment(&test_case)
    );

    test_case.fund_interest_float(ONE);
    test_case.withdraw(INVESTOR1).unwrap();
    assert_eq!(
        investment_of(&test_case, INVESTOR1) + investment_of(&test_case, INVESTOR2),
        total_investment(&test_case)
    );
}
