use cosmwasm_std::{Addr, Event, Uint128};

pub enum Type {
    Invest,
    Withdraw,
}

impl Type {
    /// 'wasm-' is always prepended by the runtime
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invest => "investment-made",
            Self::Withdraw => "investment-withdrawn",
        }
    }
}

pub fn emit_invest(account: Addr, amount: Uint128) -> Event {
    Event::new(Type::Invest.as_str())
        .add_attribute("account", account)
        .add_attribute("amount", amount)
}

pub fn emit_withdraw(account: Addr, payout: Uint128) -> Event {
    Event::new(Type::Withdraw.as_str())
        .add_attribute("account", account)
        .add_attribute("amount", payout)
}
