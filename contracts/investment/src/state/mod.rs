pub use config::Config;
pub use deposit::Deposit;
pub use total::Total;

mod config;
mod deposit;
mod total;
