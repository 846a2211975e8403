pub mod config;
pub mod contract;
pub mod custody;
pub mod error;
mod event;
pub mod msg;
pub mod state;
