pub mod duration;
pub mod error;
pub mod interest;
pub mod percent;
