use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Finance] Overflow when evaluating `{details}`")]
    Overflow { details: String },
}

impl Error {
    pub fn overflow<L, R>(operation: &str, lhs: L, rhs: R) -> Self
    where
        L: std::fmt::Debug,
        R: std::fmt::Debug,
    {
        Self::Overflow {
            details: format!("({lhs:?} {operation} {rhs:?})"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
