use thiserror::Error;

/// Outcomes of an order-statistics query that has no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvlError {
    #[error("key does not exist in the tree")]
    NotFound,
    #[error("cannot take the floor of the smallest key in the tree")]
    NoFloor,
    #[error("cannot take the ceiling of the largest key in the tree")]
    NoCeiling,
}

pub type Result<T> = std::result::Result<T, AvlError>;
