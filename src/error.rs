//! Error types for pizza orders.

use thiserror::Error;

/// Errors raised while building, comparing, or ordering recipes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PizzaError {
    #[error("Invalid pizza size: {0}")]
    InvalidSize(String),

    #[error("Invalid pizza name: {0}")]
    InvalidPizzaName(String),

    #[error("Invalid pizza type: {0}")]
    InvalidComparison(String),

    #[error("invalid status template (expected exactly one `{{}}` slot): {0}")]
    InvalidTemplate(String),
}

pub type Result<T> = std::result::Result<T, PizzaError>;
