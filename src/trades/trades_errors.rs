use rust_decimal::Decimal;
use thiserror::Error;

use super::trades_model::TradeStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("Trade symbol must not be empty")]
    EmptySymbol,

    #[error("Trade quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    #[error("Trade price must be positive, got {0}")]
    InvalidPrice(Decimal),

    #[error("Unknown trade side: {0}")]
    UnknownSide(String),

    #[error("Trade cannot move from {from} to {to}")]
    InvalidTransition { from: TradeStatus, to: TradeStatus },
}
