use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::Holding;

/// Portfolio identity and metadata as supplied by the storage collaborator,
/// carried for attribution in derived outputs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub organization_id: String,
    pub name: String,
}

/// Point-in-time totals across one portfolio's holdings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub profit_loss: Decimal,
}

impl PortfolioSnapshot {
    pub fn zero() -> Self {
        PortfolioSnapshot {
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            profit_loss: Decimal::ZERO,
        }
    }
}

/// Holdings listing plus portfolio-level totals, the shape the service
/// layer serializes for holdings endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsReport {
    pub holdings: Vec<Holding>,
    pub total_market_value: Decimal,
    pub total_cost: Decimal,
    pub total_profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
}
