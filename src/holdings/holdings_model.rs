use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A computed, point-in-time position in one symbol, derived entirely from
/// the trade history. Quantity goes negative when sells exceed what was
/// held; consumers decide how to surface such short positions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub quantity: i64,
    pub average_cost: Decimal,
    pub total_cost: Decimal,
    /// Price of the last trade applied to this symbol. A proxy for the
    /// market price; real quotes are outside this crate.
    pub current_price: Decimal,
    pub market_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
}
