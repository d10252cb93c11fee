use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::trades::{Trade, TradeSide};

use super::holdings_model::Holding;

/// Running per-symbol state while folding trades.
#[derive(Debug, Default)]
struct OpenPosition {
    quantity: i64,
    total_cost: Decimal,
    last_price: Decimal,
}

/// Folds a trade history into per-symbol holdings using average-cost
/// accounting: each sell consumes cost basis at the position's current
/// average cost rather than tracking individual lots.
///
/// Trades are applied in trade-date order; same-day trades keep their
/// input sequence. Symbols whose net quantity ends at zero are dropped
/// from the result.
pub fn calculate_holdings(trades: &[Trade]) -> Result<HashMap<String, Holding>> {
    validate_trades(trades)?;

    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|trade| trade.trade_date);

    debug!("Folding {} trades into holdings", ordered.len());

    let mut positions: HashMap<String, OpenPosition> = HashMap::new();
    for trade in ordered {
        let position = positions.entry(trade.symbol.clone()).or_default();
        match trade.side {
            TradeSide::Buy => {
                position.quantity += trade.quantity;
                position.total_cost +=
                    trade.gross_value() + trade.commission.unwrap_or(Decimal::ZERO);
            }
            TradeSide::Sell => {
                let cost_per_share = if position.quantity > 0 {
                    position.total_cost / Decimal::from(position.quantity)
                } else {
                    Decimal::ZERO
                };
                position.total_cost -= cost_per_share * Decimal::from(trade.quantity);
                position.quantity -= trade.quantity;
                if position.quantity < 0 {
                    warn!(
                        "Sell of {} {} exceeds held quantity; position is now short {}",
                        trade.quantity,
                        trade.symbol,
                        -position.quantity
                    );
                }
            }
        }
        position.last_price = trade.price;
    }

    Ok(positions
        .into_iter()
        .filter(|(_, position)| position.quantity != 0)
        .map(|(symbol, position)| {
            let holding = close_out(&symbol, &position);
            (symbol, holding)
        })
        .collect())
}

/// Derives the valuation fields from the final folded state. Divisions are
/// zero-guarded so the result never carries NaN or infinity.
fn close_out(symbol: &str, position: &OpenPosition) -> Holding {
    let average_cost = if position.quantity > 0 {
        position.total_cost / Decimal::from(position.quantity)
    } else {
        Decimal::ZERO
    };
    let market_value = position.last_price * Decimal::from(position.quantity);
    let profit_loss = market_value - position.total_cost;
    let profit_loss_percent = if position.total_cost > Decimal::ZERO {
        profit_loss / position.total_cost * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    Holding {
        symbol: symbol.to_string(),
        quantity: position.quantity,
        average_cost,
        total_cost: position.total_cost,
        current_price: position.last_price,
        market_value,
        profit_loss,
        profit_loss_percent,
    }
}

/// Malformed numeric input is rejected up front rather than folded into
/// nonsense figures.
fn validate_trades(trades: &[Trade]) -> Result<()> {
    for trade in trades {
        if trade.quantity <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "trade {}: quantity must be positive, got {}",
                trade.id, trade.quantity
            ))
            .into());
        }
        if trade.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "trade {}: price must be positive, got {}",
                trade.id, trade.price
            ))
            .into());
        }
        if let Some(commission) = trade.commission {
            if commission < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "trade {}: commission must not be negative, got {}",
                    trade.id, commission
                ))
                .into());
            }
        }
    }
    Ok(())
}
