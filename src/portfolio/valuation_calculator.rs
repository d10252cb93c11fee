use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::holdings::{calculate_holdings, Holding};
use crate::trades::Trade;

use super::portfolio_model::{HoldingsReport, PortfolioSnapshot};

/// Sums a holdings mapping into portfolio totals.
pub fn value_holdings(holdings: &HashMap<String, Holding>) -> PortfolioSnapshot {
    let total_value: Decimal = holdings.values().map(|h| h.market_value).sum();
    let total_cost: Decimal = holdings.values().map(|h| h.total_cost).sum();

    PortfolioSnapshot {
        total_value,
        total_cost,
        profit_loss: total_value - total_cost,
    }
}

/// Replays the trade history up to `as_of` and values what is held then.
/// Pure, so a time series can call it once per date without shared state.
pub fn value_at_date(trades: &[Trade], as_of: NaiveDate) -> Result<Decimal> {
    let as_of_trades: Vec<Trade> = trades
        .iter()
        .filter(|trade| trade.trade_date <= as_of)
        .cloned()
        .collect();

    let holdings = calculate_holdings(&as_of_trades)?;
    Ok(holdings.values().map(|h| h.market_value).sum())
}

/// Holdings plus portfolio totals in one pass, sorted by symbol for a
/// stable listing.
pub fn holdings_report(trades: &[Trade]) -> Result<HoldingsReport> {
    let by_symbol = calculate_holdings(trades)?;
    let snapshot = value_holdings(&by_symbol);

    let mut holdings: Vec<Holding> = by_symbol.into_values().collect();
    holdings.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    let profit_loss_percent = if snapshot.total_cost > Decimal::ZERO {
        snapshot.profit_loss / snapshot.total_cost * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    Ok(HoldingsReport {
        holdings,
        total_market_value: snapshot.total_value,
        total_cost: snapshot.total_cost,
        total_profit_loss: snapshot.profit_loss,
        profit_loss_percent,
    })
}
