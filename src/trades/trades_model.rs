use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::trades_errors::TradeError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl FromStr for TradeSide {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BUY" => Ok(TradeSide::Buy),
            "SELL" => Ok(TradeSide::Sell),
            other => Err(TradeError::UnknownSide(other.to_string())),
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a trade. Only the caller decides which states
/// participate in valuation; the calculators fold whatever they are given.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Pending,
    Executed,
    Settled,
    Canceled,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Pending => "PENDING",
            TradeStatus::Executed => "EXECUTED",
            TradeStatus::Settled => "SETTLED",
            TradeStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booked securities trade, the engine's only input record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: i64,
    pub price: Decimal,
    pub commission: Option<Decimal>,
    pub trade_date: NaiveDate,
    pub settlement_date: NaiveDate,
    pub status: TradeStatus,
    pub total_amount: Decimal,
    pub notes: Option<String>,
}

impl Trade {
    /// Gross value of the fill, before commission.
    pub fn gross_value(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Pending trades are the only ones that may be amended or deleted.
    pub fn can_modify(&self) -> bool {
        self.status == TradeStatus::Pending
    }

    pub fn execute(&mut self) -> Result<(), TradeError> {
        self.transition(TradeStatus::Pending, TradeStatus::Executed)
    }

    pub fn settle(&mut self) -> Result<(), TradeError> {
        self.transition(TradeStatus::Executed, TradeStatus::Settled)
    }

    /// Cancels the trade. Settled trades are final and cannot be canceled.
    pub fn cancel(&mut self) -> Result<(), TradeError> {
        if self.status == TradeStatus::Settled {
            return Err(TradeError::InvalidTransition {
                from: self.status,
                to: TradeStatus::Canceled,
            });
        }
        self.status = TradeStatus::Canceled;
        Ok(())
    }

    fn transition(&mut self, expected: TradeStatus, next: TradeStatus) -> Result<(), TradeError> {
        if self.status != expected {
            return Err(TradeError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Request input for booking a trade, before derivation of commission,
/// settlement date and total amount.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub portfolio_id: String,
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: i64,
    pub price: Decimal,
    pub trade_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTrade {
    pub fn validate(&self) -> Result<(), TradeError> {
        if self.symbol.trim().is_empty() {
            return Err(TradeError::EmptySymbol);
        }
        if self.quantity <= 0 {
            return Err(TradeError::InvalidQuantity(self.quantity));
        }
        if self.price <= Decimal::ZERO {
            return Err(TradeError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::trades::build_trade;

    fn pending_trade() -> Trade {
        build_trade(NewTrade {
            portfolio_id: "pf-1".to_string(),
            symbol: "aapl".to_string(),
            side: TradeSide::Buy,
            quantity: 10,
            price: dec!(100),
            trade_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            notes: None,
        })
        .unwrap()
    }

    #[test]
    fn trade_side_parses_case_insensitively() {
        assert_eq!("buy".parse::<TradeSide>().unwrap(), TradeSide::Buy);
        assert_eq!("SELL".parse::<TradeSide>().unwrap(), TradeSide::Sell);
        assert_eq!(
            "hold".parse::<TradeSide>(),
            Err(TradeError::UnknownSide("HOLD".to_string()))
        );
    }

    #[test]
    fn lifecycle_follows_pending_executed_settled() {
        let mut trade = pending_trade();
        assert!(trade.can_modify());

        trade.execute().unwrap();
        assert_eq!(trade.status, TradeStatus::Executed);
        assert!(!trade.can_modify());

        trade.settle().unwrap();
        assert_eq!(trade.status, TradeStatus::Settled);
    }

    #[test]
    fn only_pending_trades_execute() {
        let mut trade = pending_trade();
        trade.execute().unwrap();
        assert_eq!(
            trade.execute(),
            Err(TradeError::InvalidTransition {
                from: TradeStatus::Executed,
                to: TradeStatus::Executed,
            })
        );
    }

    #[test]
    fn only_executed_trades_settle() {
        let mut trade = pending_trade();
        assert!(trade.settle().is_err());
    }

    #[test]
    fn settled_trades_cannot_cancel() {
        let mut trade = pending_trade();
        trade.cancel().unwrap();
        assert_eq!(trade.status, TradeStatus::Canceled);

        let mut settled = pending_trade();
        settled.execute().unwrap();
        settled.settle().unwrap();
        assert!(settled.cancel().is_err());
        assert_eq!(settled.status, TradeStatus::Settled);
    }

    #[test]
    fn trade_serializes_with_camel_case_keys() {
        let trade = pending_trade();
        let value = serde_json::to_value(&trade).unwrap();

        assert_eq!(value["side"], json!("BUY"));
        assert_eq!(value["status"], json!("PENDING"));
        assert_eq!(value["symbol"], json!("AAPL"));
        assert_eq!(value["tradeDate"], json!("2025-03-03"));
        assert_eq!(value["settlementDate"], json!("2025-03-05"));
        assert!(value.get("portfolioId").is_some());
        assert!(value.get("totalAmount").is_some());
    }
}
