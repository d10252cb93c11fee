use chrono::{Duration, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::{COMMISSION_RATE, MIN_COMMISSION, SETTLEMENT_LAG_DAYS};

use super::trades_errors::TradeError;
use super::trades_model::{NewTrade, Trade, TradeSide, TradeStatus};

/// Commission charged on a fill: a flat rate on gross value with a floor.
pub fn calculate_commission(quantity: i64, price: Decimal) -> Decimal {
    let commission = Decimal::from(quantity) * price * COMMISSION_RATE;
    commission.max(MIN_COMMISSION)
}

/// Regular-way settlement date, T+2 in calendar days.
pub fn settlement_date(trade_date: NaiveDate) -> NaiveDate {
    trade_date + Duration::days(SETTLEMENT_LAG_DAYS)
}

/// Total cash amount of a trade: buys pay the commission on top of the
/// gross value, sells have it deducted from the proceeds.
pub fn total_amount(side: TradeSide, quantity: i64, price: Decimal, commission: Decimal) -> Decimal {
    let gross = Decimal::from(quantity) * price;
    match side {
        TradeSide::Buy => gross + commission,
        TradeSide::Sell => gross - commission,
    }
}

/// Builds a bookable trade from request input. The symbol is normalized to
/// upper case, and commission, settlement date and total amount are derived
/// here so the valuation calculators can trust them downstream.
pub fn build_trade(new_trade: NewTrade) -> Result<Trade, TradeError> {
    new_trade.validate()?;

    let commission = calculate_commission(new_trade.quantity, new_trade.price);
    debug!(
        "Booking {} {} {} @ {}",
        new_trade.side, new_trade.quantity, new_trade.symbol, new_trade.price
    );

    Ok(Trade {
        id: Uuid::new_v4().to_string(),
        portfolio_id: new_trade.portfolio_id,
        symbol: new_trade.symbol.trim().to_uppercase(),
        side: new_trade.side,
        quantity: new_trade.quantity,
        price: new_trade.price,
        commission: Some(commission),
        trade_date: new_trade.trade_date,
        settlement_date: settlement_date(new_trade.trade_date),
        status: TradeStatus::Pending,
        total_amount: total_amount(
            new_trade.side,
            new_trade.quantity,
            new_trade.price,
            commission,
        ),
        notes: new_trade.notes,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn new_trade(symbol: &str, side: TradeSide, quantity: i64, price: Decimal) -> NewTrade {
        NewTrade {
            portfolio_id: "pf-1".to_string(),
            symbol: symbol.to_string(),
            side,
            quantity,
            price,
            trade_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn commission_is_half_a_percent_of_gross_value() {
        assert_eq!(calculate_commission(10, dec!(100)), dec!(5.000));
        assert_eq!(calculate_commission(200, dec!(50)), dec!(50.000));
    }

    #[test]
    fn commission_floors_at_one_dollar() {
        assert_eq!(calculate_commission(1, dec!(10)), dec!(1.00));
    }

    #[test]
    fn settlement_is_two_calendar_days_after_trade() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(
            settlement_date(monday),
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
        );
    }

    #[test]
    fn total_amount_adds_commission_on_buys_and_deducts_on_sells() {
        assert_eq!(
            total_amount(TradeSide::Buy, 10, dec!(100), dec!(5)),
            dec!(1005)
        );
        assert_eq!(
            total_amount(TradeSide::Sell, 10, dec!(100), dec!(5)),
            dec!(995)
        );
    }

    #[test]
    fn build_trade_normalizes_symbol_and_derives_fields() {
        let trade = build_trade(new_trade(" msft ", TradeSide::Buy, 10, dec!(100))).unwrap();

        assert_eq!(trade.symbol, "MSFT");
        assert_eq!(trade.status, TradeStatus::Pending);
        assert_eq!(trade.commission, Some(dec!(5.000)));
        assert_eq!(
            trade.settlement_date,
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
        );
        assert_eq!(trade.total_amount, dec!(1005.000));
    }

    #[test]
    fn build_trade_rejects_malformed_input() {
        assert_eq!(
            build_trade(new_trade("  ", TradeSide::Buy, 10, dec!(100))),
            Err(TradeError::EmptySymbol)
        );
        assert_eq!(
            build_trade(new_trade("AAPL", TradeSide::Buy, 0, dec!(100))),
            Err(TradeError::InvalidQuantity(0))
        );
        assert_eq!(
            build_trade(new_trade("AAPL", TradeSide::Sell, 10, dec!(-1))),
            Err(TradeError::InvalidPrice(dec!(-1)))
        );
    }
}
