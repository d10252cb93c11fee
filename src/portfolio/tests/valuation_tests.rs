use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::holdings::calculate_holdings;
use crate::portfolio::{holdings_report, value_at_date, value_holdings, PortfolioSnapshot};
use crate::trades::{Trade, TradeSide, TradeStatus};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn trade(symbol: &str, side: TradeSide, quantity: i64, price: Decimal, trade_date: &str) -> Trade {
    let trade_date = date(trade_date);
    Trade {
        id: format!("{}-{}-{}-{}", symbol, side, quantity, trade_date),
        portfolio_id: "pf-1".to_string(),
        symbol: symbol.to_string(),
        side,
        quantity,
        price,
        commission: None,
        trade_date,
        settlement_date: trade_date,
        status: TradeStatus::Executed,
        total_amount: price * Decimal::from(quantity),
        notes: None,
    }
}

#[test]
fn snapshot_sums_market_value_and_cost_across_symbols() {
    let trades = vec![
        trade("AAPL", TradeSide::Buy, 10, dec!(100), "2025-01-02"),
        trade("MSFT", TradeSide::Buy, 5, dec!(200), "2025-01-03"),
    ];

    let holdings = calculate_holdings(&trades).unwrap();
    let snapshot = value_holdings(&holdings);

    let expected_value: Decimal = holdings.values().map(|h| h.market_value).sum();
    assert_eq!(snapshot.total_value, expected_value);
    assert_eq!(snapshot.total_value, dec!(2000));
    assert_eq!(snapshot.total_cost, dec!(2000));
    assert_eq!(snapshot.profit_loss, Decimal::ZERO);
}

#[test]
fn empty_holdings_value_to_a_zero_snapshot() {
    let holdings = calculate_holdings(&[]).unwrap();
    assert_eq!(value_holdings(&holdings), PortfolioSnapshot::zero());
}

#[test]
fn fully_closed_portfolio_values_to_zero() {
    let trades = vec![
        trade("AAPL", TradeSide::Buy, 10, dec!(100), "2025-01-02"),
        trade("AAPL", TradeSide::Sell, 10, dec!(150), "2025-01-10"),
    ];

    let holdings = calculate_holdings(&trades).unwrap();
    assert_eq!(value_holdings(&holdings), PortfolioSnapshot::zero());
}

#[test]
fn value_at_date_ignores_later_trades() {
    let trades = vec![
        trade("AAPL", TradeSide::Buy, 10, dec!(100), "2025-01-10"),
        trade("AAPL", TradeSide::Buy, 10, dec!(200), "2025-02-10"),
    ];

    assert_eq!(
        value_at_date(&trades, date("2025-01-31")).unwrap(),
        dec!(1000)
    );
    assert_eq!(
        value_at_date(&trades, date("2025-02-28")).unwrap(),
        dec!(4000)
    );
    assert_eq!(
        value_at_date(&trades, date("2024-12-31")).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn holdings_report_carries_totals_and_percent() {
    let trades = vec![
        trade("AAPL", TradeSide::Buy, 10, dec!(100), "2025-01-02"),
        trade("AAPL", TradeSide::Buy, 10, dec!(120), "2025-01-03"),
        trade("MSFT", TradeSide::Buy, 5, dec!(200), "2025-01-03"),
    ];

    let report = holdings_report(&trades).unwrap();

    assert_eq!(report.holdings.len(), 2);
    // Sorted by symbol for stable output.
    assert_eq!(report.holdings[0].symbol, "AAPL");
    assert_eq!(report.holdings[1].symbol, "MSFT");

    assert_eq!(report.total_market_value, dec!(3400));
    assert_eq!(report.total_cost, dec!(3200));
    assert_eq!(report.total_profit_loss, dec!(200));
    assert_eq!(
        report.profit_loss_percent,
        dec!(200) / dec!(3200) * Decimal::ONE_HUNDRED
    );
}

#[test]
fn holdings_report_percent_is_zero_without_cost() {
    let report = holdings_report(&[]).unwrap();
    assert_eq!(report.profit_loss_percent, Decimal::ZERO);
    assert!(report.holdings.is_empty());
}
