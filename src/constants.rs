use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Commission rate applied to the gross value of a trade
pub const COMMISSION_RATE: Decimal = dec!(0.005);

/// Minimum commission charged per trade
pub const MIN_COMMISSION: Decimal = dec!(1.00);

/// Regular-way settlement lag in calendar days (T+2)
pub const SETTLEMENT_LAG_DAYS: i64 = 2;

/// sqrt(5), scales daily VaR to a 5-trading-day week
pub const SQRT_TRADING_WEEK: Decimal = dec!(2.2360679775);

/// sqrt(21), scales daily VaR to a 21-trading-day month
pub const SQRT_TRADING_MONTH: Decimal = dec!(4.5825756950);

/// Starting level of the synthetic benchmark series
pub const BENCHMARK_BASE_VALUE: f64 = 100.0;

/// Average daily drift of the synthetic benchmark
pub const BENCHMARK_DAILY_DRIFT: f64 = 0.0005;

/// Amplitude of the uniform noise applied to the benchmark drift
pub const BENCHMARK_NOISE_AMPLITUDE: f64 = 0.001;
