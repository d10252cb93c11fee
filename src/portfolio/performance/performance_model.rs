use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporting window for a performance series.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "ytd")]
    YearToDate,
}

impl Period {
    /// Parses a period code case-insensitively. Unrecognized codes fall
    /// back to one month rather than erroring.
    pub fn from_code(code: &str) -> Period {
        match code.to_ascii_lowercase().as_str() {
            "3m" => Period::ThreeMonths,
            "6m" => Period::SixMonths,
            "1y" => Period::OneYear,
            "ytd" => Period::YearToDate,
            _ => Period::OneMonth,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
            Period::YearToDate => "ytd",
        }
    }

    /// Window start for a series ending at `end`.
    pub fn start_date(&self, end: NaiveDate) -> NaiveDate {
        match self {
            Period::OneMonth => end.checked_sub_months(Months::new(1)).unwrap_or(end),
            Period::ThreeMonths => end.checked_sub_months(Months::new(3)).unwrap_or(end),
            Period::SixMonths => end.checked_sub_months(Months::new(6)).unwrap_or(end),
            Period::OneYear => end.checked_sub_months(Months::new(12)).unwrap_or(end),
            Period::YearToDate => NaiveDate::from_ymd_opt(end.year(), 1, 1).unwrap_or(end),
        }
    }
}

/// Daily portfolio value series with a synthetic benchmark overlay. All
/// three sequences run one entry per calendar day, start to end inclusive.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceHistory {
    pub portfolio_id: String,
    pub period: String,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Decimal>,
    pub benchmark_values: Vec<f64>,
}
