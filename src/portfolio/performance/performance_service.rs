use chrono::{Duration, NaiveDate, Utc};
use log::debug;
use rand::{thread_rng, Rng, RngCore};

use crate::constants::{BENCHMARK_BASE_VALUE, BENCHMARK_DAILY_DRIFT, BENCHMARK_NOISE_AMPLITUDE};
use crate::errors::Result;
use crate::portfolio::valuation_calculator::value_at_date;
use crate::trades::Trade;

use super::performance_model::{PerformanceHistory, Period};

/// Parameters of the synthetic benchmark series: random drift around a
/// base level, a stand-in until real index data is wired in.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub base_value: f64,
    pub daily_drift: f64,
    pub noise_amplitude: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            base_value: BENCHMARK_BASE_VALUE,
            daily_drift: BENCHMARK_DAILY_DRIFT,
            noise_amplitude: BENCHMARK_NOISE_AMPLITUDE,
        }
    }
}

/// Generates daily portfolio value series over a reporting period.
#[derive(Debug, Clone)]
pub struct PerformanceService {
    benchmark: BenchmarkConfig,
}

impl PerformanceService {
    pub fn new() -> Self {
        PerformanceService {
            benchmark: BenchmarkConfig::default(),
        }
    }

    pub fn with_benchmark(benchmark: BenchmarkConfig) -> Self {
        PerformanceService { benchmark }
    }

    /// Daily value history over `period`, anchored at today.
    pub fn history(
        &self,
        portfolio_id: &str,
        trades: &[Trade],
        period: Period,
    ) -> Result<PerformanceHistory> {
        let end = Utc::now().date_naive();
        self.history_between(
            portfolio_id,
            trades,
            period,
            period.start_date(end),
            end,
            &mut thread_rng(),
        )
    }

    /// Same as [`history`](Self::history) with an explicit window and
    /// random source, which keeps series generation deterministic under
    /// test.
    pub fn history_between(
        &self,
        portfolio_id: &str,
        trades: &[Trade],
        period: Period,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut dyn RngCore,
    ) -> Result<PerformanceHistory> {
        // Only the window's trades participate in the replay.
        let window_trades: Vec<Trade> = trades
            .iter()
            .filter(|trade| trade.trade_date >= start && trade.trade_date <= end)
            .cloned()
            .collect();

        debug!(
            "Generating {} performance series for portfolio {} from {} to {}",
            period.as_str(),
            portfolio_id,
            start,
            end
        );

        let mut dates = Vec::new();
        let mut values = Vec::new();
        let mut day = start;
        while day <= end {
            dates.push(day);
            values.push(value_at_date(&window_trades, day)?);
            day = day + Duration::days(1);
        }

        let benchmark_values = self.benchmark_series(dates.len(), rng);

        Ok(PerformanceHistory {
            portfolio_id: portfolio_id.to_string(),
            period: period.as_str().to_string(),
            dates,
            values,
            benchmark_values,
        })
    }

    /// Synthetic benchmark: the base level compounded daily by the drift,
    /// scaled by uniform noise around 1.0.
    fn benchmark_series(&self, len: usize, rng: &mut dyn RngCore) -> Vec<f64> {
        let mut series = Vec::with_capacity(len);
        let mut level = self.benchmark.base_value;
        for _ in 0..len {
            let random_factor =
                rng.gen_range(-self.benchmark.noise_amplitude..=self.benchmark.noise_amplitude);
            level *= 1.0 + self.benchmark.daily_drift * (1.0 + random_factor);
            series.push(level);
        }
        series
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}
