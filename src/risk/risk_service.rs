use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use num_traits::ToPrimitive;
use rand::{thread_rng, RngCore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{SQRT_TRADING_MONTH, SQRT_TRADING_WEEK};
use crate::errors::{Error, Result, ValidationError};
use crate::holdings::{calculate_holdings, Holding};
use crate::portfolio::{value_holdings, Portfolio};
use crate::trades::Trade;

use super::model_provider::{RiskModelProviderTrait, SyntheticRiskModel};
use super::reference::ReferenceData;
use super::risk_model::{
    ConcentrationEntry, LiquidityRisk, MarketRisk, RiskReport, SectorExposure, ValueAtRisk,
};

/// VaR haircut applied when combining portfolios, a flat stand-in for a
/// correlation-aware diversification benefit.
const DIVERSIFICATION_FACTOR: Decimal = dec!(0.9);

/// Confidence level the VaR baseline is calibrated to.
const BASELINE_CONFIDENCE: Decimal = dec!(95);

/// Risk analytics over a portfolio's trade history. The model provider
/// and classification tables are injected so tests and future real
/// providers can substitute their own.
pub struct RiskService {
    model: Arc<dyn RiskModelProviderTrait>,
    reference: ReferenceData,
}

impl RiskService {
    pub fn new() -> Self {
        Self::with_components(Arc::new(SyntheticRiskModel), ReferenceData::default())
    }

    pub fn with_components(
        model: Arc<dyn RiskModelProviderTrait>,
        reference: ReferenceData,
    ) -> Self {
        RiskService { model, reference }
    }

    /// Full risk profile for one portfolio at the baseline confidence.
    pub fn portfolio_risk(&self, portfolio_id: &str, trades: &[Trade]) -> Result<RiskReport> {
        debug!("Calculating risk report for portfolio {}", portfolio_id);

        let ratios = self.model.ratio_metrics();
        Ok(RiskReport {
            portfolio_id: portfolio_id.to_string(),
            value_at_risk: self.value_at_risk(trades, BASELINE_CONFIDENCE),
            sharpe_ratio: ratios.sharpe_ratio,
            beta: ratios.beta,
            volatility: ratios.volatility,
            drawdown: ratios.drawdown,
            tracking_error: ratios.tracking_error,
            information_ratio: ratios.information_ratio,
            sortino_ratio: ratios.sortino_ratio,
            liquidity_risk: ratios.liquidity_risk,
            stress_test_loss: ratios.stress_test_loss,
        })
    }

    /// VaR per horizon: the provider's baseline adjusted for the
    /// confidence level, scaled by the square root of the horizon's
    /// trading days. The trade history does not move the figure yet.
    pub fn value_at_risk(&self, _trades: &[Trade], confidence_level: Decimal) -> ValueAtRisk {
        let daily =
            self.model.baseline_daily_var() + self.model.confidence_adjustment(confidence_level);

        ValueAtRisk {
            daily,
            weekly: daily * SQRT_TRADING_WEEK,
            monthly: daily * SQRT_TRADING_MONTH,
        }
    }

    /// Market value share per sector, descending. Portfolios with no open
    /// value yield an empty list rather than dividing by zero.
    pub fn sector_exposure(&self, trades: &[Trade]) -> Result<Vec<SectorExposure>> {
        let holdings = calculate_holdings(trades)?;
        let total: Decimal = holdings.values().map(|h| h.market_value).sum();
        if total <= Decimal::ZERO {
            return Ok(Vec::new());
        }

        let mut by_sector: HashMap<String, Decimal> = HashMap::new();
        for holding in holdings.values() {
            let sector = self.reference.sector_of(&holding.symbol);
            *by_sector.entry(sector.to_string()).or_insert(Decimal::ZERO) +=
                holding.market_value;
        }

        let mut exposures: Vec<(String, Decimal)> = by_sector
            .into_iter()
            .map(|(sector, value)| (sector, value / total * Decimal::ONE_HUNDRED))
            .collect();
        exposures.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(exposures
            .into_iter()
            .map(|(sector, exposure)| SectorExposure {
                sector,
                exposure: exposure.to_f64().unwrap_or(0.0),
            })
            .collect())
    }

    /// Position weights and risk contributions, descending by weight.
    pub fn concentration_risk(&self, trades: &[Trade]) -> Result<Vec<ConcentrationEntry>> {
        self.concentration_risk_with_rng(trades, &mut thread_rng())
    }

    /// As [`concentration_risk`](Self::concentration_risk), with the
    /// random source for the per-symbol beta supplied by the caller.
    pub fn concentration_risk_with_rng(
        &self,
        trades: &[Trade],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ConcentrationEntry>> {
        let holdings = calculate_holdings(trades)?;
        let total: Decimal = holdings.values().map(|h| h.market_value).sum();
        if total <= Decimal::ZERO {
            return Ok(Vec::new());
        }
        let holding_count = holdings.len() as f64;

        let mut weighted: Vec<(&Holding, Decimal)> = holdings
            .values()
            .map(|holding| (holding, holding.market_value / total * Decimal::ONE_HUNDRED))
            .collect();
        weighted.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(weighted
            .into_iter()
            .map(|(holding, weight)| {
                let weight = weight.to_f64().unwrap_or(0.0);
                let beta = self.model.position_beta(rng);
                ConcentrationEntry {
                    symbol: holding.symbol.clone(),
                    weight,
                    risk_contribution: weight * beta / holding_count,
                }
            })
            .collect())
    }

    pub fn market_risk(&self, _trades: &[Trade]) -> MarketRisk {
        self.model.market_risk()
    }

    pub fn liquidity_risk(&self, _trades: &[Trade]) -> LiquidityRisk {
        let profile = self.model.liquidity_profile();
        LiquidityRisk {
            overall_risk: profile.overall_risk,
            days_to_liquidate: profile.days_to_liquidate,
            liquidation_cost: profile.liquidation_cost,
            symbol_liquidity: self.reference.liquidity_table().clone(),
        }
    }

    /// Combines portfolio reports into a single report, in input order.
    ///
    /// Sharpe and beta are pairwise-averaged: the running aggregate is
    /// averaged with each next report, so the result depends on input
    /// order. VaR horizons are summed and haircut by the diversification
    /// factor at every step. The portfolio total values ride along in the
    /// contract but do not enter the arithmetic yet.
    pub fn aggregate_risk(&self, reports: &[(RiskReport, Decimal)]) -> Result<RiskReport> {
        let Some(((first, _), rest)) = reports.split_first() else {
            return Err(ValidationError::InvalidInput(
                "no portfolio risk reports to aggregate".to_string(),
            )
            .into());
        };

        let mut aggregated = first.clone();
        for (report, _total_value) in rest {
            aggregated.sharpe_ratio = (aggregated.sharpe_ratio + report.sharpe_ratio) / 2.0;
            aggregated.beta = (aggregated.beta + report.beta) / 2.0;
            aggregated.value_at_risk = ValueAtRisk {
                daily: (aggregated.value_at_risk.daily + report.value_at_risk.daily)
                    * DIVERSIFICATION_FACTOR,
                weekly: (aggregated.value_at_risk.weekly + report.value_at_risk.weekly)
                    * DIVERSIFICATION_FACTOR,
                monthly: (aggregated.value_at_risk.monthly + report.value_at_risk.monthly)
                    * DIVERSIFICATION_FACTOR,
            };
        }
        Ok(aggregated)
    }

    /// Organization-wide risk: every portfolio's report aggregated, with
    /// snapshot total values carried alongside for future value
    /// weighting.
    pub fn organization_risk(
        &self,
        organization_id: &str,
        portfolios: &[(Portfolio, Vec<Trade>)],
    ) -> Result<RiskReport> {
        if portfolios.is_empty() {
            return Err(Error::NotFound(format!(
                "no portfolios found for organization {}",
                organization_id
            )));
        }

        let mut reports = Vec::with_capacity(portfolios.len());
        for (portfolio, trades) in portfolios {
            let report = self.portfolio_risk(&portfolio.id, trades)?;
            let snapshot = value_holdings(&calculate_holdings(trades)?);
            reports.push((report, snapshot.total_value));
        }

        let mut aggregated = self.aggregate_risk(&reports)?;
        aggregated.portfolio_id = organization_id.to_string();
        Ok(aggregated)
    }
}

impl Default for RiskService {
    fn default() -> Self {
        Self::new()
    }
}
