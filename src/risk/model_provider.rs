use rand::{Rng, RngCore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::risk_model::{MarketRisk, RiskLevel};

/// Fixed ratio metrics reported alongside VaR.
#[derive(Debug, Clone)]
pub struct RatioMetrics {
    pub sharpe_ratio: f64,
    pub beta: f64,
    pub volatility: String,
    pub drawdown: String,
    pub tracking_error: String,
    pub information_ratio: f64,
    pub sortino_ratio: f64,
    pub liquidity_risk: RiskLevel,
    pub stress_test_loss: String,
}

/// Overall liquidity level, days to liquidate, and liquidation cost in
/// percent of portfolio value.
#[derive(Debug, Clone, Copy)]
pub struct LiquidityProfile {
    pub overall_risk: RiskLevel,
    pub days_to_liquidate: f64,
    pub liquidation_cost: f64,
}

/// Source of the model-derived risk figures. The engine folds trade data
/// itself; everything that would need market history or factor models
/// comes through this trait, so a real provider can replace the synthetic
/// one without touching the holdings math or any call site.
pub trait RiskModelProviderTrait: Send + Sync {
    /// One-day VaR fraction at the 95% confidence baseline.
    fn baseline_daily_var(&self) -> Decimal;

    /// Additive daily-VaR adjustment for a confidence level away from 95.
    fn confidence_adjustment(&self, confidence_level: Decimal) -> Decimal;

    fn ratio_metrics(&self) -> RatioMetrics;

    /// Per-symbol beta used for concentration risk contributions.
    fn position_beta(&self, rng: &mut dyn RngCore) -> f64;

    fn market_risk(&self) -> MarketRisk;

    fn liquidity_profile(&self) -> LiquidityProfile;
}

const EXPECTED_ANNUAL_RETURN: f64 = 0.08;
const RISK_FREE_RATE: f64 = 0.02;
const ANNUAL_VOLATILITY: f64 = 0.15;

/// Illustrative constants standing in for a statistical risk model.
#[derive(Debug, Default, Clone)]
pub struct SyntheticRiskModel;

impl RiskModelProviderTrait for SyntheticRiskModel {
    fn baseline_daily_var(&self) -> Decimal {
        dec!(0.032)
    }

    fn confidence_adjustment(&self, confidence_level: Decimal) -> Decimal {
        (confidence_level - dec!(95)) * dec!(0.0008)
    }

    fn ratio_metrics(&self) -> RatioMetrics {
        RatioMetrics {
            sharpe_ratio: (EXPECTED_ANNUAL_RETURN - RISK_FREE_RATE) / ANNUAL_VOLATILITY,
            beta: 1.15,
            volatility: "15.0%".to_string(),
            drawdown: "8.5%".to_string(),
            tracking_error: "3.2%".to_string(),
            information_ratio: 0.85,
            sortino_ratio: 1.25,
            liquidity_risk: RiskLevel::Low,
            stress_test_loss: "12.5%".to_string(),
        }
    }

    fn position_beta(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen_range(1.0..=1.5)
    }

    fn market_risk(&self) -> MarketRisk {
        MarketRisk {
            beta: 1.15,
            interest_rate_sensitivity: 0.25,
            currency_risk: RiskLevel::Low,
            commodity_exposure: RiskLevel::Medium,
        }
    }

    fn liquidity_profile(&self) -> LiquidityProfile {
        LiquidityProfile {
            overall_risk: RiskLevel::Low,
            days_to_liquidate: 2.5,
            liquidation_cost: 0.8,
        }
    }
}
