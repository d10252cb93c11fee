use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reference::LiquidityTier;

/// Qualitative risk level used across the placeholder metrics.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Estimated maximum loss fraction per horizon at the requested
/// confidence level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueAtRisk {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
}

/// Full risk profile of one portfolio. Everything outside the VaR block
/// comes from the model provider and is illustrative until a real
/// analytics backend is plugged in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub portfolio_id: String,
    pub value_at_risk: ValueAtRisk,
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

/// Share of portfolio market value attributed to one sector, in percent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorExposure {
    pub sector: String,
    pub exposure: f64,
}

/// Weight of one position and its contribution to portfolio risk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationEntry {
    pub symbol: String,
    pub weight: f64,
    pub risk_contribution: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketRisk {
    pub beta: f64,
    pub interest_rate_sensitivity: f64,
    pub currency_risk: RiskLevel,
    pub commodity_exposure: RiskLevel,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityRisk {
    pub overall_risk: RiskLevel,
    /// Days to unwind the whole book under normal volumes.
    pub days_to_liquidate: f64,
    /// Cost of a full liquidation, in percent of portfolio value.
    pub liquidation_cost: f64,
    pub symbol_liquidity: HashMap<String, LiquidityTier>,
}
