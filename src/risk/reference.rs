use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fallback sector for symbols missing from the classification table.
pub const OTHER_SECTOR: &str = "Other";

/// Coarse liquidity classification of a symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidityTier {
    High,
    Medium,
    Low,
}

/// Static classification tables injected into the risk service. A real
/// deployment would source these from a market-data feed; the defaults
/// cover a handful of example tickers.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    sectors: HashMap<String, String>,
    liquidity: HashMap<String, LiquidityTier>,
}

impl ReferenceData {
    pub fn new(
        sectors: HashMap<String, String>,
        liquidity: HashMap<String, LiquidityTier>,
    ) -> Self {
        ReferenceData { sectors, liquidity }
    }

    /// Sector for a symbol, falling back to [`OTHER_SECTOR`] for anything
    /// unmapped.
    pub fn sector_of(&self, symbol: &str) -> &str {
        self.sectors
            .get(symbol)
            .map(String::as_str)
            .unwrap_or(OTHER_SECTOR)
    }

    pub fn liquidity_table(&self) -> &HashMap<String, LiquidityTier> {
        &self.liquidity
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        let sectors = [
            ("AAPL", "Technology"),
            ("MSFT", "Technology"),
            ("GOOGL", "Technology"),
            ("AMZN", "Consumer"),
            ("TSLA", "Automotive"),
            ("JPM", "Financial"),
            ("BAC", "Financial"),
            ("PFE", "Healthcare"),
            ("JNJ", "Healthcare"),
            ("XOM", "Energy"),
        ]
        .into_iter()
        .map(|(symbol, sector)| (symbol.to_string(), sector.to_string()))
        .collect();

        let liquidity = [
            ("AAPL", LiquidityTier::High),
            ("MSFT", LiquidityTier::High),
            ("GOOGL", LiquidityTier::High),
            ("AMZN", LiquidityTier::High),
            ("TSLA", LiquidityTier::Medium),
        ]
        .into_iter()
        .map(|(symbol, tier)| (symbol.to_string(), tier))
        .collect();

        ReferenceData { sectors, liquidity }
    }
}
