pub mod performance;
pub mod portfolio_model;
pub mod valuation_calculator;

#[cfg(test)]
mod tests;

pub use performance::*;
pub use portfolio_model::*;
pub use valuation_calculator::*;
