pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;
pub mod risk;
pub mod trades;

pub use holdings::*;
pub use portfolio::*;
pub use risk::*;
pub use trades::*;
