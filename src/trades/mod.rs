pub mod trades_errors;
pub mod trades_model;
pub mod trades_service;

pub use trades_errors::*;
pub use trades_model::*;
pub use trades_service::*;
