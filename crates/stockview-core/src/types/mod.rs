//! 공통 타입.

pub mod decimal;
pub mod stock_code;

pub use decimal::*;
pub use stock_code::*;
