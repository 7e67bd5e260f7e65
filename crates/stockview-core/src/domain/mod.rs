//! 도메인 모델.

pub mod company;
pub mod market_data;

pub use company::*;
pub use market_data::*;
