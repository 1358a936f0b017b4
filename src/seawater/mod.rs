//! 해수 관련 계산 모듈 모음.

pub mod dissolved_gas;

pub use dissolved_gas::*;
