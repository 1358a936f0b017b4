//! 증기 물성 공급자와 IF97 기반 기본 구현.

pub mod if97;
pub mod provider;

pub use provider::*;
