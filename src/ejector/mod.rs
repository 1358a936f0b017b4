//! 증기 이젝터(열압축기, TVC) 성능 계산 모듈.

pub mod tvc;

pub use tvc::*;
