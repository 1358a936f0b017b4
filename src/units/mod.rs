//! CLI 입력 단위를 계산기 기준 단위(bar abs, °C)로 바꾸는 모듈.

pub mod pressure;
pub mod temperature;

pub use pressure::{from_bar_abs, to_bar_abs, PressureUnit};
pub use temperature::{from_celsius, to_celsius, TemperatureUnit};
