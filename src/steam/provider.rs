use serde::Serialize;
use thiserror::Error;

use super::if97;

/// 증기 물성 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteamPropertyError {
    /// 입력 범위를 벗어남
    #[error("out of range: {0}")]
    OutOfRange(String),
    /// 반복 계산 수렴 실패
    #[error("no convergence: {0}")]
    NoConvergence(String),
    /// 물성식 평가 실패(NaN 등)
    #[error("evaluation failed: {0}")]
    Evaluation(String),
}

/// 계산기가 소비하는 증기 물성 공급자.
///
/// 계산기는 이 trait만 알고 있으므로 테스트에서는 결정적인 표 기반 mock을,
/// 실제 사용에서는 [`If97Steam`]을 주입한다. 모든 메서드는 부작용이 없어야 하며
/// 여러 스레드에서 동시에 호출될 수 있다.
pub trait SteamPropertyProvider: Send + Sync {
    /// 포화압력(bar abs)
    fn saturation_pressure_bar(&self, temperature_c: f64) -> Result<f64, SteamPropertyError>;

    /// 포화온도(°C)
    fn saturation_temperature_c(&self, pressure_bar: f64) -> Result<f64, SteamPropertyError>;

    /// 포화 증기 비엔탈피(kJ/kg)
    fn enthalpy_vapor_kj_kg(&self, temperature_c: f64) -> Result<f64, SteamPropertyError>;

    /// 과열 증기 비엔탈피(kJ/kg)
    fn enthalpy_superheated_kj_kg(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, SteamPropertyError>;

    /// 주어진 압력에서 온도가 포화온도보다 높은지 판정한다.
    fn is_superheated(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<bool, SteamPropertyError> {
        Ok(temperature_c > self.saturation_temperature_c(pressure_bar)?)
    }
}

/// IAPWS 포화선 + IF97 Region 2 기반 기본 공급자.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Steam;

impl SteamPropertyProvider for If97Steam {
    fn saturation_pressure_bar(&self, temperature_c: f64) -> Result<f64, SteamPropertyError> {
        if97::saturation_pressure_bar(temperature_c)
    }

    fn saturation_temperature_c(&self, pressure_bar: f64) -> Result<f64, SteamPropertyError> {
        if97::saturation_temperature_c(pressure_bar)
    }

    fn enthalpy_vapor_kj_kg(&self, temperature_c: f64) -> Result<f64, SteamPropertyError> {
        // 포화선 위의 증기는 Region 2 경계에 해당한다.
        let p_sat = if97::saturation_pressure_bar(temperature_c)?;
        if97::region2_enthalpy_kj_kg(p_sat, temperature_c)
    }

    fn enthalpy_superheated_kj_kg(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, SteamPropertyError> {
        if97::region2_enthalpy_kj_kg(pressure_bar, temperature_c)
    }
}

/// 온도 기준 포화 상태. 호출할 때마다 새로 계산되며 저장하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SaturationState {
    /// 온도(°C)
    pub temperature_c: f64,
    /// 포화압력(bar abs)
    pub saturation_pressure_bar: f64,
    /// 포화 증기 비엔탈피(kJ/kg)
    pub saturated_vapor_enthalpy_kj_kg: f64,
}

/// 온도로부터 포화 상태를 구한다.
pub fn saturation_state<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    temperature_c: f64,
) -> Result<SaturationState, SteamPropertyError> {
    Ok(SaturationState {
        temperature_c,
        saturation_pressure_bar: steam.saturation_pressure_bar(temperature_c)?,
        saturated_vapor_enthalpy_kj_kg: steam.enthalpy_vapor_kj_kg(temperature_c)?,
    })
}
