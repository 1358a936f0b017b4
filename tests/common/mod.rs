//! 통합 테스트 공용 도우미: 표 기반 결정적 증기 물성 mock과 근사 비교.
#![allow(dead_code)]

use desal_thermal_toolbox::steam::{SteamPropertyError, SteamPropertyProvider};

pub fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// (T °C, Psat bar, hg kJ/kg). 증기표 값을 반올림한 것.
const TABLE: [(f64, f64, f64); 21] = [
    (0.0, 0.006112, 2500.9),
    (10.0, 0.012282, 2519.2),
    (20.0, 0.023393, 2537.4),
    (25.0, 0.031699, 2546.5),
    (30.0, 0.042470, 2555.6),
    (40.0, 0.073844, 2573.5),
    (50.0, 0.12352, 2591.3),
    (60.0, 0.19946, 2608.8),
    (70.0, 0.31201, 2626.1),
    (80.0, 0.47416, 2643.0),
    (81.32, 0.5, 2645.2),
    (90.0, 0.70182, 2659.5),
    (99.61, 1.0, 2674.9),
    (100.0, 1.01418, 2675.6),
    (120.0, 1.9867, 2705.9),
    (150.0, 4.7616, 2745.9),
    (179.88, 10.0, 2777.1),
    (200.0, 15.549, 2792.0),
    (250.0, 39.762, 2802.0),
    (300.0, 85.879, 2749.6),
    (350.0, 165.29, 2563.6),
];

/// 과열 구간의 고정 비열(kJ/kg·K)
pub const MOCK_SUPERHEAT_CP: f64 = 2.0;

/// 구간마다 ln P가 T에 선형이므로 포화압/포화온도가 서로 정확한 역함수가 된다.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSteam;

fn segment_by_t(t: f64) -> Result<usize, SteamPropertyError> {
    if !(TABLE[0].0..=TABLE[TABLE.len() - 1].0).contains(&t) {
        return Err(SteamPropertyError::OutOfRange(format!("mock T={t} °C")));
    }
    Ok(TABLE
        .windows(2)
        .position(|w| t <= w[1].0)
        .unwrap_or(TABLE.len() - 2))
}

fn segment_by_p(p: f64) -> Result<usize, SteamPropertyError> {
    if !(TABLE[0].1..=TABLE[TABLE.len() - 1].1).contains(&p) {
        return Err(SteamPropertyError::OutOfRange(format!("mock P={p} bar")));
    }
    Ok(TABLE
        .windows(2)
        .position(|w| p <= w[1].1)
        .unwrap_or(TABLE.len() - 2))
}

impl SteamPropertyProvider for MockSteam {
    fn saturation_pressure_bar(&self, temperature_c: f64) -> Result<f64, SteamPropertyError> {
        let i = segment_by_t(temperature_c)?;
        let (t0, p0, _) = TABLE[i];
        let (t1, p1, _) = TABLE[i + 1];
        let f = (temperature_c - t0) / (t1 - t0);
        Ok((p0.ln() + f * (p1.ln() - p0.ln())).exp())
    }

    fn saturation_temperature_c(&self, pressure_bar: f64) -> Result<f64, SteamPropertyError> {
        let i = segment_by_p(pressure_bar)?;
        let (t0, p0, _) = TABLE[i];
        let (t1, p1, _) = TABLE[i + 1];
        let f = (pressure_bar.ln() - p0.ln()) / (p1.ln() - p0.ln());
        Ok(t0 + f * (t1 - t0))
    }

    fn enthalpy_vapor_kj_kg(&self, temperature_c: f64) -> Result<f64, SteamPropertyError> {
        let i = segment_by_t(temperature_c)?;
        let (t0, _, h0) = TABLE[i];
        let (t1, _, h1) = TABLE[i + 1];
        Ok(h0 + (temperature_c - t0) / (t1 - t0) * (h1 - h0))
    }

    fn enthalpy_superheated_kj_kg(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, SteamPropertyError> {
        let t_sat = self.saturation_temperature_c(pressure_bar)?;
        Ok(self.enthalpy_vapor_kj_kg(t_sat)? + MOCK_SUPERHEAT_CP * (temperature_c - t_sat))
    }
}

