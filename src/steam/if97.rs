//! IAPWS 포화선 식과 seuif97 크레이트(Region 2)를 감싼 저수준 함수.
//! 입력: 압력(bar, 절대), 온도(°C)
//! 출력: 압력(bar abs), 온도(°C), 엔탈피(kJ/kg)

use seuif97::{pt, OH};

use super::SteamPropertyError;

// ---------------- 포화선 (Wagner-Pruss 형태) ----------------
const P_CRIT_MPA: f64 = 22.064;
const T_CRIT_K: f64 = 647.096;
const T_TRIPLE_K: f64 = 273.16;
const P_TRIPLE_BAR: f64 = 0.006_116_57;
const SAT_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

/// Region 2 유효 상한 온도(°C).
const REGION2_T_MAX_C: f64 = 800.0;

fn kelvin(t_c: f64) -> f64 {
    t_c + 273.15
}

/// Σ nᵢ·θ^eᵢ 와 그 θ-미분을 함께 돌려준다.
fn sat_series(theta: f64) -> (f64, f64) {
    let sum = SAT_N[0] * theta
        + SAT_N[1] * theta.powf(1.5)
        + SAT_N[2] * theta.powi(3)
        + SAT_N[3] * theta.powf(3.5)
        + SAT_N[4] * theta.powi(4)
        + SAT_N[5] * theta.powf(7.5);
    let d_sum = SAT_N[0]
        + 1.5 * SAT_N[1] * theta.powf(0.5)
        + 3.0 * SAT_N[2] * theta.powi(2)
        + 3.5 * SAT_N[3] * theta.powf(2.5)
        + 4.0 * SAT_N[4] * theta.powi(3)
        + 7.5 * SAT_N[5] * theta.powf(6.5);
    (sum, d_sum)
}

/// 포화압력(bar abs) - 입력 온도는 °C.
pub fn saturation_pressure_bar(t_c: f64) -> Result<f64, SteamPropertyError> {
    let t_k = kelvin(t_c);
    if !t_k.is_finite() || t_k < 273.15 || t_k > T_CRIT_K {
        return Err(SteamPropertyError::OutOfRange(format!(
            "saturation temperature {t_c} °C outside 0~373.946 °C"
        )));
    }
    let theta = 1.0 - t_k / T_CRIT_K;
    let (sum, _) = sat_series(theta);
    let p_mpa = P_CRIT_MPA * ((T_CRIT_K / t_k) * sum).exp();
    Ok(p_mpa * 10.0)
}

/// 포화온도(°C) - 입력 압력은 bar abs. 포화압 식을 뉴턴법으로 역산한다.
pub fn saturation_temperature_c(p_bar: f64) -> Result<f64, SteamPropertyError> {
    if !p_bar.is_finite() || p_bar < P_TRIPLE_BAR || p_bar > P_CRIT_MPA * 10.0 {
        return Err(SteamPropertyError::OutOfRange(format!(
            "saturation pressure {p_bar} bar outside {P_TRIPLE_BAR}~220.64 bar"
        )));
    }
    let target = (p_bar / 10.0 / P_CRIT_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..50 {
        let theta = 1.0 - t_k / T_CRIT_K;
        let (sum, d_sum) = sat_series(theta);
        let f = (T_CRIT_K / t_k) * sum - target;
        // d/dT [(Tc/T)·Σ] = -(Tc/T²)·Σ + (Tc/T)·Σ'·(-1/Tc)
        let df_dt = -(T_CRIT_K / t_k.powi(2)) * sum - d_sum / t_k;
        let delta = f / df_dt;
        t_k = (t_k - delta).clamp(T_TRIPLE_K - 0.01, T_CRIT_K);
        if delta.abs() < 1e-10 {
            return Ok(t_k - 273.15);
        }
    }
    Err(SteamPropertyError::NoConvergence(format!(
        "saturation temperature at {p_bar} bar"
    )))
}

/// Region 2 강제 계산 비엔탈피(kJ/kg). 입력은 bar(abs)/°C.
pub fn region2_enthalpy_kj_kg(p_bar: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
    if p_bar.is_nan() || p_bar <= 0.0 || !t_c.is_finite() || t_c > REGION2_T_MAX_C {
        return Err(SteamPropertyError::OutOfRange(format!(
            "vapour state P={p_bar} bar, T={t_c} °C outside IF97 Region 2"
        )));
    }
    let h = pt(p_bar / 10.0, t_c, (OH, 2));
    if h.is_nan() {
        return Err(SteamPropertyError::Evaluation(format!(
            "IF97 Region 2 enthalpy at P={p_bar} bar, T={t_c} °C"
        )));
    }
    Ok(h)
}
