use serde::Serialize;
use tracing::debug;

/// STP 몰부피(L/mol)
const MOLAR_VOLUME_STP_L: f64 = 22.414;
const O2_MOLAR_MASS: f64 = 32.0;
const N2_MOLAR_MASS: f64 = 28.014;

/// Weiss 식이 검증된 온도 범위(°C). 범위 밖은 계산은 하되 외삽으로 표시한다.
pub const FIT_MIN_TEMPERATURE_C: f64 = 0.0;
pub const FIT_MAX_TEMPERATURE_C: f64 = 36.0;

/// Weiss (1970) 용해도 계수. 결과 단위는 mL(STP)/L, 염분은 g/kg.
#[derive(Debug, Clone, Copy)]
struct WeissCoefficients {
    a: [f64; 4],
    b: [f64; 3],
}

const O2_WEISS: WeissCoefficients = WeissCoefficients {
    a: [-173.4292, 249.6339, 143.3483, -21.8492],
    b: [-0.033_096, 0.014_259, -0.001_700_0],
};

const N2_WEISS: WeissCoefficients = WeissCoefficients {
    a: [-172.4965, 248.4262, 143.0738, -21.7120],
    b: [-0.049_781, 0.025_018, -0.003_486_1],
};

impl WeissCoefficients {
    /// ln C = A1 + A2(100/T) + A3 ln(T/100) + A4(T/100) + S[B1 + B2(T/100) + B3(T/100)²]
    fn solubility_ml_l(&self, temperature_c: f64, salinity_g_kg: f64) -> f64 {
        let tt = (temperature_c + 273.15) / 100.0;
        let [a1, a2, a3, a4] = self.a;
        let [b1, b2, b3] = self.b;
        let ln_c = a1
            + a2 / tt
            + a3 * tt.ln()
            + a4 * tt
            + salinity_g_kg * (b1 + b2 * tt + b3 * tt * tt);
        ln_c.exp()
    }
}

/// 해수 용존가스(O₂, N₂) 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DissolvedGasResult {
    /// 평형 온도(°C)
    pub temperature_c: f64,
    /// 염분(g/kg)
    pub salinity_g_kg: f64,
    /// 용존 산소 [mL(STP)/L]
    pub o2_ml_l: f64,
    /// 용존 질소 [mL(STP)/L]
    pub n2_ml_l: f64,
    /// 용존 산소 [mg/L]
    pub o2_mg_l: f64,
    /// 용존 질소 [mg/L]
    pub n2_mg_l: f64,
    /// O₂ + N₂ [mg/L]
    pub total_gas_mg_l: f64,
    /// Weiss 식 검증 범위(0~36°C) 밖에서 외삽했는지 여부
    pub extrapolated: bool,
}

/// 대기 평형 해수의 O₂/N₂ 용존량을 Weiss (1970) 식으로 추정한다.
///
/// 어떤 유한한 온도·염분도 받아들이며 오류를 내지 않는다. 검증 범위 밖이면
/// `extrapolated`만 `true`로 표시한다.
pub fn dissolved_gas_content(temperature_c: f64, salinity_g_kg: f64) -> DissolvedGasResult {
    let extrapolated =
        !(FIT_MIN_TEMPERATURE_C..=FIT_MAX_TEMPERATURE_C).contains(&temperature_c);
    if extrapolated {
        debug!(temperature_c, "Weiss solubility extrapolated outside 0-36 °C");
    }

    let o2_ml_l = O2_WEISS.solubility_ml_l(temperature_c, salinity_g_kg);
    let n2_ml_l = N2_WEISS.solubility_ml_l(temperature_c, salinity_g_kg);
    let o2_mg_l = o2_ml_l * O2_MOLAR_MASS / MOLAR_VOLUME_STP_L;
    let n2_mg_l = n2_ml_l * N2_MOLAR_MASS / MOLAR_VOLUME_STP_L;

    DissolvedGasResult {
        temperature_c,
        salinity_g_kg,
        o2_ml_l,
        n2_ml_l,
        o2_mg_l,
        n2_mg_l,
        total_gas_mg_l: o2_mg_l + n2_mg_l,
        extrapolated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seawater_at_25c_matches_published_saturation() {
        // 25°C, S=35 에서 O₂ ≈ 4.73 mL/L, N₂ ≈ 8.79 mL/L
        let r = dissolved_gas_content(25.0, 35.0);
        assert_relative_eq!(r.o2_ml_l, 4.73, max_relative = 0.01);
        assert_relative_eq!(r.n2_ml_l, 8.79, max_relative = 0.01);
        assert!(!r.extrapolated);
    }

    #[test]
    fn extrapolation_flag_edges() {
        assert!(!dissolved_gas_content(0.0, 35.0).extrapolated);
        assert!(!dissolved_gas_content(36.0, 35.0).extrapolated);
        assert!(dissolved_gas_content(36.5, 35.0).extrapolated);
        assert!(dissolved_gas_content(-1.0, 35.0).extrapolated);
    }
}
