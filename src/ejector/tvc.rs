//! 1차원 정압 혼합 모델(Huang 1999 계열)로 TVC 성능을 계산한다.
//!
//! Ra_theo = (h_m − h_d,sat) / (h_d,sat − h_s) 는 토출 포화엔탈피까지의 무손실 에너지수지 한계이고,
//! 실제 흡입비는 노즐·혼합·디퓨저 효율과 압축비 보정 f(CR) = exp(−k·(CR−1)) 을 곱해 얻는다.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::steam::SteamPropertyProvider;
use crate::validation::{self, CalcError, CalcResult};

/// 토출 온도 역산 시 포화온도 위로 탐색하는 최대 폭(K)
const DISCHARGE_SEARCH_SPAN_K: f64 = 400.0;

/// 주어진 유량(어느 쪽이 주어졌는지가 곧 계산 방향).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TvcFlow {
    /// 흡입(피동) 증기 유량 [kg/h]
    Entrained(f64),
    /// 구동 증기 유량 [kg/h]
    Motive(f64),
}

/// TVC 계산 입력. 압력은 모두 bar(abs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvcInput {
    pub motive_pressure_bar: f64,
    pub suction_pressure_bar: f64,
    pub discharge_pressure_bar: f64,
    pub flow: TvcFlow,
    /// 구동 증기 온도(°C). `None`이면 포화 증기로 본다.
    #[serde(default)]
    pub motive_temperature_c: Option<f64>,
    #[serde(default)]
    pub nozzle_efficiency: Option<f64>,
    #[serde(default)]
    pub mixing_efficiency: Option<f64>,
    #[serde(default)]
    pub diffuser_efficiency: Option<f64>,
}

/// 효율 기본값과 한계·경고 기준. config.toml의 `[tvc]` 절로 바꿀 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvcSettings {
    pub nozzle_efficiency: f64,
    pub mixing_efficiency: f64,
    pub diffuser_efficiency: f64,
    /// f(CR) = exp(−k·(CR−1)) 의 k
    pub compression_loss_coefficient: f64,
    /// 단단 이젝터 압축비 한계(초과 시 오류)
    pub max_compression_ratio: f64,
    /// 압축비 경고 기준
    pub warn_compression_ratio: f64,
    /// 흡입비 경고 기준
    pub min_entrainment_ratio: f64,
    /// 토출 과열도 권장 범위(K)
    pub min_discharge_superheat_k: f64,
    pub max_discharge_superheat_k: f64,
}

impl Default for TvcSettings {
    fn default() -> Self {
        Self {
            nozzle_efficiency: 0.92,
            mixing_efficiency: 0.85,
            diffuser_efficiency: 0.78,
            compression_loss_coefficient: 0.15,
            max_compression_ratio: 2.5,
            warn_compression_ratio: 2.2,
            min_entrainment_ratio: 0.1,
            min_discharge_superheat_k: 1.0,
            max_discharge_superheat_k: 50.0,
        }
    }
}

impl TvcSettings {
    /// 설정값 자체의 유효성을 검사한다. config.toml에서 읽은 값도 여기서 걸러진다.
    pub fn validate(&self) -> CalcResult<()> {
        validation::ensure_efficiency("default nozzle efficiency", self.nozzle_efficiency)?;
        validation::ensure_efficiency("default mixing efficiency", self.mixing_efficiency)?;
        validation::ensure_efficiency("default diffuser efficiency", self.diffuser_efficiency)?;
        validation::ensure_non_negative(
            "compression loss coefficient",
            self.compression_loss_coefficient,
        )?;
        let warn_cr =
            validation::ensure_finite("warning compression ratio", self.warn_compression_ratio)?;
        let max_cr = validation::ensure_finite("max compression ratio", self.max_compression_ratio)?;
        if warn_cr <= 1.0 || max_cr < warn_cr {
            return Err(CalcError::range(
                "compression ratio limits",
                format!("need max ({max_cr}) >= warning ({warn_cr}) > 1"),
            ));
        }
        validation::ensure_non_negative("min entrainment ratio", self.min_entrainment_ratio)?;
        let lo = validation::ensure_non_negative(
            "min discharge superheat",
            self.min_discharge_superheat_k,
        )?;
        let hi = validation::ensure_finite(
            "max discharge superheat",
            self.max_discharge_superheat_k,
        )?;
        if hi < lo {
            return Err(CalcError::range(
                "discharge superheat band",
                format!("max {hi} K is below min {lo} K"),
            ));
        }
        Ok(())
    }
}

/// TVC 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvcResult {
    /// Pd / Ps
    pub compression_ratio: f64,
    /// Pm / Ps
    pub expansion_ratio: f64,
    pub theoretical_entrainment_ratio: f64,
    /// 실제 흡입비(흡입 유량 / 구동 유량)
    pub entrainment_ratio: f64,
    pub ejector_efficiency: f64,
    pub motive_saturation_temperature_c: f64,
    pub suction_saturation_temperature_c: f64,
    pub discharge_saturation_temperature_c: f64,
    /// 구동 증기가 과열 상태로 주어졌는지 여부
    pub motive_superheated: bool,
    pub motive_enthalpy_kj_kg: f64,
    pub suction_enthalpy_kj_kg: f64,
    pub discharge_enthalpy_kj_kg: f64,
    pub discharge_temperature_c: f64,
    pub discharge_superheat_k: f64,
    pub motive_flow_kg_h: f64,
    pub entrained_flow_kg_h: f64,
    pub discharge_flow_kg_h: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 기본 설정으로 TVC 성능을 계산한다.
pub fn calculate_tvc<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    input: &TvcInput,
) -> CalcResult<TvcResult> {
    calculate_tvc_with(steam, input, &TvcSettings::default())
}

/// 지정한 설정으로 TVC 성능을 계산한다.
pub fn calculate_tvc_with<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    input: &TvcInput,
    settings: &TvcSettings,
) -> CalcResult<TvcResult> {
    settings.validate()?;
    let p_m = validation::ensure_positive("motive pressure", input.motive_pressure_bar)?;
    let p_s = validation::ensure_positive("suction pressure", input.suction_pressure_bar)?;
    let p_d = validation::ensure_positive("discharge pressure", input.discharge_pressure_bar)?;
    if p_m <= p_d {
        return Err(CalcError::range(
            "motive pressure",
            format!("{p_m} bar must exceed the discharge pressure {p_d} bar"),
        ));
    }
    if p_d <= p_s {
        return Err(CalcError::range(
            "discharge pressure",
            format!("{p_d} bar must exceed the suction pressure {p_s} bar"),
        ));
    }
    let flow = match input.flow {
        TvcFlow::Entrained(f) => {
            TvcFlow::Entrained(validation::ensure_positive("entrained flow", f)?)
        }
        TvcFlow::Motive(f) => TvcFlow::Motive(validation::ensure_positive("motive flow", f)?),
    };
    let nozzle = efficiency_or(
        "nozzle efficiency",
        input.nozzle_efficiency,
        settings.nozzle_efficiency,
    )?;
    let mixing = efficiency_or(
        "mixing efficiency",
        input.mixing_efficiency,
        settings.mixing_efficiency,
    )?;
    let diffuser = efficiency_or(
        "diffuser efficiency",
        input.diffuser_efficiency,
        settings.diffuser_efficiency,
    )?;
    let motive_t = input
        .motive_temperature_c
        .map(|t| validation::ensure_finite("motive temperature", t))
        .transpose()?;

    let compression_ratio = p_d / p_s;
    if compression_ratio > settings.max_compression_ratio {
        return Err(CalcError::physical(
            "compression ratio",
            format!(
                "{compression_ratio:.3} exceeds the single-stage limit of {}",
                settings.max_compression_ratio
            ),
        ));
    }
    let expansion_ratio = p_m / p_s;

    let t_m_sat = steam.saturation_temperature_c(p_m)?;
    let t_s_sat = steam.saturation_temperature_c(p_s)?;
    let t_d_sat = steam.saturation_temperature_c(p_d)?;

    let (h_m, motive_superheated) = match motive_t {
        Some(t) if steam.is_superheated(p_m, t)? => {
            (steam.enthalpy_superheated_kj_kg(p_m, t)?, true)
        }
        _ => (steam.enthalpy_vapor_kj_kg(t_m_sat)?, false),
    };
    let h_s = steam.enthalpy_vapor_kj_kg(t_s_sat)?;
    let h_d_sat = steam.enthalpy_vapor_kj_kg(t_d_sat)?;

    let lift = h_d_sat - h_s;
    let available = h_m - h_d_sat;
    if lift <= 0.0 || available <= 0.0 {
        return Err(CalcError::physical(
            "motive enthalpy",
            format!(
                "energy balance needs h_motive ({h_m:.1}) > h_discharge,sat ({h_d_sat:.1}) > \
                 h_suction ({h_s:.1}) kJ/kg"
            ),
        ));
    }
    let theoretical_ra = available / lift;

    let cr_correction =
        (-settings.compression_loss_coefficient * (compression_ratio - 1.0)).exp();
    let ejector_efficiency = nozzle * mixing * diffuser * cr_correction;
    let ra = theoretical_ra * ejector_efficiency;

    let (motive_flow, entrained_flow) = match flow {
        TvcFlow::Entrained(e) => (e / ra, e),
        TvcFlow::Motive(m) => (m, m * ra),
    };
    let discharge_flow = motive_flow + entrained_flow;
    let h_d = (motive_flow * h_m + entrained_flow * h_s) / discharge_flow;

    let t_d = discharge_temperature(steam, p_d, t_d_sat, h_d_sat, h_d)?;
    let superheat = t_d - t_d_sat;
    debug!(
        compression_ratio,
        theoretical_ra, ra, ejector_efficiency, t_d, "TVC operating point"
    );

    let mut warnings = Vec::new();
    if compression_ratio > settings.warn_compression_ratio {
        warnings.push(format!(
            "Compression ratio {compression_ratio:.2} is approaching the single-stage limit of {}.",
            settings.max_compression_ratio
        ));
    }
    if ra < settings.min_entrainment_ratio {
        warnings.push(format!(
            "Entrainment ratio {ra:.3} is below {}; the ejector sizing is marginal.",
            settings.min_entrainment_ratio
        ));
    }
    if superheat < settings.min_discharge_superheat_k {
        warnings.push(format!(
            "Discharge superheat {superheat:.1} K is very low; \
             condensation in the diffuser is possible."
        ));
    } else if superheat > settings.max_discharge_superheat_k {
        warnings.push(format!(
            "Discharge superheat {superheat:.1} K is unusually high; consider desuperheating."
        ));
    }
    for w in &warnings {
        warn!("{w}");
    }

    Ok(TvcResult {
        compression_ratio,
        expansion_ratio,
        theoretical_entrainment_ratio: theoretical_ra,
        entrainment_ratio: ra,
        ejector_efficiency,
        motive_saturation_temperature_c: t_m_sat,
        suction_saturation_temperature_c: t_s_sat,
        discharge_saturation_temperature_c: t_d_sat,
        motive_superheated,
        motive_enthalpy_kj_kg: h_m,
        suction_enthalpy_kj_kg: h_s,
        discharge_enthalpy_kj_kg: h_d,
        discharge_temperature_c: t_d,
        discharge_superheat_k: superheat,
        motive_flow_kg_h: motive_flow,
        entrained_flow_kg_h: entrained_flow,
        discharge_flow_kg_h: discharge_flow,
        warnings,
    })
}

fn efficiency_or(what: &'static str, given: Option<f64>, default: f64) -> CalcResult<f64> {
    match given {
        Some(e) => validation::ensure_efficiency(what, e),
        None => Ok(default),
    }
}

/// 토출 압력에서 h(P_d, T) = h_d 가 되는 온도를 이분법으로 찾는다.
/// h_d가 포화 증기 엔탈피 이하이면 포화 상태로 본다.
fn discharge_temperature<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    p_d: f64,
    t_sat: f64,
    h_sat: f64,
    h_d: f64,
) -> CalcResult<f64> {
    if h_d <= h_sat {
        if h_sat - h_d > 1e-6 * h_sat {
            warn!(
                h_d,
                h_sat, p_d, "mixed enthalpy below saturated vapour; reporting saturated discharge"
            );
        }
        return Ok(t_sat);
    }
    let mut lo = t_sat;
    let mut hi = t_sat + DISCHARGE_SEARCH_SPAN_K;
    if steam.enthalpy_superheated_kj_kg(p_d, hi)? < h_d {
        return Err(CalcError::physical(
            "discharge enthalpy",
            format!("{h_d:.1} kJ/kg lies beyond the superheated range searched at {p_d} bar"),
        ));
    }
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if steam.enthalpy_superheated_kj_kg(p_d, mid)? < h_d {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < 1e-6 {
            break;
        }
    }
    Ok(0.5 * (lo + hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steam::If97Steam;

    #[test]
    fn default_settings_are_valid() {
        assert!(TvcSettings::default().validate().is_ok());
    }

    #[test]
    fn inconsistent_limits_are_rejected() {
        let settings = TvcSettings {
            warn_compression_ratio: 3.0,
            ..TvcSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("compression ratio limits"));

        let settings = TvcSettings {
            min_discharge_superheat_k: 60.0,
            ..TvcSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn enthalpy_below_saturation_reports_saturated_discharge() {
        let t_sat = If97Steam.saturation_temperature_c(1.0).unwrap();
        let h_sat = If97Steam.enthalpy_vapor_kj_kg(t_sat).unwrap();
        let t = discharge_temperature(&If97Steam, 1.0, t_sat, h_sat, h_sat - 50.0).unwrap();
        assert_eq!(t, t_sat);

        let t = discharge_temperature(&If97Steam, 1.0, t_sat, h_sat, h_sat + 20.0).unwrap();
        assert!(t > t_sat);
        let h = If97Steam.enthalpy_superheated_kj_kg(1.0, t).unwrap();
        assert!((h - (h_sat + 20.0)).abs() < 1e-3);
    }
}
