use serde::Serialize;
use tracing::debug;

use super::input::{NcgInput, NcgMode, NcgModeKind, PressureSpec};
use super::mixture::{self, MixtureProperties, M_NCG, M_WATER};
use crate::seawater::{dissolved_gas_content, DissolvedGasResult};
use crate::steam::SteamPropertyProvider;
use crate::validation::{self, CalcError, CalcResult};

/// 허용 온도 범위(°C)
pub const MIN_TEMPERATURE_C: f64 = 0.0;
pub const MAX_TEMPERATURE_C: f64 = 350.0;

/// mg/L × m³/h → kg/h
const MG_L_M3_H_TO_KG_H: f64 = 1e-3;

/// 유량 분해 결과. 모든 유량은 kg/h, 체적유량은 m³/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NcgFlows {
    pub dry_ncg_flow_kg_h: f64,
    pub water_vapour_flow_kg_h: f64,
    pub total_flow_kg_h: f64,
    pub volumetric_flow_m3_h: f64,
}

/// 해수 모드에서 사용한 용존가스 계산 정보.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeawaterInfo {
    pub seawater_flow_m3_h: f64,
    pub gas_temperature_c: f64,
    pub salinity_g_kg: f64,
    pub dissolved_gas: DissolvedGasResult,
    /// 해수에서 탈기되는 건조 NCG 유량(kg/h)
    pub released_ncg_flow_kg_h: f64,
}

/// NCG 혼합물 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NcgResult {
    pub mode: NcgModeKind,
    /// 혼합물 온도(°C)
    pub temperature_c: f64,
    /// 혼합물 온도의 포화압력(bar abs)
    pub saturation_pressure_bar: f64,
    #[serde(flatten)]
    pub properties: MixtureProperties,
    /// 유량이 주어지지 않으면 `None`
    pub flows: Option<NcgFlows>,
    /// 해수 모드에서만 존재
    pub seawater_info: Option<SeawaterInfo>,
}

/// 입력 모드에 따라 수증기/NCG 혼합물 조성과 물성, 유량을 계산한다.
pub fn calculate_ncg_properties<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    input: &NcgInput,
) -> CalcResult<NcgResult> {
    let t_c = validation::ensure_within(
        "temperature",
        input.temperature_c,
        MIN_TEMPERATURE_C,
        MAX_TEMPERATURE_C,
    )?;
    let p_sat = steam.saturation_pressure_bar(t_c)?;

    let (properties, flows, seawater_info) = match &input.mode {
        NcgMode::DryNcg {
            pressure,
            dry_ncg_flow_kg_h,
        } => {
            let props = pressures_to_properties(steam, t_c, pressure, p_sat)?;
            let flows = dry_ncg_flow_kg_h
                .map(|dry| {
                    let dry = validation::ensure_non_negative("NCG flow", dry)?;
                    flows_from_dry_ncg(dry, &props)
                })
                .transpose()?;
            (props, flows, None)
        }
        NcgMode::WetNcg {
            pressure,
            total_flow_kg_h,
        } => {
            let props = pressures_to_properties(steam, t_c, pressure, p_sat)?;
            let flows = total_flow_kg_h
                .map(|total| {
                    let total = validation::ensure_non_negative("total flow", total)?;
                    Ok::<_, CalcError>(split_wet_flow(total, &props))
                })
                .transpose()?;
            (props, flows, None)
        }
        NcgMode::Seawater {
            pressure,
            seawater_flow_m3_h,
            gas_temperature_c,
            salinity_g_kg,
        } => {
            let seawater_flow =
                validation::ensure_non_negative("seawater flow", *seawater_flow_m3_h)?;
            let gas_t = validation::ensure_finite("gas temperature", *gas_temperature_c)?;
            let salinity = validation::ensure_non_negative("salinity", *salinity_g_kg)?;
            let props = pressures_to_properties(steam, t_c, pressure, p_sat)?;

            let gas = dissolved_gas_content(gas_t, salinity);
            let released = gas.total_gas_mg_l * seawater_flow * MG_L_M3_H_TO_KG_H;
            let flows = flows_from_dry_ncg(released, &props)?;
            let info = SeawaterInfo {
                seawater_flow_m3_h: seawater_flow,
                gas_temperature_c: gas_t,
                salinity_g_kg: salinity,
                dissolved_gas: gas,
                released_ncg_flow_kg_h: released,
            };
            (props, Some(flows), Some(info))
        }
        NcgMode::SplitFlows {
            dry_ncg_flow_kg_h,
            water_vapour_flow_kg_h,
        } => {
            let vapour = validation::ensure_positive("water vapour flow", *water_vapour_flow_kg_h)?;
            let dry = validation::ensure_non_negative("NCG flow", *dry_ncg_flow_kg_h)?;

            // 달톤 법칙 역산: 수증기 분압은 포화압, 전압 = Psat / y_H2O
            let n_water = vapour / M_WATER;
            let n_ncg = dry / M_NCG;
            let y_water = n_water / (n_water + n_ncg);
            let p_total = p_sat / y_water;
            debug!(p_total, y_water, "total pressure recovered from flow split");

            let props = mixture::mixture_properties(steam, t_c, p_total, p_sat)?;
            let total = dry + vapour;
            let flows = NcgFlows {
                dry_ncg_flow_kg_h: dry,
                water_vapour_flow_kg_h: vapour,
                total_flow_kg_h: total,
                volumetric_flow_m3_h: total * props.specific_volume_m3_kg,
            };
            (props, Some(flows), None)
        }
    };

    Ok(NcgResult {
        mode: input.mode.kind(),
        temperature_c: t_c,
        saturation_pressure_bar: p_sat,
        properties,
        flows,
        seawater_info,
    })
}

/// 압력 입력으로 전압·수증기 분압을 정한 뒤 혼합 물성을 계산한다.
fn pressures_to_properties<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    t_c: f64,
    spec: &PressureSpec,
    p_sat: f64,
) -> CalcResult<MixtureProperties> {
    let entered = validation::ensure_positive("pressure", spec.pressure_bar)?;
    let p_total = if spec.use_sat_pressure {
        p_sat + entered
    } else {
        if entered < p_sat {
            return Err(CalcError::physical(
                "total pressure",
                format!(
                    "{entered} bar is below the saturation pressure {p_sat:.6} bar at {t_c} °C"
                ),
            ));
        }
        entered
    };
    let p_water = p_sat.min(p_total);
    mixture::mixture_properties(steam, t_c, p_total, p_water)
}

/// 건조 NCG 유량에 질량분율 비를 곱해 동반 수증기 유량을 구한다.
fn flows_from_dry_ncg(dry: f64, props: &MixtureProperties) -> CalcResult<NcgFlows> {
    if props.ncg_mass_frac <= 0.0 {
        return Err(CalcError::physical(
            "NCG partial pressure",
            "is zero, so the water vapour flow carried by the NCG is undefined",
        ));
    }
    let vapour = dry * props.water_vapour_mass_frac / props.ncg_mass_frac;
    let total = dry + vapour;
    Ok(NcgFlows {
        dry_ncg_flow_kg_h: dry,
        water_vapour_flow_kg_h: vapour,
        total_flow_kg_h: total,
        volumetric_flow_m3_h: total * props.specific_volume_m3_kg,
    })
}

/// 습윤 전체 유량을 질량분율대로 나눈다.
fn split_wet_flow(total: f64, props: &MixtureProperties) -> NcgFlows {
    NcgFlows {
        dry_ncg_flow_kg_h: total * props.ncg_mass_frac,
        water_vapour_flow_kg_h: total * props.water_vapour_mass_frac,
        total_flow_kg_h: total,
        volumetric_flow_m3_h: total * props.specific_volume_m3_kg,
    }
}
