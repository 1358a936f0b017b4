use serde::Serialize;
use tracing::debug;

use super::transport::{self, PureComponent};
use crate::steam::{saturation_state, SteamPropertyProvider};
use crate::validation::{CalcError, CalcResult};

/// 일반 기체상수 [J/mol·K]
pub const R_UNIVERSAL: f64 = 8.314;
/// 물 분자량 [g/mol]
pub const M_WATER: f64 = 18.015;
/// NCG(공기 대용) 분자량 [g/mol]
pub const M_NCG: f64 = 28.97;
/// 저압 수증기 정압비열 [kJ/kg·K]
pub const CP_WATER_VAPOUR: f64 = 1.872;
/// 공기 정압비열 [kJ/kg·K]
pub const CP_AIR: f64 = 1.005;

/// (온도, 전압, 분압)으로 결정되는 혼합물 물성. 입력 모드와 무관하다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixtureProperties {
    /// 전압(bar abs)
    pub total_pressure_bar: f64,
    /// 수증기 분압(bar abs)
    pub water_vapour_partial_pressure_bar: f64,
    /// NCG 분압(bar abs)
    pub ncg_partial_pressure_bar: f64,
    pub water_vapour_mole_frac: f64,
    pub ncg_mole_frac: f64,
    pub water_vapour_mass_frac: f64,
    pub ncg_mass_frac: f64,
    /// 혼합 분자량 [g/mol]
    pub molar_mass_g_mol: f64,
    /// 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// 비체적 [m³/kg]
    pub specific_volume_m3_kg: f64,
    /// 비엔탈피 [kJ/kg] (수증기: 포화증기 기준, 공기: 0°C 기준)
    pub enthalpy_kj_kg: f64,
    pub cp_mix_kj_kgk: f64,
    pub cv_mix_kj_kgk: f64,
    pub gamma_mix: f64,
    /// 점성계수 [Pa·s]
    pub dynamic_viscosity_pa_s: f64,
    /// 열전도율 [W/m·K]
    pub thermal_conductivity_w_mk: f64,
}

/// 온도와 전압·수증기 분압으로부터 혼합물 물성을 계산한다.
///
/// 모든 입력 모드가 이 함수 하나를 거치므로 같은 (T, P, 조성)이면 결과도 같다.
pub fn mixture_properties<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    t_c: f64,
    total_pressure_bar: f64,
    water_vapour_pressure_bar: f64,
) -> CalcResult<MixtureProperties> {
    if total_pressure_bar <= 0.0 || water_vapour_pressure_bar > total_pressure_bar {
        return Err(CalcError::physical(
            "pressure",
            format!(
                "water vapour partial pressure {water_vapour_pressure_bar} bar \
                 must not exceed total pressure {total_pressure_bar} bar"
            ),
        ));
    }
    let ncg_pressure_bar = total_pressure_bar - water_vapour_pressure_bar;

    let y_w = water_vapour_pressure_bar / total_pressure_bar;
    let y_n = ncg_pressure_bar / total_pressure_bar;
    let molar_mass = y_w * M_WATER + y_n * M_NCG;
    let x_w = y_w * M_WATER / molar_mass;
    let x_n = y_n * M_NCG / molar_mass;

    // ρ = P·M/(R·T), P[Pa], M[kg/mol]
    let t_k = t_c + 273.15;
    let density = total_pressure_bar * 1e5 * (molar_mass / 1000.0) / (R_UNIVERSAL * t_k);

    let sat = saturation_state(steam, t_c)?;
    let enthalpy = x_w * sat.saturated_vapor_enthalpy_kj_kg + x_n * CP_AIR * t_c;

    let cv_water = CP_WATER_VAPOUR - R_UNIVERSAL / M_WATER;
    let cv_air = CP_AIR - R_UNIVERSAL / M_NCG;
    let cp_mix = x_w * CP_WATER_VAPOUR + x_n * CP_AIR;
    let cv_mix = x_w * cv_water + x_n * cv_air;

    let components = [
        PureComponent {
            mole_fraction: y_w,
            molar_mass: M_WATER,
            viscosity: transport::water_vapour_viscosity(t_c),
            conductivity: transport::water_vapour_conductivity(t_c),
        },
        PureComponent {
            mole_fraction: y_n,
            molar_mass: M_NCG,
            viscosity: transport::air_viscosity(t_c),
            conductivity: transport::air_conductivity(t_c),
        },
    ];

    let props = MixtureProperties {
        total_pressure_bar,
        water_vapour_partial_pressure_bar: water_vapour_pressure_bar,
        ncg_partial_pressure_bar: ncg_pressure_bar,
        water_vapour_mole_frac: y_w,
        ncg_mole_frac: y_n,
        water_vapour_mass_frac: x_w,
        ncg_mass_frac: x_n,
        molar_mass_g_mol: molar_mass,
        density_kg_m3: density,
        specific_volume_m3_kg: 1.0 / density,
        enthalpy_kj_kg: enthalpy,
        cp_mix_kj_kgk: cp_mix,
        cv_mix_kj_kgk: cv_mix,
        gamma_mix: cp_mix / cv_mix,
        dynamic_viscosity_pa_s: transport::mixture_viscosity(&components),
        thermal_conductivity_w_mk: transport::mixture_conductivity(&components),
    };
    debug!(
        t_c,
        total_pressure_bar,
        y_water = y_w,
        density = props.density_kg_m3,
        "NCG mixture properties"
    );
    Ok(props)
}
