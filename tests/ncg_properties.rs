//! NCG/수증기 혼합물 계산 테스트. 표 기반 mock 증기 물성을 주입한다.
use desal_thermal_toolbox::ncg::{
    calculate_ncg_properties, NcgInput, NcgMode, NcgModeKind, PressureSpec,
};
use desal_thermal_toolbox::steam::SteamPropertyProvider;
use desal_thermal_toolbox::CalcError;
use proptest::prelude::*;

mod common;
use common::{assert_close, MockSteam};

const P_SAT_40: f64 = 0.073844;

fn ncg_partial(p: f64) -> PressureSpec {
    PressureSpec {
        pressure_bar: p,
        use_sat_pressure: true,
    }
}

fn total(p: f64) -> PressureSpec {
    PressureSpec {
        pressure_bar: p,
        use_sat_pressure: false,
    }
}

fn input(temperature_c: f64, mode: NcgMode) -> NcgInput {
    NcgInput {
        temperature_c,
        mode,
    }
}

fn error_text(err: CalcError) -> String {
    err.to_string()
}

#[test]
fn mock_saturation_round_trip_is_exact() {
    for t in [5.0, 40.0, 81.32, 137.5, 260.0] {
        let p = MockSteam.saturation_pressure_bar(t).unwrap();
        let back = MockSteam.saturation_temperature_c(p).unwrap();
        assert_close("round trip", back, t, 1e-9);
    }
}

#[test]
fn ncg_partial_pressure_adds_to_saturation_pressure() {
    let r = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::DryNcg {
                pressure: ncg_partial(0.075),
                dry_ncg_flow_kg_h: None,
            },
        ),
    )
    .unwrap();

    assert_eq!(r.mode, NcgModeKind::DryNcg);
    assert_close("psat", r.saturation_pressure_bar, P_SAT_40, 1e-9);
    let p = &r.properties;
    assert_close("total", p.total_pressure_bar, 0.148844, 1e-9);
    assert_close("ncg partial", p.ncg_partial_pressure_bar, 0.075, 1e-9);
    assert_close("vapour partial", p.water_vapour_partial_pressure_bar, P_SAT_40, 1e-9);
    assert!(r.flows.is_none());
    assert!(r.seawater_info.is_none());
}

#[test]
fn fractions_and_state_are_consistent() {
    let r = calculate_ncg_properties(
        &MockSteam,
        &input(
            60.0,
            NcgMode::WetNcg {
                pressure: total(0.35),
                total_flow_kg_h: Some(120.0),
            },
        ),
    )
    .unwrap();
    let p = &r.properties;
    assert!((p.water_vapour_mole_frac + p.ncg_mole_frac - 1.0).abs() < 1e-6);
    assert!((p.water_vapour_mass_frac + p.ncg_mass_frac - 1.0).abs() < 1e-6);
    assert!((p.density_kg_m3 * p.specific_volume_m3_kg - 1.0).abs() < 1e-9);
    assert!(p.molar_mass_g_mol > 18.015 && p.molar_mass_g_mol < 28.97);
    assert!(p.gamma_mix > 1.0);
    assert!(p.dynamic_viscosity_pa_s > 0.0 && p.thermal_conductivity_w_mk > 0.0);

    let flows = r.flows.unwrap();
    assert_close(
        "wet split",
        flows.dry_ncg_flow_kg_h + flows.water_vapour_flow_kg_h,
        120.0,
        1e-12,
    );
    assert_close(
        "volumetric",
        flows.volumetric_flow_m3_h,
        120.0 * p.specific_volume_m3_kg,
        1e-12,
    );
}

#[test]
fn modes_agree_on_the_same_state() {
    let dry = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::DryNcg {
                pressure: ncg_partial(0.075),
                dry_ncg_flow_kg_h: Some(10.0),
            },
        ),
    )
    .unwrap();
    let dry_flows = dry.flows.unwrap();
    assert_eq!(dry_flows.dry_ncg_flow_kg_h, 10.0);

    let wet = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::WetNcg {
                pressure: ncg_partial(0.075),
                total_flow_kg_h: Some(dry_flows.total_flow_kg_h),
            },
        ),
    )
    .unwrap();
    assert_eq!(wet.properties, dry.properties);
    assert_close("wet → dry NCG", wet.flows.unwrap().dry_ncg_flow_kg_h, 10.0, 1e-9);

    let seawater = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::Seawater {
                pressure: ncg_partial(0.075),
                seawater_flow_m3_h: 500.0,
                gas_temperature_c: 20.0,
                salinity_g_kg: 38.0,
            },
        ),
    )
    .unwrap();
    assert_eq!(seawater.properties, dry.properties);

    let split = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::SplitFlows {
                dry_ncg_flow_kg_h: 10.0,
                water_vapour_flow_kg_h: dry_flows.water_vapour_flow_kg_h,
            },
        ),
    )
    .unwrap();
    let sp = &split.properties;
    assert_close("split total", sp.total_pressure_bar, 0.148844, 1e-4);
    assert_close("split density", sp.density_kg_m3, dry.properties.density_kg_m3, 1e-4);
    assert_close("split enthalpy", sp.enthalpy_kj_kg, dry.properties.enthalpy_kj_kg, 1e-4);
    assert_close("split gamma", sp.gamma_mix, dry.properties.gamma_mix, 1e-4);
    assert_close(
        "split viscosity",
        sp.dynamic_viscosity_pa_s / dry.properties.dynamic_viscosity_pa_s,
        1.0,
        1e-4,
    );
}

#[test]
fn seawater_mode_releases_dissolved_gas() {
    let r = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::Seawater {
                pressure: ncg_partial(0.075),
                seawater_flow_m3_h: 1000.0,
                gas_temperature_c: 25.0,
                salinity_g_kg: 35.0,
            },
        ),
    )
    .unwrap();
    let info = r.seawater_info.unwrap();
    let flows = r.flows.unwrap();
    // mg/L × m³/h = g/h
    assert_close(
        "released",
        info.released_ncg_flow_kg_h,
        info.dissolved_gas.total_gas_mg_l * 1000.0 / 1000.0,
        1e-12,
    );
    assert_eq!(flows.dry_ncg_flow_kg_h, info.released_ncg_flow_kg_h);
    assert!(flows.water_vapour_flow_kg_h > 0.0);
    assert!(!info.dissolved_gas.extrapolated);
}

#[test]
fn temperature_outside_range_is_rejected() {
    for t in [-5.0, 400.0, f64::NAN] {
        let err = calculate_ncg_properties(
            &MockSteam,
            &input(
                t,
                NcgMode::DryNcg {
                    pressure: ncg_partial(0.075),
                    dry_ncg_flow_kg_h: None,
                },
            ),
        )
        .unwrap_err();
        assert!(error_text(err).contains("temperature"), "T={t}");
    }
}

#[test]
fn total_pressure_below_saturation_is_rejected() {
    let err = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::WetNcg {
                pressure: total(0.05),
                total_flow_kg_h: None,
            },
        ),
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::Physical { .. }));
    assert!(error_text(err).contains("total pressure"));
}

#[test]
fn saturated_vapour_without_ncg_cannot_carry_a_dry_flow() {
    let p_sat = MockSteam.saturation_pressure_bar(40.0).unwrap();
    let without_flow = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::DryNcg {
                pressure: total(p_sat),
                dry_ncg_flow_kg_h: None,
            },
        ),
    )
    .unwrap();
    assert_eq!(without_flow.properties.ncg_mole_frac, 0.0);

    let err = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::DryNcg {
                pressure: total(p_sat),
                dry_ncg_flow_kg_h: Some(1.0),
            },
        ),
    )
    .unwrap_err();
    assert!(error_text(err).contains("NCG partial pressure"));
}

#[test]
fn split_flow_inputs_are_validated() {
    let err = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::SplitFlows {
                dry_ncg_flow_kg_h: 5.0,
                water_vapour_flow_kg_h: 0.0,
            },
        ),
    )
    .unwrap_err();
    assert!(error_text(err).contains("water vapour flow"));

    let err = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::SplitFlows {
                dry_ncg_flow_kg_h: -1.0,
                water_vapour_flow_kg_h: 20.0,
            },
        ),
    )
    .unwrap_err();
    assert!(error_text(err).contains("NCG flow"));
}

#[test]
fn negative_flows_are_rejected() {
    let err = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::Seawater {
                pressure: ncg_partial(0.075),
                seawater_flow_m3_h: -3.0,
                gas_temperature_c: 25.0,
                salinity_g_kg: 35.0,
            },
        ),
    )
    .unwrap_err();
    assert!(error_text(err).contains("seawater flow"));

    let err = calculate_ncg_properties(
        &MockSteam,
        &input(
            40.0,
            NcgMode::WetNcg {
                pressure: ncg_partial(0.075),
                total_flow_kg_h: Some(-1.0),
            },
        ),
    )
    .unwrap_err();
    assert!(error_text(err).contains("total flow"));
}

#[test]
fn repeated_calls_give_identical_results() {
    let req = input(
        55.0,
        NcgMode::DryNcg {
            pressure: ncg_partial(0.02),
            dry_ncg_flow_kg_h: Some(3.5),
        },
    );
    let a = calculate_ncg_properties(&MockSteam, &req).unwrap();
    let b = calculate_ncg_properties(&MockSteam, &req).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn any_valid_state_is_consistent(t in 1.0f64..99.0, p_ncg in 0.001f64..2.0) {
        let r = calculate_ncg_properties(
            &MockSteam,
            &input(t, NcgMode::DryNcg { pressure: ncg_partial(p_ncg), dry_ncg_flow_kg_h: Some(1.0) }),
        )
        .unwrap();
        let p = &r.properties;
        prop_assert!((p.water_vapour_mole_frac + p.ncg_mole_frac - 1.0).abs() < 1e-6);
        prop_assert!((p.water_vapour_mass_frac + p.ncg_mass_frac - 1.0).abs() < 1e-6);
        prop_assert!((p.density_kg_m3 * p.specific_volume_m3_kg - 1.0).abs() < 1e-9);
        prop_assert!((p.total_pressure_bar - (r.saturation_pressure_bar + p_ncg)).abs() < 1e-9);
    }
}
