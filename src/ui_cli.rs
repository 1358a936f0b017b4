use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::app::{self, AppError, Calculation, Report};
use crate::config::{UnitSettings, DEFAULT_CONFIG_FILE};
use crate::ejector::{TvcFlow, TvcInput, TvcResult};
use crate::ncg::{NcgInput, NcgMode, NcgResult, PressureSpec};
use crate::seawater::DissolvedGasResult;
use crate::units::{
    from_bar_abs, from_celsius, to_bar_abs, to_celsius, PressureUnit, TemperatureUnit,
};
use crate::validation::CalcError;

#[derive(Parser, Debug)]
#[command(name = "desal_thermal_toolbox")]
#[command(
    about = "Desalination thermal calculations: dissolved gas, NCG mixtures, TVC ejectors",
    long_about = None
)]
pub struct Cli {
    /// Path to the config file (created with defaults if missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Pressure unit for inputs/outputs (bar, mbar, Pa, kPa, MPa, psi, mmHg; all absolute)
    #[arg(long, global = true)]
    pub pressure_unit: Option<PressureUnit>,
    /// Temperature unit for inputs/outputs (C, K, F)
    #[arg(long, global = true)]
    pub temperature_unit: Option<TemperatureUnit>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dissolved O2/N2 in air-saturated seawater (Weiss 1970)
    Gas {
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        /// Salinity [g/kg]
        #[arg(long)]
        salinity: f64,
    },
    /// Water vapour / NCG mixture properties
    #[command(subcommand)]
    Ncg(NcgCommand),
    /// Thermo-vapour compressor (steam ejector) performance
    Tvc(TvcArgs),
    /// Run a TOML case file (values in bar(a) and °C)
    Case { path: PathBuf },
}

#[derive(Args, Debug)]
pub struct PressureArgs {
    /// NCG partial pressure, or total pressure with --total-pressure
    #[arg(long)]
    pub pressure: f64,
    /// Treat --pressure as the total pressure instead of adding the saturation pressure
    #[arg(long)]
    pub total_pressure: bool,
}

#[derive(Subcommand, Debug)]
pub enum NcgCommand {
    /// Dry NCG flow given
    Dry {
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        #[command(flatten)]
        pressure: PressureArgs,
        /// Dry NCG mass flow [kg/h]
        #[arg(long)]
        flow: Option<f64>,
    },
    /// Total (wet) flow given
    Wet {
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        #[command(flatten)]
        pressure: PressureArgs,
        /// Wet mass flow [kg/h]
        #[arg(long)]
        flow: Option<f64>,
    },
    /// NCG released from a seawater stream
    Seawater {
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        #[command(flatten)]
        pressure: PressureArgs,
        /// Seawater flow [m3/h]
        #[arg(long)]
        seawater_flow: f64,
        /// Gas equilibration temperature
        #[arg(long, allow_negative_numbers = true)]
        gas_temperature: f64,
        /// Salinity [g/kg]
        #[arg(long)]
        salinity: f64,
    },
    /// Dry NCG and water vapour flows given; total pressure is derived
    Split {
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        /// Dry NCG mass flow [kg/h]
        #[arg(long, allow_negative_numbers = true)]
        ncg_flow: f64,
        /// Water vapour mass flow [kg/h]
        #[arg(long, allow_negative_numbers = true)]
        vapour_flow: f64,
    },
}

#[derive(Args, Debug)]
pub struct TvcArgs {
    #[arg(long)]
    pub motive_pressure: f64,
    #[arg(long)]
    pub suction_pressure: f64,
    #[arg(long)]
    pub discharge_pressure: f64,
    #[command(flatten)]
    pub flow: TvcFlowArgs,
    /// Motive steam temperature (saturated if omitted)
    #[arg(long)]
    pub motive_temperature: Option<f64>,
    #[arg(long)]
    pub nozzle_efficiency: Option<f64>,
    #[arg(long)]
    pub mixing_efficiency: Option<f64>,
    #[arg(long)]
    pub diffuser_efficiency: Option<f64>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TvcFlowArgs {
    /// Entrained (suction) flow [kg/h]
    #[arg(long)]
    pub entrained_flow: Option<f64>,
    /// Motive steam flow [kg/h]
    #[arg(long)]
    pub motive_flow: Option<f64>,
}

/// CLI 인자를 계산 요청으로 바꾼다. 압력·온도는 기준 단위로 환산한다.
/// 케이스 파일은 기준 단위 그대로 읽는다.
pub fn calculation_from_args(
    command: &Command,
    units: &UnitSettings,
) -> Result<Calculation, AppError> {
    let p = |v: f64| to_bar_abs(v, units.pressure);
    let t = |v: f64| to_celsius(v, units.temperature);
    let spec = |a: &PressureArgs| PressureSpec {
        pressure_bar: p(a.pressure),
        use_sat_pressure: !a.total_pressure,
    };
    match command {
        Command::Gas {
            temperature,
            salinity,
        } => Ok(Calculation::DissolvedGas {
            temperature_c: t(*temperature),
            salinity_g_kg: *salinity,
        }),
        Command::Ncg(ncg) => {
            let (temperature, mode) = match ncg {
                NcgCommand::Dry {
                    temperature,
                    pressure,
                    flow,
                } => (
                    *temperature,
                    NcgMode::DryNcg {
                        pressure: spec(pressure),
                        dry_ncg_flow_kg_h: *flow,
                    },
                ),
                NcgCommand::Wet {
                    temperature,
                    pressure,
                    flow,
                } => (
                    *temperature,
                    NcgMode::WetNcg {
                        pressure: spec(pressure),
                        total_flow_kg_h: *flow,
                    },
                ),
                NcgCommand::Seawater {
                    temperature,
                    pressure,
                    seawater_flow,
                    gas_temperature,
                    salinity,
                } => (
                    *temperature,
                    NcgMode::Seawater {
                        pressure: spec(pressure),
                        seawater_flow_m3_h: *seawater_flow,
                        gas_temperature_c: t(*gas_temperature),
                        salinity_g_kg: *salinity,
                    },
                ),
                NcgCommand::Split {
                    temperature,
                    ncg_flow,
                    vapour_flow,
                } => (
                    *temperature,
                    NcgMode::SplitFlows {
                        dry_ncg_flow_kg_h: *ncg_flow,
                        water_vapour_flow_kg_h: *vapour_flow,
                    },
                ),
            };
            Ok(Calculation::Ncg(NcgInput {
                temperature_c: t(temperature),
                mode,
            }))
        }
        Command::Tvc(args) => {
            let flow = match (args.flow.entrained_flow, args.flow.motive_flow) {
                (Some(e), _) => TvcFlow::Entrained(e),
                (None, Some(m)) => TvcFlow::Motive(m),
                (None, None) => {
                    return Err(CalcError::range(
                        "entrained flow",
                        "either --entrained-flow or --motive-flow is required",
                    )
                    .into())
                }
            };
            Ok(Calculation::Tvc(TvcInput {
                motive_pressure_bar: p(args.motive_pressure),
                suction_pressure_bar: p(args.suction_pressure),
                discharge_pressure_bar: p(args.discharge_pressure),
                flow,
                motive_temperature_c: args.motive_temperature.map(t),
                nozzle_efficiency: args.nozzle_efficiency,
                mixing_efficiency: args.mixing_efficiency,
                diffuser_efficiency: args.diffuser_efficiency,
            }))
        }
        Command::Case { path } => {
            info!(path = %path.display(), "loading case file");
            app::load_case(path)
        }
    }
}

/// 계산 결과를 사람이 읽기 좋은 형태로 출력한다.
pub fn print_report(report: &Report, units: &UnitSettings) {
    match report {
        Report::DissolvedGas(r) => print_gas(r, units),
        Report::Ncg(r) => print_ncg(r, units),
        Report::Tvc(r) => print_tvc(r, units),
    }
}

struct Fmt<'a> {
    units: &'a UnitSettings,
}

impl Fmt<'_> {
    fn p(&self, bar: f64) -> String {
        format!(
            "{:.6} {}",
            from_bar_abs(bar, self.units.pressure),
            self.units.pressure.label()
        )
    }

    fn t(&self, c: f64) -> String {
        format!(
            "{:.2} {}",
            from_celsius(c, self.units.temperature),
            self.units.temperature.label()
        )
    }
}

fn print_gas(r: &DissolvedGasResult, units: &UnitSettings) {
    let f = Fmt { units };
    println!("-- Dissolved gas (Weiss 1970) --");
    println!(
        "Temperature: {}, salinity: {:.2} g/kg",
        f.t(r.temperature_c),
        r.salinity_g_kg
    );
    println!("O2: {:.3} mL/L = {:.3} mg/L", r.o2_ml_l, r.o2_mg_l);
    println!("N2: {:.3} mL/L = {:.3} mg/L", r.n2_ml_l, r.n2_mg_l);
    println!("Total gas: {:.3} mg/L", r.total_gas_mg_l);
    if r.extrapolated {
        println!("Note: temperature outside 0-36 °C, values are extrapolated.");
    }
}

fn print_ncg(r: &NcgResult, units: &UnitSettings) {
    let f = Fmt { units };
    let m = &r.properties;
    println!("-- NCG mixture ({:?}) --", r.mode);
    println!(
        "Temperature: {}, Psat: {}",
        f.t(r.temperature_c),
        f.p(r.saturation_pressure_bar)
    );
    println!("Total pressure: {}", f.p(m.total_pressure_bar));
    println!(
        "Partial pressures: water vapour {}, NCG {}",
        f.p(m.water_vapour_partial_pressure_bar),
        f.p(m.ncg_partial_pressure_bar)
    );
    println!(
        "Mole fractions: water {:.5}, NCG {:.5} | mass fractions: water {:.5}, NCG {:.5}",
        m.water_vapour_mole_frac, m.ncg_mole_frac, m.water_vapour_mass_frac, m.ncg_mass_frac
    );
    println!(
        "M = {:.3} g/mol, rho = {:.5} kg/m3, v = {:.4} m3/kg, h = {:.2} kJ/kg",
        m.molar_mass_g_mol, m.density_kg_m3, m.specific_volume_m3_kg, m.enthalpy_kj_kg
    );
    println!(
        "cp = {:.4}, cv = {:.4} kJ/kg·K, gamma = {:.4}",
        m.cp_mix_kj_kgk, m.cv_mix_kj_kgk, m.gamma_mix
    );
    println!(
        "mu = {:.3e} Pa·s, k = {:.4} W/m·K",
        m.dynamic_viscosity_pa_s, m.thermal_conductivity_w_mk
    );
    if let Some(flows) = &r.flows {
        println!(
            "Flows: dry NCG {:.3} kg/h, water vapour {:.3} kg/h, total {:.3} kg/h, {:.3} m3/h",
            flows.dry_ncg_flow_kg_h,
            flows.water_vapour_flow_kg_h,
            flows.total_flow_kg_h,
            flows.volumetric_flow_m3_h
        );
    }
    if let Some(sw) = &r.seawater_info {
        println!(
            "Seawater: {:.2} m3/h at {}, S = {:.2} g/kg -> {:.3} mg/L gas, {:.4} kg/h NCG{}",
            sw.seawater_flow_m3_h,
            f.t(sw.gas_temperature_c),
            sw.salinity_g_kg,
            sw.dissolved_gas.total_gas_mg_l,
            sw.released_ncg_flow_kg_h,
            if sw.dissolved_gas.extrapolated { " (extrapolated)" } else { "" }
        );
    }
}

fn print_tvc(r: &TvcResult, units: &UnitSettings) {
    let f = Fmt { units };
    println!("-- TVC performance --");
    println!(
        "CR = {:.3}, ER = {:.3}, Ra(theoretical) = {:.4}, Ra = {:.4}, efficiency = {:.4}",
        r.compression_ratio,
        r.expansion_ratio,
        r.theoretical_entrainment_ratio,
        r.entrainment_ratio,
        r.ejector_efficiency
    );
    println!(
        "Tsat: motive {}, suction {}, discharge {}",
        f.t(r.motive_saturation_temperature_c),
        f.t(r.suction_saturation_temperature_c),
        f.t(r.discharge_saturation_temperature_c)
    );
    println!(
        "h: motive {:.1}{}, suction {:.1}, discharge {:.1} kJ/kg",
        r.motive_enthalpy_kj_kg,
        if r.motive_superheated { " (superheated)" } else { "" },
        r.suction_enthalpy_kj_kg,
        r.discharge_enthalpy_kj_kg
    );
    println!(
        "Discharge: {} (superheat {:.2} K)",
        f.t(r.discharge_temperature_c),
        r.discharge_superheat_k
    );
    println!(
        "Flows: motive {:.3} kg/h, entrained {:.3} kg/h, discharge {:.3} kg/h",
        r.motive_flow_kg_h, r.entrained_flow_kg_h, r.discharge_flow_kg_h
    );
    for w in &r.warnings {
        println!("Warning: {w}");
    }
}
