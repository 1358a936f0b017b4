use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError, UnitSettings};
use crate::ejector::{self, TvcInput, TvcResult, TvcSettings};
use crate::ncg::{self, NcgInput, NcgResult};
use crate::seawater::{self, DissolvedGasResult};
use crate::steam::{If97Steam, SteamPropertyProvider};
use crate::ui_cli::{self, Cli};
use crate::validation::{CalcError, CalcResult};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("calculation error: {0}")]
    Calc(#[from] CalcError),
    #[error("case file error: {0}")]
    Case(#[from] toml::de::Error),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 한 번의 계산 요청. 케이스 파일(TOML)도 같은 형태로 읽는다. 단위는 bar(abs)/°C 고정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculation {
    DissolvedGas {
        temperature_c: f64,
        salinity_g_kg: f64,
    },
    Ncg(NcgInput),
    Tvc(TvcInput),
}

/// 계산 결과 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    DissolvedGas(DissolvedGasResult),
    Ncg(NcgResult),
    Tvc(TvcResult),
}

/// 요청 하나를 계산한다.
pub fn evaluate<P: SteamPropertyProvider + ?Sized>(
    steam: &P,
    calculation: &Calculation,
    tvc_settings: &TvcSettings,
) -> CalcResult<Report> {
    match calculation {
        Calculation::DissolvedGas {
            temperature_c,
            salinity_g_kg,
        } => Ok(Report::DissolvedGas(seawater::dissolved_gas_content(
            *temperature_c,
            *salinity_g_kg,
        ))),
        Calculation::Ncg(input) => ncg::calculate_ncg_properties(steam, input).map(Report::Ncg),
        Calculation::Tvc(input) => {
            ejector::calculate_tvc_with(steam, input, tvc_settings).map(Report::Tvc)
        }
    }
}

/// TOML 케이스 파일을 읽는다.
pub fn load_case(path: &Path) -> Result<Calculation, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// CLI 명령을 실행하고 결과를 표준출력에 쓴다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let units = UnitSettings {
        pressure: cli.pressure_unit.unwrap_or(config.units.pressure),
        temperature: cli.temperature_unit.unwrap_or(config.units.temperature),
    };
    let calculation = ui_cli::calculation_from_args(&cli.command, &units)?;

    let report = evaluate(&If97Steam, &calculation, &config.tvc)?;
    info!("calculation finished");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui_cli::print_report(&report, &units);
    }
    Ok(())
}
