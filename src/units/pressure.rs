use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 압력 단위. 계산기는 모두 절대압을 쓰므로 게이지 척도는 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    MilliBar,
    Pascal,
    KiloPascal,
    MegaPascal,
    Psi,
    /// 절대 mmHg (0 = 완전 진공)
    MmHg,
}

const PA_PER_BAR: f64 = 100_000.0;
const MMHG_PER_BAR: f64 = 750.062;
const PSI_TO_BAR: f64 = 0.068_947_6;

/// 절대압 값을 bar(abs)로 변환한다.
pub fn to_bar_abs(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::MilliBar => value / 1000.0,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::Psi => value * PSI_TO_BAR,
        PressureUnit::MmHg => value / MMHG_PER_BAR,
    }
}

/// bar(abs) 값을 원하는 단위로 변환한다.
pub fn from_bar_abs(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::MilliBar => value_bar * 1000.0,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::Psi => value_bar / PSI_TO_BAR,
        PressureUnit::MmHg => value_bar * MMHG_PER_BAR,
    }
}

impl PressureUnit {
    /// 출력용 단위 표기
    pub fn label(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar(a)",
            PressureUnit::MilliBar => "mbar(a)",
            PressureUnit::Pascal => "Pa(a)",
            PressureUnit::KiloPascal => "kPa(a)",
            PressureUnit::MegaPascal => "MPa(a)",
            PressureUnit::Psi => "psia",
            PressureUnit::MmHg => "mmHg(a)",
        }
    }
}

impl FromStr for PressureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" | "bara" => Ok(PressureUnit::Bar),
            "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
            "pa" => Ok(PressureUnit::Pascal),
            "kpa" => Ok(PressureUnit::KiloPascal),
            "mpa" => Ok(PressureUnit::MegaPascal),
            "psi" | "psia" => Ok(PressureUnit::Psi),
            "mmhg" | "torr" => Ok(PressureUnit::MmHg),
            other => Err(format!("unknown pressure unit: {other}")),
        }
    }
}
