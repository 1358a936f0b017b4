use serde::{Deserialize, Serialize};

/// 압력 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureSpec {
    /// 입력 압력(bar abs)
    pub pressure_bar: f64,
    /// `true`면 입력 압력을 NCG 분압으로 보고 포화압을 더해 전압을 만든다.
    /// `false`면 입력 압력이 곧 전압이며 포화압 이상이어야 한다.
    pub use_sat_pressure: bool,
}

/// 유량 입력 모드. 모드마다 필요한 필드만 가진다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NcgMode {
    /// 건조 NCG 유량을 주고 동반 수증기 유량을 구한다.
    DryNcg {
        pressure: PressureSpec,
        #[serde(default)]
        dry_ncg_flow_kg_h: Option<f64>,
    },
    /// 수증기를 포함한 전체(습윤) 유량을 주고 성분별로 나눈다.
    WetNcg {
        pressure: PressureSpec,
        #[serde(default)]
        total_flow_kg_h: Option<f64>,
    },
    /// 해수 유량·염분·평형온도로부터 탈기되는 NCG 유량을 구한다.
    Seawater {
        pressure: PressureSpec,
        seawater_flow_m3_h: f64,
        gas_temperature_c: f64,
        salinity_g_kg: f64,
    },
    /// 건조 NCG와 수증기 유량을 각각 주고 전압을 역산한다.
    SplitFlows {
        dry_ncg_flow_kg_h: f64,
        water_vapour_flow_kg_h: f64,
    },
}

/// 결과에 기록되는 모드 구분자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NcgModeKind {
    DryNcg,
    WetNcg,
    Seawater,
    SplitFlows,
}

impl NcgMode {
    pub fn kind(&self) -> NcgModeKind {
        match self {
            NcgMode::DryNcg { .. } => NcgModeKind::DryNcg,
            NcgMode::WetNcg { .. } => NcgModeKind::WetNcg,
            NcgMode::Seawater { .. } => NcgModeKind::Seawater,
            NcgMode::SplitFlows { .. } => NcgModeKind::SplitFlows,
        }
    }
}

/// NCG 혼합물 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NcgInput {
    /// 혼합물 온도(°C), 0~350
    pub temperature_c: f64,
    pub mode: NcgMode,
}
