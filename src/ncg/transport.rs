//! 순수 성분 수송 물성과 저압 기체 혼합 규칙.
//!
//! 점도는 Wilke, 열전도율은 Mason-Saxena 상호작용 계수를 쓰는 Wassiljewa 식으로 혼합한다.
//! 두 식 모두 같은 φᵢⱼ (성분 점도와 분자량으로 계산) 를 공유한다.

/// 혼합 규칙에 넘길 순수 성분 데이터.
#[derive(Debug, Clone, Copy)]
pub struct PureComponent {
    pub mole_fraction: f64,
    /// g/mol
    pub molar_mass: f64,
    /// Pa·s
    pub viscosity: f64,
    /// W/m·K
    pub conductivity: f64,
}

const SUTHERLAND_MU0: f64 = 1.716e-5;
const SUTHERLAND_T0_K: f64 = 273.15;
const SUTHERLAND_S_K: f64 = 110.4;

/// 저압 수증기 점도(Pa·s). 0~350°C 선형 근사.
pub fn water_vapour_viscosity(t_c: f64) -> f64 {
    8.02e-6 + 4.0e-8 * t_c
}

/// 저압 수증기 열전도율(W/m·K). 0~350°C 선형 근사.
pub fn water_vapour_conductivity(t_c: f64) -> f64 {
    0.0171 + 6.4e-5 * t_c
}

/// 공기 점도(Pa·s), Sutherland 식.
pub fn air_viscosity(t_c: f64) -> f64 {
    let t_k = t_c + 273.15;
    SUTHERLAND_MU0 * (t_k / SUTHERLAND_T0_K).powf(1.5) * (SUTHERLAND_T0_K + SUTHERLAND_S_K)
        / (t_k + SUTHERLAND_S_K)
}

/// 공기 열전도율(W/m·K), 멱법칙 근사.
pub fn air_conductivity(t_c: f64) -> f64 {
    0.0241 * ((t_c + 273.15) / 273.15).powf(0.81)
}

fn phi(i: &PureComponent, j: &PureComponent) -> f64 {
    let num = (1.0 + (i.viscosity / j.viscosity).sqrt() * (j.molar_mass / i.molar_mass).powf(0.25))
        .powi(2);
    let den = (8.0 * (1.0 + i.molar_mass / j.molar_mass)).sqrt();
    num / den
}

fn mix_with(components: &[PureComponent], value: impl Fn(&PureComponent) -> f64) -> f64 {
    components
        .iter()
        .filter(|c| c.mole_fraction > 0.0)
        .map(|i| {
            let denom: f64 = components
                .iter()
                .map(|j| j.mole_fraction * phi(i, j))
                .sum();
            i.mole_fraction * value(i) / denom
        })
        .sum()
}

/// Wilke 혼합 점도(Pa·s).
pub fn mixture_viscosity(components: &[PureComponent]) -> f64 {
    mix_with(components, |c| c.viscosity)
}

/// Wassiljewa(Mason-Saxena) 혼합 열전도율(W/m·K).
pub fn mixture_conductivity(components: &[PureComponent]) -> f64 {
    mix_with(components, |c| c.conductivity)
}
