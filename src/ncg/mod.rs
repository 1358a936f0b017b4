//! 수증기/불응축가스(NCG) 혼합물 물성 계산 모듈.
//! 입력 모드(건조 NCG, 습윤 NCG, 해수 탈기, 분리 유량)에 따라 조성과 유량을 정하고,
//! 조성이 정해진 뒤에는 모든 모드가 같은 혼합 물성 루틴을 사용한다.

pub mod input;
pub mod mixture;
pub mod ncg_properties;
pub mod transport;

pub use input::*;
pub use mixture::MixtureProperties;
pub use ncg_properties::*;
