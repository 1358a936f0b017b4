//! 담수화 플랜트 열설비 계산 라이브러리.
//! 해수 용존가스, 수증기/NCG 혼합물 물성, TVC(증기 이젝터) 성능을 계산한다.
//! 계산기는 모두 순수 함수이며 증기 물성은 [`steam::SteamPropertyProvider`]로 주입받는다.

pub mod app;
pub mod config;
pub mod ejector;
pub mod ncg;
pub mod seawater;
pub mod steam;
pub mod ui_cli;
pub mod units;
pub mod validation;

pub use ejector::{calculate_tvc, calculate_tvc_with};
pub use ncg::calculate_ncg_properties;
pub use seawater::dissolved_gas_content;
pub use validation::{CalcError, CalcResult};
