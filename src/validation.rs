//! 계산기 공통 오류 타입과 입력 검증 헬퍼.
//!
//! 오류 메시지에는 문제가 된 물리량 이름(temperature, pressure, NCG flow 등)이
//! 반드시 포함되어야 한다. 상위 UI/API 계층은 이 문자열을 그대로 사용자에게 보여준다.

use thiserror::Error;

use crate::steam::SteamPropertyError;

/// 계산기 결과 타입.
pub type CalcResult<T> = Result<T, CalcError>;

/// 계산기에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 물리적으로 의미 있는 범위를 벗어난 입력
    #[error("invalid {what}: {detail}")]
    Range { what: &'static str, detail: String },

    /// 범위는 맞지만 물리적으로 성립하지 않는 조합 (포화압 이하 전압, 단단 압축비 초과 등)
    #[error("physically inconsistent {what}: {detail}")]
    Physical { what: &'static str, detail: String },

    /// 증기 물성 공급자 호출 실패
    #[error("steam property lookup failed: {0}")]
    SteamProperty(#[from] SteamPropertyError),
}

impl CalcError {
    pub fn range(what: &'static str, detail: impl Into<String>) -> Self {
        CalcError::Range {
            what,
            detail: detail.into(),
        }
    }

    pub fn physical(what: &'static str, detail: impl Into<String>) -> Self {
        CalcError::Physical {
            what,
            detail: detail.into(),
        }
    }
}

/// NaN/무한대를 거부한다.
pub fn ensure_finite(what: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::range(what, format!("{value} is not a finite number")))
    }
}

/// 0보다 큰 값만 허용한다.
pub fn ensure_positive(what: &'static str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(what, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::range(what, format!("must be greater than 0 (got {value})")))
    }
}

/// 0 이상만 허용한다.
pub fn ensure_non_negative(what: &'static str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(what, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::range(what, format!("must not be negative (got {value})")))
    }
}

/// 닫힌 구간 [lo, hi] 안의 값만 허용한다.
pub fn ensure_within(what: &'static str, value: f64, lo: f64, hi: f64) -> CalcResult<f64> {
    let value = ensure_finite(what, value)?;
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(CalcError::range(
            what,
            format!("{value} is outside the valid range [{lo}, {hi}]"),
        ))
    }
}

/// 효율은 (0, 1] 구간이어야 한다.
pub fn ensure_efficiency(what: &'static str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(what, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(CalcError::range(
            what,
            format!("{value} must lie in (0, 1]"),
        ))
    }
}
