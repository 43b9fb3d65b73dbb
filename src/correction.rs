//! 펌프 곡선 보정 엔진.
//!
//! 임펠러 트림(상사법칙)과 점도 보정을 양정·효율에 순서대로 적용한 뒤
//! 원본 유량과 보정된 양정·효율로 축동력을 다시 계산한다. 모든 함수는 순수하며
//! 입력 범위를 검사하지 않는다. 범위 검사는 [`CorrectionParams::checked`]에서 한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::curve::{AdjustedCurve, Curve};

/// 보정 계수의 권장 하한.
pub const PARAM_MIN: f64 = 0.5;
/// 보정 계수의 권장 상한(보정 없음).
pub const PARAM_MAX: f64 = 1.0;

/// 동력 계산에 쓰는 유체 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidProperties {
    /// 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// 중력가속도 [m/s²]
    pub gravity_m_s2: f64,
}

impl Default for FluidProperties {
    /// 상온의 물.
    fn default() -> Self {
        Self {
            density_kg_m3: 1000.0,
            gravity_m_s2: 9.81,
        }
    }
}

/// 보정 계수 입력값이 잘못되었을 때의 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{name} 값 {value}이(가) 허용 범위 [{min}, {max}]를 벗어났습니다")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} 값이 유한한 숫자가 아닙니다")]
    NotFinite { name: &'static str },
}

/// 트림비와 점도 보정 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionParams {
    /// 임펠러 트림비 (트림 후 직경 / 원래 직경)
    pub trim_ratio: f64,
    /// 점도 보정 계수 (양정·효율 공통 배율)
    pub viscosity_factor: f64,
}

impl Default for CorrectionParams {
    fn default() -> Self {
        Self {
            trim_ratio: PARAM_MAX,
            viscosity_factor: PARAM_MAX,
        }
    }
}

impl CorrectionParams {
    /// 범위 [`PARAM_MIN`, `PARAM_MAX`]를 검사한 뒤 보정 계수를 만든다.
    pub fn checked(trim_ratio: f64, viscosity_factor: f64) -> Result<Self, ParamError> {
        let params = Self {
            trim_ratio,
            viscosity_factor,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        check_range("trim_ratio", self.trim_ratio)?;
        check_range("viscosity_factor", self.viscosity_factor)
    }

    /// 두 계수 모두 1.0이면 보정이 없는 것과 같다.
    pub fn is_identity(&self) -> bool {
        self.trim_ratio == 1.0 && self.viscosity_factor == 1.0
    }
}

fn check_range(name: &'static str, value: f64) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NotFinite { name });
    }
    if !(PARAM_MIN..=PARAM_MAX).contains(&value) {
        return Err(ParamError::OutOfRange {
            name,
            value,
            min: PARAM_MIN,
            max: PARAM_MAX,
        });
    }
    Ok(())
}

/// 임펠러 트림을 반영한 양정. 상사법칙: H' = H · (D'/D)².
pub fn apply_impeller_trim(head: f64, trim_ratio: f64) -> f64 {
    head * trim_ratio * trim_ratio
}

/// 점도 보정. 양정과 효율에 같은 계수를 곱한다.
pub fn apply_viscosity_correction(head: f64, efficiency: f64, factor: f64) -> (f64, f64) {
    (head * factor, efficiency * factor)
}

/// 축동력 [kW] = ρ·g·Q·H / (η·1000).
///
/// 효율이 0이면 무한대 또는 NaN이 그대로 반환된다. 곡선 단위 계산에서는
/// [`adjust_curve`]가 이를 정의되지 않은 동력으로 분류한다.
pub fn calculate_power(flow: f64, head: f64, efficiency: f64, fluid: FluidProperties) -> f64 {
    (fluid.density_kg_m3 * fluid.gravity_m_s2 * flow * head) / (efficiency * 1000.0)
}

/// 기본 곡선에 트림 → 점도 보정 순으로 적용하고 동력을 계산한다.
///
/// 유량은 보정하지 않는다. 동력이 유한값이 아닌 운전점은 `None`으로 기록하고
/// 경고를 남긴다.
pub fn adjust_curve(base: &Curve, params: CorrectionParams, fluid: FluidProperties) -> AdjustedCurve {
    let n = base.len();
    let mut head = Vec::with_capacity(n);
    let mut efficiency = Vec::with_capacity(n);
    let mut power_kw = Vec::with_capacity(n);

    for sample in base.samples() {
        // 순서 고정: 트림 후 점도 보정
        let trimmed = apply_impeller_trim(sample.head, params.trim_ratio);
        let (h, eta) = apply_viscosity_correction(trimmed, sample.efficiency, params.viscosity_factor);
        let p = calculate_power(sample.flow, h, eta, fluid);
        head.push(h);
        efficiency.push(eta);
        power_kw.push(p.is_finite().then_some(p));
    }

    let mut adjusted = AdjustedCurve {
        flow: base.flow().to_vec(),
        head,
        efficiency,
        power_kw,
        warnings: Vec::new(),
    };

    let undefined = adjusted.undefined_power_indices();
    if !undefined.is_empty() {
        warn!(count = undefined.len(), "power undefined for zero-efficiency samples");
        adjusted.warnings.push(format!(
            "효율이 0이어서 동력을 계산할 수 없는 운전점이 {}개 있습니다 (인덱스 {:?}).",
            undefined.len(),
            undefined
        ));
    }
    if adjusted.efficiency.iter().any(|&e| e > 1.0) {
        adjusted
            .warnings
            .push("보정 후 효율이 100%를 넘는 운전점이 있습니다. 입력 데이터를 확인하세요.".into());
    }

    debug!(
        samples = n,
        trim_ratio = params.trim_ratio,
        viscosity_factor = params.viscosity_factor,
        "adjusted pump curve"
    );
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_is_identity() {
        assert!(CorrectionParams::default().is_identity());
    }

    #[test]
    fn checked_accepts_bounds() {
        assert!(CorrectionParams::checked(0.5, 1.0).is_ok());
        assert!(CorrectionParams::checked(1.0, 0.5).is_ok());
    }

    #[test]
    fn checked_rejects_out_of_range() {
        let err = CorrectionParams::checked(0.45, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ParamError::OutOfRange {
                name: "trim_ratio",
                ..
            }
        ));
        let err = CorrectionParams::checked(1.0, 1.2).unwrap_err();
        assert!(matches!(
            err,
            ParamError::OutOfRange {
                name: "viscosity_factor",
                ..
            }
        ));
    }

    #[test]
    fn checked_rejects_nan() {
        let err = CorrectionParams::checked(f64::NAN, 1.0).unwrap_err();
        assert_eq!(err, ParamError::NotFinite { name: "trim_ratio" });
    }

    #[test]
    fn engine_accepts_out_of_range_trim() {
        // 공식 자체는 어떤 실수에도 정의된다
        assert_eq!(apply_impeller_trim(10.0, -2.0), 40.0);
        assert_eq!(apply_impeller_trim(10.0, 0.0), 0.0);
    }
}
