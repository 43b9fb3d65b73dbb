//! 곡선을 터미널용 텍스트 표로 만든다. 효율은 %로 표시한다.

use crate::config::DisplayUnits;
use crate::correction::CorrectionParams;
use crate::curve::{AdjustedCurve, Curve};
use crate::units::*;

/// 최고 효율점(BEP) 인덱스. 곡선이 비어 있으면 `None`.
pub fn best_efficiency_point(curve: &Curve) -> Option<usize> {
    curve
        .efficiency()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_finite())
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
}

/// 최소 유량 지점의 양정. 체절 양정의 근사로 쓴다.
pub fn shutoff_head(curve: &Curve) -> Option<f64> {
    curve
        .samples()
        .min_by(|a, b| a.flow.total_cmp(&b.flow))
        .map(|s| s.head)
}

fn flow_out(v: f64, units: &DisplayUnits) -> f64 {
    convert_flow(v, FlowUnit::CubicMeterPerSecond, units.flow)
}

fn head_out(v: f64, units: &DisplayUnits) -> f64 {
    convert_length(v, LengthUnit::Meter, units.head)
}

fn power_out(v: Option<f64>, units: &DisplayUnits) -> String {
    match v {
        Some(p) => format!("{:.3}", convert_power(p, PowerUnit::Kilowatt, units.power)),
        None => "-".to_string(),
    }
}

/// 기본 곡선 표.
pub fn format_curve(curve: &Curve, units: &DisplayUnits) -> String {
    let mut out = format!(
        "{:>12} {:>10} {:>10}\n",
        format!("Flow[{}]", units.flow.symbol()),
        format!("Head[{}]", units.head.symbol()),
        "Eff[%]"
    );
    for s in curve.samples() {
        out.push_str(&format!(
            "{:>12.5} {:>10.3} {:>10.2}\n",
            flow_out(s.flow, units),
            head_out(s.head, units),
            s.efficiency * 100.0
        ));
    }
    out
}

/// 원본 양정과 보정 곡선을 나란히 보여주는 표.
pub fn format_comparison(base: &Curve, adjusted: &AdjustedCurve, units: &DisplayUnits) -> String {
    let mut out = format!(
        "{:>12} {:>12} {:>12} {:>10} {:>12}\n",
        format!("Flow[{}]", units.flow.symbol()),
        format!("H0[{}]", units.head.symbol()),
        format!("H[{}]", units.head.symbol()),
        "Eff[%]",
        format!("P[{}]", units.power.symbol())
    );
    for (b, a) in base.samples().zip(adjusted.samples()) {
        out.push_str(&format!(
            "{:>12.5} {:>12.3} {:>12.3} {:>10.2} {:>12}\n",
            flow_out(a.flow, units),
            head_out(b.head, units),
            head_out(a.head, units),
            a.efficiency * 100.0,
            power_out(a.power_kw, units)
        ));
    }
    out
}

/// 보정 조건과 BEP, 경고를 요약한다.
pub fn format_summary(adjusted: &AdjustedCurve, params: &CorrectionParams, units: &DisplayUnits) -> String {
    let mut out = if params.is_identity() {
        "보정 없음 (트림비 1.00, 점도 보정 계수 1.00)\n".to_string()
    } else {
        format!(
            "트림비 {:.2}, 점도 보정 계수 {:.2}\n",
            params.trim_ratio, params.viscosity_factor
        )
    };
    let curve = adjusted.to_curve();
    if let Some(i) = best_efficiency_point(&curve) {
        out.push_str(&format!(
            "BEP: Q={:.5} {} H={:.3} {} η={:.2}% P={} {}\n",
            flow_out(adjusted.flow()[i], units),
            units.flow.symbol(),
            head_out(adjusted.head()[i], units),
            units.head.symbol(),
            adjusted.efficiency()[i] * 100.0,
            power_out(adjusted.power_kw()[i], units),
            units.power.symbol()
        ));
    }
    if let Some(h) = shutoff_head(&curve) {
        out.push_str(&format!(
            "최소 유량 양정: {:.3} {}\n",
            head_out(h, units),
            units.head.symbol()
        ));
    }
    for w in adjusted.warnings() {
        out.push_str(&format!("경고: {w}\n"));
    }
    out
}
