use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    /// 미국 갤런/분
    GallonPerMinute,
}

const M3_PER_US_GALLON: f64 = 0.003_785_411_784;

impl FlowUnit {
    /// 보고서 머리글에 쓰는 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerSecond => "m3/s",
            FlowUnit::CubicMeterPerHour => "m3/h",
            FlowUnit::LiterPerSecond => "L/s",
            FlowUnit::GallonPerMinute => "gpm",
        }
    }
}

fn to_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::GallonPerMinute => value * M3_PER_US_GALLON / 60.0,
    }
}

fn from_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value * 3600.0,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::GallonPerMinute => value * 60.0 / M3_PER_US_GALLON,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let base = to_m3_per_s(value, from);
    from_m3_per_s(base, to)
}
