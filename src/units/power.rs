use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Kilowatt,
    Watt,
    /// 기계식 마력(550 ft·lbf/s)
    Horsepower,
}

const KW_PER_HP: f64 = 0.745_699_872;

impl PowerUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Watt => "W",
            PowerUnit::Horsepower => "hp",
        }
    }
}

fn to_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Horsepower => value * KW_PER_HP,
    }
}

fn from_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value * 1000.0,
        PowerUnit::Horsepower => value / KW_PER_HP,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = to_kw(value, from);
    from_kw(kw, to)
}
