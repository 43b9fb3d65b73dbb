//! 펌프 성능 CSV를 읽어 [`Curve`]로 좁히는 입력 경계.
//!
//! 필수 열은 `Flow`, `Head`, `Efficiency`이며 다른 열은 무시한다. 파일이 주어지지
//! 않으면 내장 예제 곡선을 사용한다.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::curve::{Curve, CurveError, CurveSample};
use crate::units::{convert_flow, convert_length, FlowUnit, LengthUnit};

pub const FLOW_COLUMN: &str = "Flow";
pub const HEAD_COLUMN: &str = "Head";
pub const EFFICIENCY_COLUMN: &str = "Efficiency";

/// 예제 곡선 운전점 수.
pub const EXAMPLE_SAMPLES: usize = 10;

/// 입력 CSV의 유량·양정 열 단위. 효율은 항상 0~1 소수이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputUnits {
    pub flow: FlowUnit,
    pub head: LengthUnit,
}

impl Default for InputUnits {
    fn default() -> Self {
        Self {
            flow: FlowUnit::CubicMeterPerSecond,
            head: LengthUnit::Meter,
        }
    }
}

/// 입력 표를 곡선으로 변환할 때 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("파일을 열 수 없습니다: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV 형식 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("필수 열 '{0}'이(가) 없습니다. 머리글에 Flow, Head, Efficiency가 있어야 합니다.")]
    MissingColumn(&'static str),
    #[error("{row}번째 데이터 행의 '{column}' 값 '{value}'은(는) 숫자가 아닙니다")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("데이터 행이 없습니다")]
    NoData,
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// 파일 미지정 시 쓰는 예제 곡선.
///
/// 유량 0.01~0.1 m³/s 등간격 10점, H = 50 − 200·(Q−0.05)², η = 0.7 − 10·(Q−0.05)².
pub fn example_curve() -> Curve {
    let (start, stop) = (0.01, 0.1);
    let step = (stop - start) / (EXAMPLE_SAMPLES - 1) as f64;
    Curve::from_samples((0..EXAMPLE_SAMPLES).map(|i| {
        let q = if i == EXAMPLE_SAMPLES - 1 {
            stop
        } else {
            start + step * i as f64
        };
        CurveSample {
            flow: q,
            head: 50.0 - 200.0 * (q - 0.05).powi(2),
            efficiency: 0.7 - 10.0 * (q - 0.05).powi(2),
        }
    }))
}

/// CSV 스트림을 읽어 SI 단위 곡선을 만든다.
pub fn read_curve_csv<R: Read>(reader: R, units: InputUnits) -> Result<Curve, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let flow_idx = column(FLOW_COLUMN)?;
    let head_idx = column(HEAD_COLUMN)?;
    let eff_idx = column(EFFICIENCY_COLUMN)?;

    let mut flow = Vec::new();
    let mut head = Vec::new();
    let mut efficiency = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let q = parse_cell(&record, flow_idx, FLOW_COLUMN, row)?;
        let h = parse_cell(&record, head_idx, HEAD_COLUMN, row)?;
        let eta = parse_cell(&record, eff_idx, EFFICIENCY_COLUMN, row)?;
        flow.push(convert_flow(q, units.flow, FlowUnit::CubicMeterPerSecond));
        head.push(convert_length(h, units.head, LengthUnit::Meter));
        efficiency.push(eta);
    }
    if flow.is_empty() {
        return Err(LoadError::NoData);
    }

    let curve = Curve::new(flow, head, efficiency)?;
    if !curve.is_sorted_by_flow() {
        warn!("flow column is not in ascending order");
    }
    if curve.flow().iter().any(|&q| q < 0.0) {
        warn!("flow column contains negative values");
    }
    Ok(curve)
}

fn parse_cell(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, LoadError> {
    let raw = record.get(index).unwrap_or("");
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        })
}

/// 파일 경로가 있으면 CSV를 읽고, 없으면 예제 곡선을 반환한다.
pub fn load_curve(path: Option<&Path>, units: InputUnits) -> Result<Curve, LoadError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            let curve = read_curve_csv(file, units)?;
            info!(path = %path.display(), samples = curve.len(), "loaded pump curve");
            Ok(curve)
        }
        None => {
            info!("no input file given, using example dataset");
            Ok(example_curve())
        }
    }
}
