//! 곡선을 CSV 텍스트로 내보낸다.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::curve::{AdjustedCurve, Curve};
use crate::loader::{EFFICIENCY_COLUMN, FLOW_COLUMN, HEAD_COLUMN};

pub const POWER_COLUMN: &str = "Power (kW)";

/// 보정 곡선 내보내기 기본 파일명.
pub const DEFAULT_EXPORT_FILE: &str = "adjusted_pump_curve.csv";

/// 내보내기 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("파일을 만들 수 없습니다: {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV 쓰기 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

/// 보정 곡선을 `Flow,Head,Efficiency,Power (kW)` 형식으로 쓴다.
/// 정의되지 않은 동력은 빈 칸으로 남긴다.
pub fn write_adjusted_csv<W: Write>(curve: &AdjustedCurve, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([FLOW_COLUMN, HEAD_COLUMN, EFFICIENCY_COLUMN, POWER_COLUMN])?;
    for s in curve.samples() {
        let power = s.power_kw.map(|p| p.to_string()).unwrap_or_default();
        wtr.write_record([
            s.flow.to_string(),
            s.head.to_string(),
            s.efficiency.to_string(),
            power,
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// 기본 곡선을 `Flow,Head,Efficiency` 형식으로 쓴다. 로더가 그대로 다시 읽을 수 있다.
pub fn write_curve_csv<W: Write>(curve: &Curve, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([FLOW_COLUMN, HEAD_COLUMN, EFFICIENCY_COLUMN])?;
    for s in curve.samples() {
        wtr.write_record([s.flow.to_string(), s.head.to_string(), s.efficiency.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// 보정 곡선을 파일로 저장한다.
pub fn export_to_path(curve: &AdjustedCurve, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_adjusted_csv(curve, file)?;
    info!(path = %path.display(), samples = curve.len(), "exported adjusted curve");
    Ok(())
}
