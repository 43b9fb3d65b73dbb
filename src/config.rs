use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::correction::{CorrectionParams, FluidProperties, ParamError};
use crate::export::DEFAULT_EXPORT_FILE;
use crate::loader::InputUnits;
use crate::units::*;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 보고서에 표시할 단위를 담는다. 내보내기 CSV는 항상 SI 단위를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub flow: FlowUnit,
    pub head: LengthUnit,
    pub power: PowerUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            flow: FlowUnit::CubicMeterPerSecond,
            head: LengthUnit::Meter,
            power: PowerUnit::Kilowatt,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 보정 곡선 내보내기 경로
    pub export_path: PathBuf,
    /// CLI에서 지정하지 않았을 때 쓰는 보정 계수
    pub defaults: CorrectionParams,
    pub fluid: FluidProperties,
    pub units: DisplayUnits,
    pub input_units: InputUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            defaults: CorrectionParams::default(),
            fluid: FluidProperties::default(),
            units: DisplayUnits::default(),
            input_units: InputUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("기본 보정 계수 오류: {0}")]
    Defaults(#[from] ParamError),
    #[error("유체 물성 오류: {0}")]
    Fluid(&'static str),
}

impl Config {
    /// 저장된 기본값과 유체 물성이 계산에 쓸 수 있는 값인지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.validate()?;
        if !(self.fluid.density_kg_m3.is_finite() && self.fluid.density_kg_m3 > 0.0) {
            return Err(ConfigError::Fluid("밀도는 0보다 커야 합니다."));
        }
        if !(self.fluid.gravity_m_s2.is_finite() && self.fluid.gravity_m_s2 > 0.0) {
            return Err(ConfigError::Fluid("중력가속도는 0보다 커야 합니다."));
        }
        Ok(())
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}
