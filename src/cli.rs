//! clap 기반 명령행 인터페이스 정의.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::correction::{CorrectionParams, ParamError};

/// 펌프 성능 곡선에 임펠러 트림과 점도 보정을 적용하고 동력을 다시 계산한다.
#[derive(Debug, Parser)]
#[command(name = "pump_curve_analyzer", version)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// debug 수준 로그 출력 (RUST_LOG가 있으면 그쪽이 우선)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 기본(보정 전) 곡선을 표로 출력한다.
    Base(InputArgs),
    /// 보정 전후 곡선과 요약을 출력한다.
    Adjust(AdjustArgs),
    /// 보정 곡선을 CSV로 내보낸다.
    Export {
        #[command(flatten)]
        adjust: AdjustArgs,
        /// 출력 파일 ("-"이면 표준출력). 생략 시 설정의 export_path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 내장 예제 곡선을 CSV로 출력한다.
    Example {
        /// 출력 파일. 생략 시 표준출력
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Flow, Head, Efficiency 열을 가진 CSV. 생략 시 예제 곡선
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct AdjustArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// 임펠러 트림비 [0.5, 1.0]
    #[arg(long)]
    pub trim: Option<f64>,

    /// 점도 보정 계수 [0.5, 1.0]
    #[arg(long)]
    pub viscosity: Option<f64>,
}

impl AdjustArgs {
    /// 명령행 값을 우선하고 없으면 설정 기본값을 쓴다. 범위를 벗어나면 오류.
    pub fn params(&self, defaults: CorrectionParams) -> Result<CorrectionParams, ParamError> {
        CorrectionParams::checked(
            self.trim.unwrap_or(defaults.trim_ratio),
            self.viscosity.unwrap_or(defaults.viscosity_factor),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_adjust_flags() {
        let cli = Cli::try_parse_from([
            "pump_curve_analyzer",
            "adjust",
            "--input",
            "pump.csv",
            "--trim",
            "0.8",
        ])
        .unwrap();
        let Command::Adjust(args) = cli.command else {
            panic!("expected adjust");
        };
        assert_eq!(args.input.input, Some(PathBuf::from("pump.csv")));
        let params = args.params(CorrectionParams::default()).unwrap();
        assert_eq!(params.trim_ratio, 0.8);
        assert_eq!(params.viscosity_factor, 1.0);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn config_defaults_fill_missing_flags() {
        let args = AdjustArgs {
            input: InputArgs { input: None },
            trim: None,
            viscosity: Some(0.9),
        };
        let defaults = CorrectionParams {
            trim_ratio: 0.75,
            viscosity_factor: 1.0,
        };
        let params = args.params(defaults).unwrap();
        assert_eq!(params.trim_ratio, 0.75);
        assert_eq!(params.viscosity_factor, 0.9);
    }

    #[test]
    fn out_of_range_flag_is_rejected() {
        let args = AdjustArgs {
            input: InputArgs { input: None },
            trim: Some(1.5),
            viscosity: None,
        };
        assert!(args.params(CorrectionParams::default()).is_err());
    }

    #[test]
    fn export_accepts_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pump_curve_analyzer",
            "export",
            "--viscosity",
            "0.5",
            "-o",
            "-",
            "--config",
            "alt.toml",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        let Command::Export { adjust, output } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(adjust.viscosity, Some(0.5));
        assert_eq!(output, Some(PathBuf::from("-")));
    }
}
