use std::fs::File;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::cli::{AdjustArgs, Cli, Command};
use crate::config::{Config, ConfigError};
use crate::correction::{self, CorrectionParams, ParamError};
use crate::curve::{AdjustedCurve, Curve};
use crate::export::{self, ExportError};
use crate::loader::{self, LoadError};
use crate::report;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 데이터 오류: {0}")]
    Load(#[from] LoadError),
    #[error("보정 계수 오류: {0}")]
    Param(#[from] ParamError),
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
}

/// 입력 곡선을 읽고 보정까지 마친 결과.
struct Prepared {
    base: Curve,
    adjusted: AdjustedCurve,
    params: CorrectionParams,
}

fn prepare(args: &AdjustArgs, config: &Config) -> Result<Prepared, AppError> {
    let params = args.params(config.defaults)?;
    let base = loader::load_curve(args.input.input.as_deref(), config.input_units)?;
    let adjusted = correction::adjust_curve(&base, params, config.fluid);
    Ok(Prepared {
        base,
        adjusted,
        params,
    })
}

/// 파싱된 명령을 실행한다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Command::Base(input) => {
            let curve = loader::load_curve(input.input.as_deref(), config.input_units)?;
            print!("{}", report::format_curve(&curve, &config.units));
        }
        Command::Adjust(args) => {
            let p = prepare(args, config)?;
            print!(
                "{}",
                report::format_comparison(&p.base, &p.adjusted, &config.units)
            );
            println!();
            print!(
                "{}",
                report::format_summary(&p.adjusted, &p.params, &config.units)
            );
        }
        Command::Export { adjust, output } => {
            let p = prepare(adjust, config)?;
            let path = output.as_deref().unwrap_or(config.export_path.as_path());
            if path == Path::new("-") {
                export::write_adjusted_csv(&p.adjusted, io::stdout().lock())?;
            } else {
                export::export_to_path(&p.adjusted, path)?;
                println!("저장 완료: {}", path.display());
            }
        }
        Command::Example { output } => {
            let curve = loader::example_curve();
            match output {
                Some(path) => {
                    let file = File::create(path)?;
                    export::write_curve_csv(&curve, file)?;
                    println!("저장 완료: {}", path.display());
                }
                None => export::write_curve_csv(&curve, io::stdout().lock())?,
            }
        }
    }
    Ok(())
}
