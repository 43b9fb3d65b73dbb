//! 펌프 성능 곡선 보정 도구.
//!
//! 계산 로직(곡선 모델, 보정 엔진)을 라이브러리로 분리하여 CLI 외의 프런트엔드도
//! 같은 엔진을 호출할 수 있게 한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod correction;
pub mod curve;
pub mod export;
pub mod loader;
pub mod report;
pub mod telemetry;
pub mod units;
