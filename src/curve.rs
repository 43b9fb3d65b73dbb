//! 펌프 성능 곡선 데이터 모델.
//!
//! 곡선은 `flow`, `head`, `efficiency` 세 개의 병렬 벡터로 저장하며, 같은 인덱스는
//! 같은 운전점을 가리킨다. 길이 불일치는 생성 시점에 거부하므로 이후 계산은
//! 인덱스 정합성을 다시 확인하지 않는다.

use thiserror::Error;

/// 펌프 한 운전점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// 체적 유량 [m³/s]
    pub flow: f64,
    /// 양정 [m]
    pub head: f64,
    /// 효율 (0~1)
    pub efficiency: f64,
}

/// 곡선 생성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// 세 열의 길이가 다름
    #[error("열 길이가 서로 다릅니다 (Flow={flow}, Head={head}, Efficiency={efficiency})")]
    LengthMismatch {
        flow: usize,
        head: usize,
        efficiency: usize,
    },
}

/// 기본(보정 전) 펌프 성능 곡선. 유량 오름차순을 전제로 한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    flow: Vec<f64>,
    head: Vec<f64>,
    efficiency: Vec<f64>,
}

impl Curve {
    /// 세 열로부터 곡선을 만든다. 길이가 다르면 오류를 반환한다.
    pub fn new(flow: Vec<f64>, head: Vec<f64>, efficiency: Vec<f64>) -> Result<Self, CurveError> {
        if flow.len() != head.len() || flow.len() != efficiency.len() {
            return Err(CurveError::LengthMismatch {
                flow: flow.len(),
                head: head.len(),
                efficiency: efficiency.len(),
            });
        }
        Ok(Self {
            flow,
            head,
            efficiency,
        })
    }

    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = CurveSample>,
    {
        let mut curve = Curve::default();
        for s in samples {
            curve.flow.push(s.flow);
            curve.head.push(s.head);
            curve.efficiency.push(s.efficiency);
        }
        curve
    }

    pub fn len(&self) -> usize {
        self.flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    pub fn flow(&self) -> &[f64] {
        &self.flow
    }

    pub fn head(&self) -> &[f64] {
        &self.head
    }

    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    pub fn sample(&self, index: usize) -> Option<CurveSample> {
        Some(CurveSample {
            flow: *self.flow.get(index)?,
            head: self.head[index],
            efficiency: self.efficiency[index],
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = CurveSample> + '_ {
        (0..self.len()).map(move |i| CurveSample {
            flow: self.flow[i],
            head: self.head[i],
            efficiency: self.efficiency[i],
        })
    }

    /// 유량이 비감소 순서인지 확인한다.
    pub fn is_sorted_by_flow(&self) -> bool {
        self.flow.windows(2).all(|w| w[0] <= w[1])
    }
}

/// 보정 후 곡선의 한 운전점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedSample {
    pub flow: f64,
    pub head: f64,
    pub efficiency: f64,
    /// 축동력 [kW]. 효율이 0이어서 유한값이 아니면 `None`.
    pub power_kw: Option<f64>,
}

/// 보정(트림·점도)이 적용된 곡선과 유도된 동력.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedCurve {
    pub(crate) flow: Vec<f64>,
    pub(crate) head: Vec<f64>,
    pub(crate) efficiency: Vec<f64>,
    pub(crate) power_kw: Vec<Option<f64>>,
    pub(crate) warnings: Vec<String>,
}

impl AdjustedCurve {
    pub fn len(&self) -> usize {
        self.flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    /// 원본 유량(보정으로 바뀌지 않음).
    pub fn flow(&self) -> &[f64] {
        &self.flow
    }

    pub fn head(&self) -> &[f64] {
        &self.head
    }

    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    pub fn power_kw(&self) -> &[Option<f64>] {
        &self.power_kw
    }

    /// 계산 중 수집된 경고/주의 메시지.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 동력이 정의되지 않은 운전점 인덱스.
    pub fn undefined_power_indices(&self) -> Vec<usize> {
        self.power_kw
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn samples(&self) -> impl Iterator<Item = AdjustedSample> + '_ {
        (0..self.len()).map(move |i| AdjustedSample {
            flow: self.flow[i],
            head: self.head[i],
            efficiency: self.efficiency[i],
            power_kw: self.power_kw[i],
        })
    }

    /// 동력을 뺀 유량·양정·효율만으로 곡선을 만든다.
    pub fn to_curve(&self) -> Curve {
        Curve {
            flow: self.flow.clone(),
            head: self.head.clone(),
            efficiency: self.efficiency.clone(),
        }
    }
}
