//! 종가 타임-플레이 애니메이션 프레임.
//!
//! 최근 최대 260개 포인트만 사용하고, 프레임 `k`는 그 중 처음 `k`개 포인트입니다
//! (k = 10, 11, ..., M). 포인트가 10개 미만이면 프레임을 만들지 않습니다.
//!
//! 재생 속도/일시정지는 렌더러의 몫이며 여기서는 각 프레임에 필요한 데이터만 만듭니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockview_core::{AnalysisConfig, Price, PriceSeries};
use tracing::debug;

use super::spec::HoverTemplate;

/// 프레임 개수를 제한하기 위한 기본 최대 포인트 수 (최근 약 1년).
pub const DEFAULT_MAX_POINTS: usize = 260;

/// 첫 프레임의 기본 포인트 수.
pub const DEFAULT_MIN_POINTS: usize = 10;

/// 애니메이션 한 포인트의 데이터 (툴팁용 부가 값 포함).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationPoint {
    pub date: NaiveDate,
    pub close: Price,
    /// 차트에 정의된 이동평균 값 (이동평균 트레이스 순서와 동일)
    pub moving_averages: Vec<Option<Decimal>>,
    pub volume: Option<u64>,
}

/// 애니메이션 명세.
///
/// 잘린 구간 데이터는 한 번만 보관하고, 각 프레임은 그 앞부분 길이로 표현합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// 최근 구간 (최대 `max_points`개)
    pub points: Vec<AnimationPoint>,
    /// 프레임별 포인트 수 (1씩 증가)
    pub frames: Vec<usize>,
    /// 프레임 트레이스의 툴팁
    pub hover: HoverTemplate,
    /// 사용자 안내 문구
    pub note: String,
}

/// 프레임 하나가 보는 데이터.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame<'a> {
    pub prefix_len: usize,
    pub points: &'a [AnimationPoint],
}

impl AnimationSpec {
    /// 프레임 개수.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// 프레임이 없는지 여부.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// `index`번째 프레임. 포인트 수를 넘는 프레임은 None.
    pub fn frame(&self, index: usize) -> Option<AnimationFrame<'_>> {
        let prefix_len = *self.frames.get(index)?;
        self.prefix(prefix_len)
    }

    /// 처음부터 모든 프레임을 순회합니다. 몇 번이든 다시 호출할 수 있습니다.
    ///
    /// 역직렬화된 명세에서 포인트 수를 넘는 프레임은 건너뜁니다.
    pub fn iter(&self) -> impl Iterator<Item = AnimationFrame<'_>> + '_ {
        self.frames
            .iter()
            .filter_map(move |&prefix_len| self.prefix(prefix_len))
    }

    fn prefix(&self, prefix_len: usize) -> Option<AnimationFrame<'_>> {
        Some(AnimationFrame {
            prefix_len,
            points: self.points.get(..prefix_len)?,
        })
    }
}

/// 애니메이션 프레임 생성기.
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrameGenerator {
    max_points: usize,
    min_points: usize,
}

impl Default for AnimationFrameGenerator {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            min_points: DEFAULT_MIN_POINTS,
        }
    }
}

impl AnimationFrameGenerator {
    /// 새로운 생성기. `min_points`는 최소 1로 보정됩니다.
    pub fn new(max_points: usize, min_points: usize) -> Self {
        Self {
            max_points,
            min_points: min_points.max(1),
        }
    }

    /// 분석 설정에서 생성합니다.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.animation_max_points, config.animation_min_points)
    }

    /// 최대 포인트 수.
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// 첫 프레임 포인트 수.
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// 시계열 끝부분으로 애니메이션을 만듭니다.
    ///
    /// `moving_averages`의 각 시계열은 `series`와 같은 길이여야 하며,
    /// 짧으면 빈 값(None)으로 취급합니다.
    pub fn generate(
        &self,
        series: &PriceSeries,
        moving_averages: &[&[Option<Decimal>]],
    ) -> AnimationSpec {
        let n = series.len();
        let start = n.saturating_sub(self.max_points);

        let points: Vec<AnimationPoint> = series.bars()[start..]
            .iter()
            .enumerate()
            .map(|(offset, bar)| {
                let i = start + offset;
                AnimationPoint {
                    date: bar.date,
                    close: bar.close,
                    moving_averages: moving_averages
                        .iter()
                        .map(|ma| ma.get(i).copied().flatten())
                        .collect(),
                    volume: bar.volume,
                }
            })
            .collect();

        let frames: Vec<usize> = if points.len() >= self.min_points {
            (self.min_points..=points.len()).collect()
        } else {
            Vec::new()
        };

        debug!(
            points = points.len(),
            frames = frames.len(),
            "animation frames generated"
        );

        AnimationSpec {
            note: format!(
                "※ Close 애니메이션은 성능을 위해 최근 약 1년(최대 {}프레임)만 재생합니다.",
                self.max_points
            ),
            points,
            frames,
            hover: HoverTemplate::close_bundle(),
        }
    }
}
