use super::parts::{Axis, PartKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-part outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartResult {
    /// `None` when the part was not measured.
    pub score: Option<u32>,
    #[serde(rename = "userVal")]
    pub user_value: Option<f64>,
    /// Target length, one decimal place. Always present.
    #[serde(rename = "idealVal")]
    pub ideal_value: f64,
}

impl PartResult {
    /// Score with the "not measured" case shown as 0.
    #[inline]
    pub fn display_score(&self) -> u32 {
        self.score.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Height over head height, one decimal. `None` unless both were given.
    pub head_ratio: Option<f64>,
    pub vertical_dev: i32,
    pub horizontal_dev: i32,
    pub body_score: i32,
    pub total_dev: i32,
    pub part_details: BTreeMap<PartKey, PartResult>,
}

impl ScoreResult {
    #[inline]
    pub fn part(&self, key: PartKey) -> Option<&PartResult> {
        self.part_details.get(&key)
    }
}

/// Which formula produced a raw part score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBranch {
    Gaussian,
    LinearPenalty,
}

/// Full trace of one part, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartTrace {
    pub key: PartKey,
    pub axis: Axis,
    /// L or W, depending on the axis.
    pub base: f64,
    pub ideal: f64,
    pub strictness: f64,
    pub sigma: f64,
    pub value: Option<f64>,
    pub z: Option<f64>,
    pub branch: Option<ScoreBranch>,
    /// Clamped but unrounded.
    pub score: Option<f64>,
}

/// Reference lengths each axis is proportioned against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseLengths {
    /// Face height.
    pub l: f64,
    /// Cheek width.
    pub w: f64,
}

impl BaseLengths {
    #[inline(always)]
    pub fn for_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.l,
            Axis::Horizontal => self.w,
        }
    }
}

/// Everything the engine computed, unrounded. `result` is the rounded view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub base: BaseLengths,
    pub parts: Vec<PartTrace>,
    pub vertical_avg: f64,
    pub horizontal_avg: f64,
    pub body_score: f64,
    pub face_balance: f64,
    pub total: f64,
    pub result: ScoreResult,
}
