use super::deviation::{assess, clamp_score, round_decimal, round_half_up};
use super::parts::{Axis, PartKey, PART_COUNT};
use super::standards::Standard;
use super::types::{BaseLengths, PartResult, PartTrace, ScoreDetails, ScoreResult};
use crate::config::ScoringParams;
use crate::measurements::MeasurementSet;
use std::collections::BTreeMap;
use tracing::debug;

/// L falls back to a fraction of head height, W to a fixed width.
pub fn resolve_base_lengths(m: &MeasurementSet, p: &ScoringParams) -> BaseLengths {
    let head_height = m.head_height().unwrap_or(0.0);
    BaseLengths {
        l: m
            .get(PartKey::LFaceHeight)
            .unwrap_or(head_height * p.face_height_ratio),
        w: m.get(PartKey::WCheek).unwrap_or(p.fallback_cheek_width),
    }
}

/// Target length for a part.
///
/// Face height and cheek width are anchored to head height directly, even
/// when the user measured them; everything else scales off its axis base.
#[inline]
pub fn ideal_value(key: PartKey, base: &BaseLengths, head_height: f64, p: &ScoringParams) -> f64 {
    match key {
        PartKey::LFaceHeight => head_height * p.face_height_ratio,
        PartKey::WCheek => head_height * p.cheek_width_ratio,
        _ => base.for_axis(key.axis()) * key.ideal_ratio(),
    }
}

pub fn trace_part(
    key: PartKey,
    m: &MeasurementSet,
    base: &BaseLengths,
    p: &ScoringParams,
) -> PartTrace {
    let head_height = m.head_height().unwrap_or(0.0);
    let ideal = ideal_value(key, base, head_height, p);
    let strictness = p.strictness(key.strictness());
    let value = m.get(key);

    let (z, branch, score) = match value {
        Some(v) => {
            let (z, branch, score) = assess(v, ideal, strictness, p);
            (Some(z), Some(branch), Some(score))
        }
        None => (None, None, None),
    };

    PartTrace {
        key,
        axis: key.axis(),
        base: base.for_axis(key.axis()),
        ideal,
        strictness,
        sigma: ideal * strictness,
        value,
        z,
        branch,
        score,
    }
}

/// Body proportion score. Only the top is capped.
pub fn body_score(m: &MeasurementSet, std: &Standard, p: &ScoringParams) -> f64 {
    match (m.height(), m.head_height()) {
        (Some(height), Some(head_height)) => {
            let ratio = height / head_height;
            let score = p.score_center + ((ratio - std.body_avg) / std.body_sd) * p.body_sd_scale;
            score.min(p.body_score_ceiling)
        }
        _ => p.score_center,
    }
}

#[derive(Default)]
struct AxisAccumulator {
    sum: f64,
    count: usize,
}

impl AxisAccumulator {
    #[inline(always)]
    fn push(&mut self, score: f64) {
        self.sum += score;
        self.count += 1;
    }

    /// Unmeasured axes sit at the neutral score.
    #[inline]
    fn mean_or(&self, neutral: f64) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            neutral
        }
    }
}

pub fn score_details(m: &MeasurementSet, std: &Standard, p: &ScoringParams) -> ScoreDetails {
    let base = resolve_base_lengths(m, p);

    let mut parts = Vec::with_capacity(PART_COUNT);
    let mut part_details = BTreeMap::new();
    let mut vertical = AxisAccumulator::default();
    let mut horizontal = AxisAccumulator::default();

    for key in PartKey::ALL {
        let trace = trace_part(key, m, &base, p);
        // Part scores round half up; aggregates round half away from zero.
        let rounded = trace.score.map(|s| round_half_up(s) as u32);

        if let Some(score) = rounded {
            // Averages use the presented (rounded) part scores.
            match trace.axis {
                Axis::Vertical => vertical.push(score as f64),
                Axis::Horizontal => horizontal.push(score as f64),
            }
        }

        debug!(
            part = %key,
            value = ?trace.value,
            ideal = trace.ideal,
            z = ?trace.z,
            score = ?rounded,
            "Scored part"
        );

        part_details.insert(
            key,
            PartResult {
                score: rounded,
                user_value: trace.value,
                ideal_value: round_decimal(trace.ideal, 1),
            },
        );
        parts.push(trace);
    }

    let vertical_avg = vertical.mean_or(p.score_center);
    let horizontal_avg = horizontal.mean_or(p.score_center);
    let body = body_score(m, std, p);

    let face_balance = (vertical_avg + horizontal_avg) / 2.0;
    let total = clamp_score(
        face_balance * p.face_weight() + body * p.body_weight,
        p.score_floor,
        p.score_ceiling,
    );

    let head_ratio = match (m.height(), m.head_height()) {
        (Some(h), Some(hh)) => Some(round_decimal(h / hh, 1)),
        _ => None,
    };

    let result = ScoreResult {
        head_ratio,
        vertical_dev: round_decimal(vertical_avg, 0) as i32,
        horizontal_dev: round_decimal(horizontal_avg, 0) as i32,
        body_score: round_decimal(body, 0) as i32,
        total_dev: round_decimal(total, 0) as i32,
        part_details,
    };

    ScoreDetails {
        base,
        parts,
        vertical_avg,
        horizontal_avg,
        body_score: body,
        face_balance,
        total,
        result,
    }
}
