use super::types::ScoreBranch;
use crate::config::ScoringParams;

/// Standardized distance of `value` from `ideal`.
///
/// A zero sigma gives an infinite z for any off-target value, which lands on
/// the score floor once clamped.
#[inline(always)]
pub fn z_score(value: f64, ideal: f64, sigma: f64) -> f64 {
    (value - ideal).abs() / sigma
}

/// Unclamped score for a given z.
///
/// Up to and including the threshold the score follows a Gaussian bump that
/// peaks at `score_center + gaussian_amplitude`. Strictly beyond it the
/// score drops linearly from `score_center`.
#[inline]
pub fn raw_score(z: f64, p: &ScoringParams) -> (f64, ScoreBranch) {
    if z > p.penalty_threshold_z {
        let score = p.score_center - (z - p.penalty_threshold_z) * p.penalty_slope;
        (score, ScoreBranch::LinearPenalty)
    } else {
        let score = p.score_center + p.gaussian_amplitude * (-0.5 * z * z).exp();
        (score, ScoreBranch::Gaussian)
    }
}

/// Clamps into `[floor, ceiling]`. NaN lands on the floor.
#[inline]
pub fn clamp_score(score: f64, floor: f64, ceiling: f64) -> f64 {
    if score.is_nan() {
        return floor;
    }
    score.max(floor).min(ceiling)
}

/// Nearest integer, exact halves go up (towards +inf).
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to `decimals` places from the exact binary value, so 14.95
/// (stored as 14.9499...) becomes 14.9 rather than 15.0. Exact ties such as
/// 7.25 go away from zero.
pub fn round_decimal(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    let scale = 10f64.powi(decimals as i32);

    // A tie is j / 2^(decimals + 1) with j odd; scaling by a power of two is exact.
    let halves = magnitude * 2f64.powi(decimals as i32 + 1);
    let rounded = if halves.fract() == 0.0 && halves % 2.0 == 1.0 {
        ((magnitude * scale).floor() + 1.0) / scale
    } else {
        format!("{:.*}", decimals, magnitude)
            .parse()
            .unwrap_or(magnitude)
    };

    rounded.copysign(value)
}

/// Scores one measurement against its ideal.
/// Returns `(z, branch, clamped score)`.
pub fn assess(
    value: f64,
    ideal: f64,
    strictness: f64,
    p: &ScoringParams,
) -> (f64, ScoreBranch, f64) {
    let sigma = ideal * strictness;
    let z = z_score(value, ideal, sigma);
    let (raw, branch) = raw_score(z, p);
    (z, branch, clamp_score(raw, p.score_floor, p.score_ceiling))
}
