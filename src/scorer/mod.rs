pub mod deviation;
pub mod engine;
pub mod parts;
pub mod standards;
pub mod types;

pub use self::parts::{Axis, PartKey, PART_COUNT};
pub use self::standards::{Gender, Standard, StandardsTable};
pub use self::types::{PartResult, PartTrace, ScoreBranch, ScoreDetails, ScoreResult};
use crate::config::{Config, ScoringParams};
use crate::error::FdResult;
use crate::measurements::MeasurementSet;

/// Scoring engine bound to one set of parameters.
///
/// Holds no per-call state; the same input always yields the same result.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub params: ScoringParams,
    pub standards: StandardsTable,
}

impl Scorer {
    pub fn new(config: Config) -> FdResult<Self> {
        config.validate()?;
        Ok(Self {
            params: config.params,
            standards: config.standards,
        })
    }

    /// Rounded result, ready for presentation.
    pub fn score(&self, m: &MeasurementSet) -> ScoreResult {
        self.score_details(m).result
    }

    /// Unrounded intermediates alongside the result (debug reports).
    pub fn score_details(&self, m: &MeasurementSet) -> ScoreDetails {
        engine::score_details(m, self.standards.for_gender(m.gender), &self.params)
    }
}
