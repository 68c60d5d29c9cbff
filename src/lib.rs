pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod measurements;
pub mod rank;
pub mod scorer;
// cmd and reports belong to the binary (main.rs).

pub use crate::measurements::MeasurementSet;
pub use crate::rank::{classify, RankInfo, RankTier};
pub use crate::scorer::{ScoreResult, Scorer};

/// Scores `measurements` with the stock parameters and standards table.
pub fn compute_scores(measurements: &MeasurementSet) -> ScoreResult {
    Scorer::default().score(measurements)
}
