use crate::error::{FaceDvError, FdResult};
use crate::scorer::parts::Strictness;
use crate::scorer::standards::StandardsTable;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub params: ScoringParams,

    // Population table is file-only, there are no flags for it.
    #[arg(skip)]
    pub standards: StandardsTable,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    // === GAUSSIAN CURVE ===
    #[arg(long, default_value_t = 50.0)]
    pub score_center: f64,
    #[arg(long, default_value_t = 30.0)]
    pub gaussian_amplitude: f64,

    // === LINEAR PENALTY (beyond threshold) ===
    #[arg(long, default_value_t = 2.0)]
    pub penalty_threshold_z: f64,
    #[arg(long, default_value_t = 10.0)]
    pub penalty_slope: f64,

    // === CLAMPS ===
    #[arg(long, default_value_t = 30.0)]
    pub score_floor: f64,
    #[arg(long, default_value_t = 80.0)]
    pub score_ceiling: f64,
    #[arg(long, default_value_t = 90.0)]
    pub body_score_ceiling: f64,
    #[arg(long, default_value_t = 10.0)]
    pub body_sd_scale: f64,

    // === STRICTNESS (sigma = ideal * strictness) ===
    #[arg(long, default_value_t = 0.15)]
    pub strictness_default: f64,
    #[arg(long, default_value_t = 0.12)]
    pub strictness_fine: f64,
    #[arg(long, default_value_t = 0.20)]
    pub strictness_structural: f64,

    // === BASE LENGTHS ===
    #[arg(long, default_value_t = 0.57)]
    pub face_height_ratio: f64,
    #[arg(long, default_value_t = 0.65)]
    pub cheek_width_ratio: f64,
    #[arg(long, default_value_t = 15.0)]
    pub fallback_cheek_width: f64,

    // === TOTAL ===
    /// Share of the total given to the body score; the face gets the rest.
    #[arg(long, default_value_t = 0.5)]
    pub body_weight: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            score_center: 50.0,
            gaussian_amplitude: 30.0,
            penalty_threshold_z: 2.0,
            penalty_slope: 10.0,
            score_floor: 30.0,
            score_ceiling: 80.0,
            body_score_ceiling: 90.0,
            body_sd_scale: 10.0,
            strictness_default: 0.15,
            strictness_fine: 0.12,
            strictness_structural: 0.20,
            face_height_ratio: 0.57,
            cheek_width_ratio: 0.65,
            fallback_cheek_width: 15.0,
            body_weight: 0.5,
        }
    }
}

impl ScoringParams {
    #[inline(always)]
    pub fn strictness(&self, level: Strictness) -> f64 {
        match level {
            Strictness::Fine => self.strictness_fine,
            Strictness::Default => self.strictness_default,
            Strictness::Structural => self.strictness_structural,
        }
    }

    #[inline(always)]
    pub fn face_weight(&self) -> f64 {
        1.0 - self.body_weight
    }

    pub fn validate(&self) -> FdResult<()> {
        let strictness = [
            ("strictness_default", self.strictness_default),
            ("strictness_fine", self.strictness_fine),
            ("strictness_structural", self.strictness_structural),
        ];
        for (name, value) in strictness {
            if !(value.is_finite() && value > 0.0) {
                return Err(FaceDvError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.score_floor > self.score_ceiling {
            return Err(FaceDvError::Config(format!(
                "score_floor ({}) is above score_ceiling ({})",
                self.score_floor, self.score_ceiling
            )));
        }

        if !(0.0..=1.0).contains(&self.body_weight) {
            return Err(FaceDvError::Config(format!(
                "body_weight must be within 0..=1, got {}",
                self.body_weight
            )));
        }

        if self.penalty_threshold_z < 0.0 {
            return Err(FaceDvError::Config(
                "penalty_threshold_z cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Copies every flag the user typed on the command line over `self`.
    /// Flags left at their clap defaults do not clobber values from a file.
    pub fn merge_from_cli(&mut self, cli_params: &ScoringParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(score_center, "score_center");
        update_if_present!(gaussian_amplitude, "gaussian_amplitude");

        update_if_present!(penalty_threshold_z, "penalty_threshold_z");
        update_if_present!(penalty_slope, "penalty_slope");

        update_if_present!(score_floor, "score_floor");
        update_if_present!(score_ceiling, "score_ceiling");
        update_if_present!(body_score_ceiling, "body_score_ceiling");
        update_if_present!(body_sd_scale, "body_sd_scale");

        update_if_present!(strictness_default, "strictness_default");
        update_if_present!(strictness_fine, "strictness_fine");
        update_if_present!(strictness_structural, "strictness_structural");

        update_if_present!(face_height_ratio, "face_height_ratio");
        update_if_present!(cheek_width_ratio, "cheek_width_ratio");
        update_if_present!(fallback_cheek_width, "fallback_cheek_width");

        update_if_present!(body_weight, "body_weight");
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FdResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FdResult<()> {
        self.params.validate()?;
        self.standards.validate()
    }
}
