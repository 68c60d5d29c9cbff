use crate::error::{FaceDvError, FdResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Population statistics for one gender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    /// Mean of height / head height.
    pub body_avg: f64,
    /// Standard deviation of height / head height.
    pub body_sd: f64,

    // Reference data only. Nothing in the scoring path reads these.
    pub head_height_avg: f64,
    pub head_height_sd: f64,
    pub face_width_avg: f64,
    pub face_width_sd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardsTable {
    pub male: Standard,
    pub female: Standard,
}

impl Default for StandardsTable {
    fn default() -> Self {
        Self {
            male: Standard {
                body_avg: 7.2,
                body_sd: 0.4,
                head_height_avg: 23.2,
                head_height_sd: 0.9,
                face_width_avg: 16.1,
                face_width_sd: 0.8,
            },
            female: Standard {
                body_avg: 7.1,
                body_sd: 0.4,
                head_height_avg: 21.8,
                head_height_sd: 0.8,
                face_width_avg: 15.3,
                face_width_sd: 0.7,
            },
        }
    }
}

impl StandardsTable {
    /// Body statistics must support a division: finite mean, positive spread.
    pub fn validate(&self) -> FdResult<()> {
        for (gender, std) in [(Gender::Male, &self.male), (Gender::Female, &self.female)] {
            if !std.body_avg.is_finite() {
                return Err(FaceDvError::Config(format!(
                    "standards.{}.body_avg must be a finite number, got {}",
                    gender, std.body_avg
                )));
            }
            if !(std.body_sd.is_finite() && std.body_sd > 0.0) {
                return Err(FaceDvError::Config(format!(
                    "standards.{}.body_sd must be a positive number, got {}",
                    gender, std.body_sd
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn for_gender(&self, gender: Gender) -> &Standard {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}
