use crate::scorer::parts::{PartKey, PART_COUNT};
use crate::scorer::standards::Gender;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, warn};

pub const FIELD_GENDER: &str = "gender";
pub const FIELD_HEIGHT: &str = "height";
pub const FIELD_HEAD_HEIGHT: &str = "head_height";

/// One person's raw measurements, in centimetres.
///
/// A missing measurement is `None`. Zero and non-finite numbers are stored as
/// `None` as well, so a scored part always has a real length behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMeasurements", into = "RawMeasurements")]
pub struct MeasurementSet {
    pub gender: Gender,
    height: Option<f64>,
    head_height: Option<f64>,
    parts: [Option<f64>; PART_COUNT],
}

/// Treats 0, NaN and infinities as "not measured".
#[inline]
pub fn normalize_length(value: f64) -> Option<f64> {
    if value.is_finite() && value != 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Reads a length out of a loosely typed field.
///
/// Numbers are taken as-is, strings are parsed after trimming. Anything else
/// (null, booleans, arrays, garbage text) is "not measured".
pub fn coerce_length(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().and_then(normalize_length),
        Value::String(s) => parse_length(s),
        _ => None,
    }
}

/// Text form of `coerce_length`, shared with the CSV loader.
pub fn parse_length(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().and_then(normalize_length)
}

impl MeasurementSet {
    pub fn new(gender: Gender) -> Self {
        Self {
            gender,
            ..Default::default()
        }
    }

    #[inline]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    #[inline]
    pub fn head_height(&self) -> Option<f64> {
        self.head_height
    }

    #[inline]
    pub fn get(&self, key: PartKey) -> Option<f64> {
        self.parts[key.index()]
    }

    pub fn set_height(&mut self, value: Option<f64>) {
        self.height = value.and_then(normalize_length);
    }

    pub fn set_head_height(&mut self, value: Option<f64>) {
        self.head_height = value.and_then(normalize_length);
    }

    pub fn set(&mut self, key: PartKey, value: Option<f64>) {
        self.parts[key.index()] = value.and_then(normalize_length);
    }

    pub fn with_height(mut self, value: f64) -> Self {
        self.set_height(Some(value));
        self
    }

    pub fn with_head_height(mut self, value: f64) -> Self {
        self.set_head_height(Some(value));
        self
    }

    pub fn with_part(mut self, key: PartKey, value: f64) -> Self {
        self.set(key, Some(value));
        self
    }

    /// Unrecognised genders fall back to male.
    pub fn set_gender_str(&mut self, text: &str) {
        let trimmed = text.trim();
        self.gender = match Gender::from_str(trimmed) {
            Ok(g) => g,
            Err(_) => {
                if !trimmed.is_empty() {
                    warn!("Unknown gender '{}', scoring as male", trimmed);
                }
                Gender::Male
            }
        };
    }

    /// Routes a named field to its slot. Returns `false` for names that are
    /// not measurements so callers can decide whether to care.
    pub fn set_field(&mut self, name: &str, value: Option<f64>) -> bool {
        match name {
            FIELD_HEIGHT => self.set_height(value),
            FIELD_HEAD_HEIGHT => self.set_head_height(value),
            _ => match PartKey::from_str(name) {
                Ok(key) => self.set(key, value),
                Err(_) => return false,
            },
        }
        true
    }

    /// Number of facial parts that carry a measurement.
    pub fn measured_parts(&self) -> usize {
        self.parts.iter().filter(|v| v.is_some()).count()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct RawMeasurements(BTreeMap<String, Value>);

impl From<RawMeasurements> for MeasurementSet {
    fn from(raw: RawMeasurements) -> Self {
        let mut set = MeasurementSet::default();
        for (name, value) in &raw.0 {
            if name == FIELD_GENDER {
                if let Value::String(s) = value {
                    set.set_gender_str(s);
                }
                continue;
            }
            if !set.set_field(name, coerce_length(value)) {
                debug!("Ignoring non-measurement field '{}'", name);
            }
        }
        set
    }
}

impl From<MeasurementSet> for RawMeasurements {
    fn from(set: MeasurementSet) -> Self {
        // Absent values go out as 0, the same shape the input form stores.
        let num = |v: Option<f64>| Value::from(v.unwrap_or(0.0));

        let mut map = BTreeMap::new();
        map.insert(FIELD_GENDER.to_string(), Value::from(set.gender.to_string()));
        map.insert(FIELD_HEIGHT.to_string(), num(set.height));
        map.insert(FIELD_HEAD_HEIGHT.to_string(), num(set.head_height));
        for key in PartKey::ALL {
            map.insert(key.to_string(), num(set.get(key)));
        }
        RawMeasurements(map)
    }
}
