use crate::error::{FaceDvError, FdResult};
use crate::measurements::{parse_length, MeasurementSet, FIELD_GENDER};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Column that names a row in batch input.
pub const FIELD_ID: &str = "id";

/// One labelled row of batch input.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub id: String,
    pub measurements: MeasurementSet,
}

/// Reads a single flat JSON object of measurements.
pub fn load_measurements<R: Read>(reader: R) -> FdResult<MeasurementSet> {
    let set: MeasurementSet = serde_json::from_reader(reader)?;
    debug!("Loaded {} measured parts", set.measured_parts());
    Ok(set)
}

pub fn load_measurements_from_file<P: AsRef<Path>>(path: P) -> FdResult<MeasurementSet> {
    let file = File::open(path)?;
    load_measurements(BufReader::new(file))
}

/// Reads CSV with a header row of field names, one person per row.
///
/// Cells follow the same rules as JSON input: blank, zero or unparsable
/// values mean "not measured". Rows without an `id` are named by position.
pub fn load_batch<R: Read>(reader: R) -> FdResult<Vec<BatchEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut ignored: Vec<String> = Vec::new();

    for (row, result) in rdr.deserialize::<HashMap<String, String>>().enumerate() {
        let record = result?;
        let mut set = MeasurementSet::default();
        let mut id = None;

        for (name, cell) in &record {
            match name.as_str() {
                FIELD_ID => id = Some(cell.clone()).filter(|s| !s.is_empty()),
                FIELD_GENDER => set.set_gender_str(cell),
                _ => {
                    if !set.set_field(name, parse_length(cell)) && !ignored.contains(name) {
                        ignored.push(name.clone());
                    }
                }
            }
        }

        entries.push(BatchEntry {
            id: id.unwrap_or_else(|| format!("row {}", row + 1)),
            measurements: set,
        });
    }

    if !ignored.is_empty() {
        debug!("Ignored non-measurement columns: {}", ignored.join(", "));
    }

    if entries.is_empty() {
        return Err(FaceDvError::Validation(
            "no measurement rows found".to_string(),
        ));
    }

    info!("Loaded {} measurement rows", entries.len());
    Ok(entries)
}

pub fn load_batch_from_file<P: AsRef<Path>>(path: P) -> FdResult<Vec<BatchEntry>> {
    let file = File::open(path)?;
    load_batch(BufReader::new(file))
}
