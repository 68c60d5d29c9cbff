#![allow(dead_code)]

use facedv::measurements::MeasurementSet;
use facedv::scorer::{Axis, Gender, PartKey};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A male face where every part sits exactly on its ideal, with an average
/// body ratio of 7.2 heads.
pub fn ideal_face(head_height: f64) -> MeasurementSet {
    let face = head_height * 0.57;
    let cheek = head_height * 0.65;

    let mut m = MeasurementSet::new(Gender::Male)
        .with_height(head_height * 7.2)
        .with_head_height(head_height);

    for key in PartKey::ALL {
        let value = match key {
            PartKey::LFaceHeight => face,
            PartKey::WCheek => cheek,
            _ => match key.axis() {
                Axis::Vertical => face * key.ideal_ratio(),
                Axis::Horizontal => cheek * key.ideal_ratio(),
            },
        };
        m = m.with_part(key, value);
    }
    m
}

/// Temp directory that lives as long as the fixture.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}
