use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Number of scored facial parts.
pub const PART_COUNT: usize = 16;

/// The reference direction a part is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Measured against face height (L).
    Vertical,
    /// Measured against cheek width (W).
    Horizontal,
}

/// Every measured facial part.
///
/// Declaration order is the canonical order: the seven vertical parts first,
/// then the nine horizontal parts. Reports and serialized results follow it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    EnumCount,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PartKey {
    LFaceHeight,
    VBrowEye,
    VEyeHeight,
    VGlabellaNose,
    VPhiltrum,
    VLipHeight,
    VChinLip,
    WCheek,
    WJaw,
    WInnerEye,
    WOuterEye,
    WEyeWidth,
    WNoseWidth,
    WMouthWidth,
    WChinWidth,
    WOuterCheek,
}

/// How tightly a part is judged. Resolved to a number by `ScoringParams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Small upper-face distances where a millimetre is noticeable.
    Fine,
    Default,
    /// The two base lengths every other ratio hangs off.
    Structural,
}

impl PartKey {
    pub const ALL: [PartKey; PART_COUNT] = [
        PartKey::LFaceHeight,
        PartKey::VBrowEye,
        PartKey::VEyeHeight,
        PartKey::VGlabellaNose,
        PartKey::VPhiltrum,
        PartKey::VLipHeight,
        PartKey::VChinLip,
        PartKey::WCheek,
        PartKey::WJaw,
        PartKey::WInnerEye,
        PartKey::WOuterEye,
        PartKey::WEyeWidth,
        PartKey::WNoseWidth,
        PartKey::WMouthWidth,
        PartKey::WChinWidth,
        PartKey::WOuterCheek,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::LFaceHeight
            | Self::VBrowEye
            | Self::VEyeHeight
            | Self::VGlabellaNose
            | Self::VPhiltrum
            | Self::VLipHeight
            | Self::VChinLip => Axis::Vertical,
            _ => Axis::Horizontal,
        }
    }

    /// Expected size relative to the axis base length.
    pub fn ideal_ratio(self) -> f64 {
        match self {
            Self::LFaceHeight => 1.0,
            Self::VBrowEye => 0.08,
            Self::VEyeHeight => 0.09,
            Self::VGlabellaNose => 0.35,
            Self::VPhiltrum => 0.10,
            Self::VLipHeight => 0.10,
            Self::VChinLip => 0.20,

            Self::WCheek => 1.0,
            Self::WJaw => 0.80,
            Self::WInnerEye => 0.23,
            Self::WOuterEye => 0.75,
            Self::WEyeWidth => 0.23,
            Self::WNoseWidth => 0.23,
            Self::WMouthWidth => 0.35,
            Self::WChinWidth => 0.28,
            Self::WOuterCheek => 0.12,
        }
    }

    pub fn strictness(self) -> Strictness {
        match self {
            Self::VPhiltrum | Self::VBrowEye => Strictness::Fine,
            Self::LFaceHeight | Self::WCheek => Strictness::Structural,
            _ => Strictness::Default,
        }
    }

    /// Human readable name used by reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::LFaceHeight => "Face height",
            Self::VBrowEye => "Brow to eye",
            Self::VEyeHeight => "Eye height",
            Self::VGlabellaNose => "Glabella to nose tip",
            Self::VPhiltrum => "Philtrum",
            Self::VLipHeight => "Lip height",
            Self::VChinLip => "Lip to chin",
            Self::WCheek => "Cheek width",
            Self::WJaw => "Jaw width",
            Self::WInnerEye => "Inner eye distance",
            Self::WOuterEye => "Outer eye distance",
            Self::WEyeWidth => "Eye width",
            Self::WNoseWidth => "Nose width",
            Self::WMouthWidth => "Mouth width",
            Self::WChinWidth => "Chin width",
            Self::WOuterCheek => "Outer cheek",
        }
    }
}
