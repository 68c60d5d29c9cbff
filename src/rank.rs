use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Discrete grade a score falls into.
///
/// `CMid` and `CLow` share the "C" label but are shown with different
/// colours, so they stay separate variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    #[strum(serialize = "-")]
    Unrated,
    #[strum(serialize = "SS")]
    SS,
    #[strum(serialize = "S")]
    S,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "B")]
    B,
    #[strum(serialize = "C")]
    CMid,
    #[strum(serialize = "C")]
    CLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

const NEUTRAL_LIGHT: RgbColor = RgbColor::new(0xee, 0xee, 0xee);
const NEUTRAL_DIM: RgbColor = RgbColor::new(0xaa, 0xaa, 0xaa);
const VIVID_PURPLE: RgbColor = RgbColor::new(0xc4, 0x32, 0xed);
const GOLD: RgbColor = RgbColor::new(0xd4, 0xaf, 0x37);
const PINK: RgbColor = RgbColor::new(0xd6, 0x8e, 0x8e);
const BRONZE: RgbColor = RgbColor::new(0xbd, 0xa3, 0x7e);
const MINT: RgbColor = RgbColor::new(0x5a, 0xd8, 0xc7);
const GRAY: RgbColor = RgbColor::new(0xe2, 0xe8, 0xf0);
const DARK_GRAY: RgbColor = RgbColor::new(0x55, 0x55, 0x55);
const WHITE: RgbColor = RgbColor::new(0xff, 0xff, 0xff);

impl RankTier {
    /// Top-down, first match wins. NaN falls through to `CLow`.
    pub fn from_score(score: f64) -> Self {
        if score == 0.0 {
            Self::Unrated
        } else if score >= 80.0 {
            Self::SS
        } else if score >= 70.0 {
            Self::S
        } else if score >= 60.0 {
            Self::A
        } else if score >= 50.0 {
            Self::B
        } else if score >= 40.0 {
            Self::CMid
        } else {
            Self::CLow
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn background(self) -> RgbColor {
        match self {
            Self::Unrated => NEUTRAL_LIGHT,
            Self::SS => VIVID_PURPLE,
            Self::S => GOLD,
            Self::A => PINK,
            Self::B => BRONZE,
            Self::CMid => MINT,
            Self::CLow => GRAY,
        }
    }

    pub fn text(self) -> RgbColor {
        match self {
            Self::Unrated => NEUTRAL_DIM,
            Self::CLow => DARK_GRAY,
            _ => WHITE,
        }
    }
}

/// Presentation data for one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankInfo {
    pub tier: RankTier,
    pub rank: &'static str,
    pub color: RgbColor,
    pub text: RgbColor,
}

impl From<RankTier> for RankInfo {
    fn from(tier: RankTier) -> Self {
        Self {
            tier,
            rank: tier.label(),
            color: tier.background(),
            text: tier.text(),
        }
    }
}

pub fn classify(score: f64) -> RankInfo {
    RankTier::from_score(score).into()
}

/// Unmeasured parts are unrated.
pub fn classify_part(score: Option<u32>) -> RankInfo {
    match score {
        Some(s) => classify(s as f64),
        None => RankTier::Unrated.into(),
    }
}
