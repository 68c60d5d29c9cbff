use crate::measurements::MeasurementSet;
use crate::rank::{classify, classify_part, RankInfo};
use crate::scorer::{PartKey, ScoreResult, Scorer};
use serde::Serialize;

/// One row of the per-part breakdown.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartRow {
    pub key: PartKey,
    pub label: &'static str,
    pub score: Option<u32>,
    /// Score text, "-" when unmeasured.
    pub score_display: String,
    pub rank: RankInfo,
    pub measured_display: String,
    pub ideal_display: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub label: &'static str,
    pub score: i32,
    pub rank: RankInfo,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TotalBadge {
    pub score: i32,
    pub rank: RankInfo,
    /// Empty below the decorated tiers.
    pub icon: &'static str,
}

/// Everything a presentation layer needs to draw a result page.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultReport {
    pub head_ratio_display: String,
    pub total: TotalBadge,
    pub categories: Vec<CategoryRow>,
    pub parts: Vec<PartRow>,
    pub summary: String,
}

pub fn badge_icon(total: i32) -> &'static str {
    if total >= 70 {
        "👑"
    } else if total >= 60 {
        "✨"
    } else {
        ""
    }
}

fn format_cm(value: f64) -> String {
    // Shortest form, so 1.5 stays "1.5" and 12 stays "12".
    format!("{}cm", value)
}

pub fn build_report(result: &ScoreResult) -> ResultReport {
    let parts = result
        .part_details
        .iter()
        .map(|(&key, part)| PartRow {
            key,
            label: key.label(),
            score: part.score,
            score_display: part
                .score
                .map_or_else(|| "-".to_string(), |s| s.to_string()),
            rank: classify_part(part.score),
            measured_display: part.user_value.map_or_else(|| "-".to_string(), format_cm),
            ideal_display: format_cm(part.ideal_value),
        })
        .collect();

    let category = |label: &'static str, score: i32| CategoryRow {
        label,
        score,
        rank: classify(score as f64),
    };

    let total_rank = classify(result.total_dev as f64);
    let summary = format!(
        "Your FaceDV is {}. Overall rank: {}. Scores rise the closer each part is to its ideal proportion.",
        result.total_dev, total_rank.rank
    );

    ResultReport {
        head_ratio_display: result
            .head_ratio
            .map_or_else(|| "-".to_string(), |r| format!("{:.1} heads", r)),
        total: TotalBadge {
            score: result.total_dev,
            rank: total_rank,
            icon: badge_icon(result.total_dev),
        },
        categories: vec![
            category("Vertical balance", result.vertical_dev),
            category("Horizontal balance", result.horizontal_dev),
            category("Body proportion", result.body_score),
        ],
        parts,
        summary,
    }
}

/// Scores and builds the report in one step.
pub fn score_and_report(scorer: &Scorer, m: &MeasurementSet) -> (ScoreResult, ResultReport) {
    let result = scorer.score(m);
    let report = build_report(&result);
    (result, report)
}
