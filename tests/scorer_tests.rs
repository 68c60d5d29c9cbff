use facedv::config::{Config, ScoringParams};
use facedv::measurements::MeasurementSet;
use facedv::scorer::{Gender, PartKey, ScoreBranch, Scorer};
use facedv::compute_scores;
use rstest::rstest;

mod common;
use common::ideal_face;

fn male(height: f64, head_height: f64) -> MeasurementSet {
    MeasurementSet::new(Gender::Male)
        .with_height(height)
        .with_head_height(head_height)
}

// --- MISSING INPUT ---

#[test]
fn test_unmeasured_parts_have_no_score_but_keep_ideal() {
    let result = compute_scores(&male(170.0, 23.0));

    for key in PartKey::ALL {
        let part = result.part(key).expect("every part is reported");
        assert_eq!(part.score, None, "{} should be unscored", key);
        assert_eq!(part.display_score(), 0);
        assert_eq!(part.user_value, None);
        assert!(part.ideal_value > 0.0, "{} ideal missing", key);
    }

    assert_eq!(result.part(PartKey::LFaceHeight).unwrap().ideal_value, 13.1);
    // 23 * 0.65 is stored just over 14.95
    assert_eq!(result.part(PartKey::WCheek).unwrap().ideal_value, 15.0);
    // W falls back to 15.0 -> jaw ideal 12.0
    assert_eq!(result.part(PartKey::WJaw).unwrap().ideal_value, 12.0);
}

#[test]
fn test_empty_input_defaults() {
    let result = compute_scores(&MeasurementSet::default());
    assert_eq!(result.vertical_dev, 50);
    assert_eq!(result.horizontal_dev, 50);
    assert_eq!(result.body_score, 50);
    assert_eq!(result.total_dev, 50);
    assert_eq!(result.head_ratio, None);
    // No head height: the anchored ideals collapse to zero.
    assert_eq!(result.part(PartKey::LFaceHeight).unwrap().ideal_value, 0.0);
    assert_eq!(result.part(PartKey::WOuterCheek).unwrap().ideal_value, 1.8);
}

#[test]
fn test_part_without_head_height_hits_floor() {
    // Ideal face height is 0 without a head height, so any value is off-scale.
    let m = MeasurementSet::default().with_part(PartKey::LFaceHeight, 12.0);
    let result = compute_scores(&m);
    assert_eq!(result.part(PartKey::LFaceHeight).unwrap().score, Some(30));
}

// --- BODY ---

#[test]
fn test_body_score_male_reference() {
    // 170 / 23 = 7.391 -> 50 + (0.191 / 0.4) * 10 = 54.78
    let result = compute_scores(&male(170.0, 23.0));
    assert_eq!(result.body_score, 55);
    assert_eq!(result.head_ratio, Some(7.4));
    // face neutral 50, body 54.78 -> 52.39
    assert_eq!(result.total_dev, 52);
}

#[test]
fn test_head_ratio_tie_rounds_up() {
    // 174 / 24 = 7.25 exactly
    let result = compute_scores(&male(174.0, 24.0));
    assert_eq!(result.head_ratio, Some(7.3));
    assert_eq!(result.body_score, 51);
}

#[test]
fn test_body_score_female_standard() {
    let m = MeasurementSet::new(Gender::Female)
        .with_height(160.0)
        .with_head_height(22.0);
    // 7.2727 vs 7.1 -> 54.32
    assert_eq!(compute_scores(&m).body_score, 54);
}

#[test]
fn test_body_score_needs_both_inputs() {
    let m = MeasurementSet::default().with_height(170.0);
    let result = compute_scores(&m);
    assert_eq!(result.body_score, 50);
    assert_eq!(result.head_ratio, None);
}

#[test]
fn test_body_score_has_no_floor() {
    // ratio 5.0 -> -5, total still clamps at 30
    let result = compute_scores(&male(120.0, 24.0));
    assert_eq!(result.body_score, -5);
    assert_eq!(result.total_dev, 30);
}

#[test]
fn test_body_score_ceiling() {
    let result = compute_scores(&male(200.0, 20.0));
    assert_eq!(result.body_score, 90);
    // 50 * 0.5 + 90 * 0.5 = 70
    assert_eq!(result.total_dev, 70);
}

// --- OVERRIDES ---

#[test]
fn test_face_height_ideal_is_anchored_to_head() {
    let m = male(170.0, 23.0).with_part(PartKey::LFaceHeight, 20.0);
    let result = compute_scores(&m);

    let face = result.part(PartKey::LFaceHeight).unwrap();
    assert_eq!(face.ideal_value, 13.1);
    assert_eq!(face.user_value, Some(20.0));
    // sigma 2.622, z 2.628 -> linear 43.72
    assert_eq!(face.score, Some(44));

    // The measured face height still becomes L for the other vertical parts.
    assert_eq!(result.part(PartKey::VBrowEye).unwrap().ideal_value, 1.6);
    assert_eq!(result.part(PartKey::VGlabellaNose).unwrap().ideal_value, 7.0);
}

#[test]
fn test_cheek_width_becomes_horizontal_base() {
    let m = male(170.0, 23.0).with_part(PartKey::WCheek, 14.0);
    let result = compute_scores(&m);
    assert_eq!(result.part(PartKey::WJaw).unwrap().ideal_value, 11.2);
    assert_eq!(result.part(PartKey::WMouthWidth).unwrap().ideal_value, 4.9);
}

// --- STRICTNESS ---

#[rstest]
#[case(PartKey::LFaceHeight, 0.20)]
#[case(PartKey::VBrowEye, 0.12)]
#[case(PartKey::VEyeHeight, 0.15)]
#[case(PartKey::VGlabellaNose, 0.15)]
#[case(PartKey::VPhiltrum, 0.12)]
#[case(PartKey::VLipHeight, 0.15)]
#[case(PartKey::VChinLip, 0.15)]
#[case(PartKey::WCheek, 0.20)]
#[case(PartKey::WJaw, 0.15)]
#[case(PartKey::WInnerEye, 0.15)]
#[case(PartKey::WOuterEye, 0.15)]
#[case(PartKey::WEyeWidth, 0.15)]
#[case(PartKey::WNoseWidth, 0.15)]
#[case(PartKey::WMouthWidth, 0.15)]
#[case(PartKey::WChinWidth, 0.15)]
#[case(PartKey::WOuterCheek, 0.15)]
fn test_strictness_per_part(#[case] key: PartKey, #[case] expected: f64) {
    let params = ScoringParams::default();
    assert_eq!(params.strictness(key.strictness()), expected, "{}", key);
}

// Every part 10% over its ideal, head 23, cheek width unmeasured (W = 15).
// z = 0.1 / strictness: fine 71, default 74, structural 76.
#[rstest]
#[case(PartKey::VBrowEye, 23.0 * 0.57 * 0.08, 71)]
#[case(PartKey::VPhiltrum, 23.0 * 0.57 * 0.10, 71)]
#[case(PartKey::VChinLip, 23.0 * 0.57 * 0.20, 74)]
#[case(PartKey::WJaw, 15.0 * 0.80, 74)]
#[case(PartKey::WNoseWidth, 15.0 * 0.23, 74)]
#[case(PartKey::LFaceHeight, 23.0 * 0.57, 76)]
#[case(PartKey::WCheek, 23.0 * 0.65, 76)]
fn test_off_ideal_score_follows_strictness(
    #[case] key: PartKey,
    #[case] ideal: f64,
    #[case] expected: u32,
) {
    let m = male(170.0, 23.0).with_part(key, ideal * 1.10);
    let result = compute_scores(&m);
    assert_eq!(result.part(key).unwrap().score, Some(expected), "{}", key);
}

// --- AGGREGATION ---

#[test]
fn test_perfect_face() {
    let result = compute_scores(&ideal_face(23.0));
    for key in PartKey::ALL {
        assert_eq!(result.part(key).unwrap().score, Some(80), "{}", key);
    }
    assert_eq!(result.vertical_dev, 80);
    assert_eq!(result.horizontal_dev, 80);
    assert_eq!(result.body_score, 50);
    assert_eq!(result.total_dev, 65);
}

#[test]
fn test_unmeasured_parts_do_not_drag_average() {
    let head = 23.0;
    let face = head * 0.57;
    let m = male(165.6, head)
        .with_part(PartKey::LFaceHeight, face)
        .with_part(PartKey::VChinLip, face * 0.20);
    let result = compute_scores(&m);
    assert_eq!(result.vertical_dev, 80);
    // No horizontal measurements: neutral.
    assert_eq!(result.horizontal_dev, 50);
}

#[test]
fn test_average_uses_rounded_part_scores() {
    let head = 23.0;
    let face = head * 0.57;
    // Face height exact (80), philtrum 10% high.
    let philtrum_ideal = face * 0.10;
    let m = male(165.6, head)
        .with_part(PartKey::LFaceHeight, face)
        .with_part(PartKey::VPhiltrum, philtrum_ideal * 1.10);
    let scorer = Scorer::default();
    let details = scorer.score_details(&m);

    let philtrum = details.result.part(PartKey::VPhiltrum).unwrap().score.unwrap();
    // z = 0.1 / 0.12 = 0.833 -> 50 + 30 * e^-0.347 = 71.2
    assert_eq!(philtrum, 71);
    assert_eq!(details.vertical_avg, (80.0 + 71.0) / 2.0);
    assert_eq!(details.result.vertical_dev, 76);
}

// --- BRANCH BOUNDARY ---

fn boundary_scorer() -> Scorer {
    // Exact binary fractions so z lands precisely on the threshold.
    let params = ScoringParams {
        cheek_width_ratio: 0.5,
        strictness_structural: 0.25,
        ..Default::default()
    };
    Scorer::new(Config {
        params,
        ..Default::default()
    })
    .unwrap()
}

fn cheek_trace(scorer: &Scorer, cheek: f64) -> (f64, ScoreBranch, u32) {
    // head 16 -> ideal cheek 8, sigma 2
    let m = male(120.0, 16.0).with_part(PartKey::WCheek, cheek);
    let details = scorer.score_details(&m);
    let trace = details
        .parts
        .iter()
        .find(|t| t.key == PartKey::WCheek)
        .copied()
        .unwrap();
    (
        trace.z.unwrap(),
        trace.branch.unwrap(),
        details.result.part(PartKey::WCheek).unwrap().score.unwrap(),
    )
}

#[test]
fn test_threshold_uses_gaussian() {
    let scorer = boundary_scorer();
    let (z, branch, score) = cheek_trace(&scorer, 12.0);
    assert_eq!(z, 2.0);
    assert_eq!(branch, ScoreBranch::Gaussian);
    // 50 + 30 * e^-2 = 54.06
    assert_eq!(score, 54);

    // Same distance below the ideal.
    let (z, branch, score) = cheek_trace(&scorer, 4.0);
    assert_eq!(z, 2.0);
    assert_eq!(branch, ScoreBranch::Gaussian);
    assert_eq!(score, 54);
}

#[test]
fn test_beyond_threshold_uses_linear_penalty() {
    let scorer = boundary_scorer();

    let (z, branch, score) = cheek_trace(&scorer, 12.5);
    assert_eq!(z, 2.25);
    assert_eq!(branch, ScoreBranch::LinearPenalty);
    // 50 - 0.25 * 10 = 47.5, half rounds up
    assert_eq!(score, 48);

    let (_, branch, score) = cheek_trace(&scorer, 30.0);
    assert_eq!(branch, ScoreBranch::LinearPenalty);
    assert_eq!(score, 30);
}

// --- PURITY ---

#[test]
fn test_idempotent() {
    let m = ideal_face(22.0)
        .with_part(PartKey::WNoseWidth, 4.1)
        .with_part(PartKey::VLipHeight, 1.9);
    let scorer = Scorer::default();
    let first = scorer.score(&m);
    let second = scorer.score(&m);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_result_serializes_with_wire_names() {
    let m = male(170.0, 23.0).with_part(PartKey::VPhiltrum, 1.3);
    let value = serde_json::to_value(compute_scores(&m)).unwrap();

    assert_eq!(value["headRatio"], 7.4);
    assert_eq!(value["bodyScore"], 55);
    assert!(value["verticalDev"].is_number());
    assert!(value["horizontalDev"].is_number());
    assert!(value["totalDev"].is_number());

    let philtrum = &value["partDetails"]["v_philtrum"];
    assert_eq!(philtrum["userVal"], 1.3);
    assert_eq!(philtrum["idealVal"], 1.3);
    assert_eq!(philtrum["score"], 80);

    let jaw = &value["partDetails"]["w_jaw"];
    assert!(jaw["score"].is_null());
    assert!(jaw["userVal"].is_null());
    assert_eq!(value["partDetails"].as_object().unwrap().len(), 16);
}
