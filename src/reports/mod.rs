use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use facedv::api::ResultReport;
use facedv::rank::{RankInfo, RgbColor};
use facedv::scorer::{ScoreBranch, ScoreDetails, ScoreResult};

fn rgb(c: RgbColor) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Rank badge cell in the tier's own colours.
fn rank_cell(rank: &RankInfo) -> Cell {
    Cell::new(format!(" {} ", rank.rank))
        .bg(rgb(rank.color))
        .fg(rgb(rank.text))
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_summary(report: &ResultReport) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Rank"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let total = &report.total;
    table.add_row(vec![
        Cell::new(format!("Total {}", total.icon).trim_end()).add_attribute(Attribute::Bold),
        Cell::new(total.score)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        rank_cell(&total.rank),
    ]);

    for row in &report.categories {
        table.add_row(vec![
            Cell::new(row.label),
            Cell::new(row.score),
            rank_cell(&row.rank),
        ]);
    }

    table.add_row(vec![
        Cell::new("Head ratio"),
        Cell::new(&report.head_ratio_display),
        Cell::new(""),
    ]);

    println!("\n{}", table);
}

pub fn print_part_report(report: &ResultReport) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Part").add_attribute(Attribute::Bold),
        Cell::new("Key"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Rank"),
        Cell::new("Measured"),
        Cell::new("Ideal").fg(Color::Green),
    ]);

    for i in [2, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in &report.parts {
        table.add_row(vec![
            Cell::new(row.label).add_attribute(Attribute::Bold),
            Cell::new(row.key),
            Cell::new(&row.score_display).fg(Color::Cyan),
            rank_cell(&row.rank),
            Cell::new(&row.measured_display),
            Cell::new(&row.ideal_display).fg(Color::Green),
        ]);
    }

    println!("\n{}", table);
    println!("\n{}", report.summary);
}

/// Raw intermediates, shown with `--debug`.
pub fn print_trace_report(details: &ScoreDetails) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Base"),
        Cell::new("Ideal"),
        Cell::new("Sigma"),
        Cell::new("Value"),
        Cell::new("z"),
        Cell::new("Branch"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let opt = |v: Option<f64>, precision: usize| {
        v.map_or_else(|| "-".to_string(), |x| format!("{:.*}", precision, x))
    };

    for t in &details.parts {
        let branch = match t.branch {
            Some(ScoreBranch::Gaussian) => Cell::new("gauss"),
            Some(ScoreBranch::LinearPenalty) => Cell::new("linear").fg(Color::Red),
            None => Cell::new("-"),
        };
        table.add_row(vec![
            Cell::new(t.key).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", t.base)),
            Cell::new(format!("{:.3}", t.ideal)),
            Cell::new(format!("{:.3}", t.sigma)),
            Cell::new(opt(t.value, 2)),
            Cell::new(opt(t.z, 3)),
            branch,
            Cell::new(opt(t.score, 2)).fg(Color::Cyan),
        ]);
    }

    println!("\n{}", table);
    println!(
        "L = {:.2}  W = {:.2}  vertical = {:.2}  horizontal = {:.2}  body = {:.2}  face = {:.2}  total = {:.2}",
        details.base.l,
        details.base.w,
        details.vertical_avg,
        details.horizontal_avg,
        details.body_score,
        details.face_balance,
        details.total
    );
}

pub fn print_batch_report(results: &[(String, ScoreResult, RankInfo)]) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Rank"),
        Cell::new("Vert"),
        Cell::new("Horiz"),
        Cell::new("Body"),
        Cell::new("Heads"),
    ]);

    for i in [0, 2, 4, 5, 6, 7] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (pos, (id, r, rank)) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(pos + 1),
            Cell::new(id).add_attribute(Attribute::Bold),
            Cell::new(r.total_dev).fg(Color::Cyan),
            rank_cell(rank),
            Cell::new(r.vertical_dev),
            Cell::new(r.horizontal_dev),
            Cell::new(r.body_score),
            Cell::new(
                r.head_ratio
                    .map_or_else(|| "-".to_string(), |h| format!("{:.1}", h)),
            ),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_rank(score: f64, rank: &RankInfo) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Rank"),
        Cell::new("Tier"),
        Cell::new("Background"),
        Cell::new("Text"),
    ]);
    table.add_row(vec![
        Cell::new(score),
        rank_cell(rank),
        Cell::new(format!("{:?}", rank.tier)),
        Cell::new(rank.color),
        Cell::new(rank.text),
    ]);
    println!("\n{}", table);
}
