use crate::reports;
use clap::Args;
use facedv::rank::classify;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

pub fn run(args: &RankArgs) {
    let rank = classify(args.score);
    reports::print_rank(args.score, &rank);
}
